//! Fixed demonstration sequence
//!
//! Builds a small library, shuffles a playlist and prints the results.
//! This is a caller of the model, not part of it.

pub mod config;

pub use config::DemoConfig;

use crate::model::{Genre, Library, Song, SongList};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Run the demonstration, writing human-readable output to `out`
///
/// Returns the library that was built so callers can inspect it.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<Library> {
    let mut library = Library::new();

    let release_date = NaiveDate::from_ymd_opt(2022, 1, 1).context("Invalid release date")?;
    let mut album = SongList::album("Album 1", "Artist 1", release_date);
    album.add(Song::new("Song 1", "Artist 1", 3.5, Genre::Rock).into_shared());
    album.add(Song::new("Song 2", "Artist 1", 4.2, Genre::Pop).into_shared());
    let album_id = library
        .add_album(album)
        .context("Failed to register album")?;

    let mut playlist = SongList::playlist("My Playlist");
    playlist.add(Song::new("Song 3", "Artist 2", 2.8, Genre::HipHop).into_shared());

    writeln!(out, "{}", playlist)?;

    let first = library
        .album(&album_id)
        .and_then(|album| album.get(0))
        .context("Album has no first song")?;
    playlist.add(first);

    match config.seed {
        Some(seed) => {
            log::info!("Shuffling with seed {}", seed);
            playlist.shuffle_with(&mut StdRng::seed_from_u64(seed))?;
        }
        None => playlist.shuffle()?,
    }
    writeln!(out, "Shuffled Playlist:")?;
    writeln!(out, "{}", playlist)?;

    if let Some(song) = playlist.get(0) {
        let song = song.borrow();
        writeln!(out, "Details of Specific Song:")?;
        writeln!(out, "{}", song)?;
        match library.album_of(&song) {
            Some(album) => writeln!(out, "Album: {}", album)?,
            None => writeln!(out, "Album: ")?,
        }
    }

    if config.json {
        let json =
            serde_json::to_string_pretty(&playlist).context("Failed to serialize playlist")?;
        writeln!(out, "{}", json)?;
    }

    library.add_playlist(playlist);
    log::info!(
        "Demo library: {} albums, {} playlists",
        library.album_count(),
        library.playlist_count()
    );

    Ok(library)
}
