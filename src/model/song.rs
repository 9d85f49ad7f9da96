use super::{AlbumId, Genre};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle to a song that may sit in several collections at once
///
/// Collections clone the handle, never the song, so a change made through one
/// collection (an album stamping its id) is visible from all of them.
pub type SharedSong = Rc<RefCell<Song>>;

/// A single track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    /// Track title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Duration in minutes (not validated, negative values are kept as-is)
    pub duration: f64,

    pub genre: Genre,

    /// Album that most recently added this song, if any
    ///
    /// Only [`SongList::add`](super::SongList::add) on an album writes this.
    /// Removing the song from that album leaves it in place.
    pub album: Option<AlbumId>,
}

impl Song {
    /// Create a standalone song with no album reference
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: f64,
        genre: Genre,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
            genre,
            album: None,
        }
    }

    /// Wrap the song in a shareable handle
    pub fn into_shared(self) -> SharedSong {
        Rc::new(RefCell::new(self))
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} mins) Genre: {}",
            self.title, self.artist, self.duration, self.genre
        )
    }
}
