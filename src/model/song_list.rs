use super::{AlbumDetails, SharedSong, Song};
use crate::error::LibraryError;
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// What a song list is, plus the attributes only that variant carries
#[derive(Debug, Clone, Serialize)]
pub enum ListKind {
    Album(AlbumDetails),
    Playlist,
}

/// Ordered collection of songs, shared by albums and playlists
///
/// Insertion order is kept and duplicates are allowed. Songs are held through
/// [`SharedSong`] handles, so the same song can live in several lists.
#[derive(Debug, Clone, Serialize)]
pub struct SongList {
    /// Display title
    pub title: String,

    songs: Vec<SharedSong>,

    kind: ListKind,
}

impl SongList {
    /// Create an empty album
    pub fn album(
        title: impl Into<String>,
        artist: impl Into<String>,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            songs: Vec::new(),
            kind: ListKind::Album(AlbumDetails::new(artist, release_date)),
        }
    }

    /// Create an empty playlist
    pub fn playlist(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            songs: Vec::new(),
            kind: ListKind::Playlist,
        }
    }

    pub fn kind(&self) -> &ListKind {
        &self.kind
    }

    pub fn is_album(&self) -> bool {
        matches!(self.kind, ListKind::Album(_))
    }

    pub fn is_playlist(&self) -> bool {
        matches!(self.kind, ListKind::Playlist)
    }

    /// Album attributes, `None` for playlists
    pub fn album_details(&self) -> Option<&AlbumDetails> {
        match &self.kind {
            ListKind::Album(details) => Some(details),
            ListKind::Playlist => None,
        }
    }

    /// Mutable album attributes (e.g. to record band members)
    pub fn album_details_mut(&mut self) -> Option<&mut AlbumDetails> {
        match &mut self.kind {
            ListKind::Album(details) => Some(details),
            ListKind::Playlist => None,
        }
    }

    /// Append a song
    ///
    /// Albums stamp their id on the song first, replacing any earlier
    /// back-reference. Playlists leave the song untouched and never borrow it
    /// mutably, so a song can be added while it is being read elsewhere.
    ///
    /// # Panics
    ///
    /// Adding to an album panics if the song is borrowed at the time.
    pub fn add(&mut self, song: SharedSong) {
        match self.album_details().map(|details| details.id) {
            Some(album_id) => self.add_with(song, move |s| s.album = Some(album_id)),
            None => self.push(song),
        }
    }

    /// Append a song after running `on_add` against it
    ///
    /// # Panics
    ///
    /// `on_add` needs a mutable borrow of the song, so this panics if the song
    /// is borrowed at the time.
    pub fn add_with<F>(&mut self, song: SharedSong, on_add: F)
    where
        F: FnOnce(&mut Song),
    {
        on_add(&mut *song.borrow_mut());
        self.push(song);
    }

    fn push(&mut self, song: SharedSong) {
        log::debug!("Added '{}' to '{}'", song.borrow().title, self.title);
        self.songs.push(song);
    }

    /// Remove the first occurrence of `song` (by identity)
    ///
    /// Returns whether anything was removed. A missing song is not an error.
    /// The song's album back-reference is left as it was.
    pub fn remove(&mut self, song: &SharedSong) -> bool {
        match self.songs.iter().position(|s| Rc::ptr_eq(s, song)) {
            Some(index) => {
                self.songs.remove(index);
                log::debug!("Removed '{}' from '{}'", song.borrow().title, self.title);
                true
            }
            None => false,
        }
    }

    /// Song at `index`, or `None` when `index` is outside `0..len()`
    pub fn get(&self, index: isize) -> Option<SharedSong> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.songs.get(i))
            .cloned()
    }

    /// Whether this exact song handle is in the list
    pub fn contains(&self, song: &SharedSong) -> bool {
        self.songs.iter().any(|s| Rc::ptr_eq(s, song))
    }

    /// Sum of all song durations in minutes, computed from current contents
    pub fn total_runtime(&self) -> f64 {
        self.songs
            .iter()
            .fold(0.0, |total, song| total + song.borrow().duration)
    }

    /// Songs in order
    pub fn iter(&self) -> impl Iterator<Item = &SharedSong> {
        self.songs.iter()
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Shuffle a playlist using the thread-local RNG
    pub fn shuffle(&mut self) -> Result<(), LibraryError> {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Shuffle a playlist using `rng`
    ///
    /// Each song draws an independent random key and the list is sorted by
    /// key. The result is always a permutation of the previous contents.
    /// Albums cannot be shuffled.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), LibraryError> {
        if self.is_album() {
            return Err(LibraryError::ShuffleUnsupported {
                title: self.title.clone(),
            });
        }

        let mut keyed: Vec<(u64, SharedSong)> =
            self.songs.drain(..).map(|song| (rng.gen(), song)).collect();
        keyed.sort_by_key(|(key, _)| *key);
        self.songs = keyed.into_iter().map(|(_, song)| song).collect();

        log::debug!("Shuffled '{}' ({} songs)", self.title, self.songs.len());
        Ok(())
    }
}

impl fmt::Display for SongList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Total Runtime: {} mins", self.title, self.total_runtime())?;
        if let ListKind::Album(details) = &self.kind {
            write!(
                f,
                " - Artist: {}, Release Date: {}",
                details.artist,
                details.short_release_date()
            )?;
        }
        Ok(())
    }
}
