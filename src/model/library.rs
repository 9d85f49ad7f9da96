use super::{AlbumId, Song, SongList};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Music library holding albums and playlists
#[derive(Debug, Clone)]
pub struct Library {
    /// All albums indexed by their ID
    albums: HashMap<AlbumId, SongList>,

    /// All playlists, in the order they were added
    playlists: Vec<SongList>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            albums: HashMap::new(),
            playlists: Vec::new(),
        }
    }

    /// Add an album to the library
    ///
    /// Returns the album's id, or `None` (leaving the library unchanged) when
    /// `album` is a playlist or an album with the same id is already present.
    pub fn add_album(&mut self, album: SongList) -> Option<AlbumId> {
        let id = match album.album_details() {
            Some(details) => details.id,
            None => {
                log::warn!("'{}' is not an album, not adding it", album.title);
                return None;
            }
        };

        match self.albums.entry(id) {
            Entry::Occupied(_) => {
                log::warn!("Album {} ('{}') is already in the library", id, album.title);
                None
            }
            Entry::Vacant(slot) => {
                slot.insert(album);
                Some(id)
            }
        }
    }

    /// Add a playlist to the library
    ///
    /// Returns whether it was added; albums are refused.
    pub fn add_playlist(&mut self, playlist: SongList) -> bool {
        if !playlist.is_playlist() {
            log::warn!("'{}' is not a playlist, not adding it", playlist.title);
            return false;
        }
        self.playlists.push(playlist);
        true
    }

    /// Get an album by ID
    pub fn album(&self, id: &AlbumId) -> Option<&SongList> {
        self.albums.get(id)
    }

    pub fn album_mut(&mut self, id: &AlbumId) -> Option<&mut SongList> {
        self.albums.get_mut(id)
    }

    /// Resolve a song's album back-reference
    pub fn album_of(&self, song: &Song) -> Option<&SongList> {
        song.album.as_ref().and_then(|id| self.album(id))
    }

    /// First playlist with the given title
    pub fn playlist(&self, title: &str) -> Option<&SongList> {
        self.playlists.iter().find(|p| p.title == title)
    }

    pub fn playlist_mut(&mut self, title: &str) -> Option<&mut SongList> {
        self.playlists.iter_mut().find(|p| p.title == title)
    }

    /// Get all albums
    pub fn albums(&self) -> impl Iterator<Item = &SongList> {
        self.albums.values()
    }

    /// Get all playlists
    pub fn playlists(&self) -> &[SongList] {
        &self.playlists
    }

    /// Total number of albums
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
