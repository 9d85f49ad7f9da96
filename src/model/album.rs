use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifier of an album, used as the song-to-album back-reference
///
/// Every album gets a fresh id when it is created, so two albums with the same
/// title, artist and date stay distinct. The id does not keep the album alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AlbumId(Uuid);

impl AlbumId {
    /// Generate a new unique identifier
    pub fn new() -> Self {
        AlbumId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AlbumId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AlbumId {
    fn from(u: Uuid) -> Self {
        AlbumId(u)
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Album-only attributes of a song list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumDetails {
    pub id: AlbumId,

    /// Album artist
    pub artist: String,

    /// Band member names, in the order they were added
    pub band_members: Vec<String>,

    pub release_date: NaiveDate,
}

impl AlbumDetails {
    pub fn new(artist: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            id: AlbumId::new(),
            artist: artist.into(),
            band_members: Vec::new(),
            release_date,
        }
    }

    /// Release date in short month/day/year form, e.g. `1/1/2022`
    pub fn short_release_date(&self) -> String {
        self.release_date.format("%-m/%-d/%Y").to_string()
    }
}
