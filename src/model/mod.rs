//! In-memory music library model
//!
//! Songs are shared between collections through reference-counted handles.
//! Albums and playlists are the two kinds of [`SongList`].

mod album;
mod genre;
mod library;
mod song;
mod song_list;

pub use album::{AlbumDetails, AlbumId};
pub use genre::Genre;
pub use library::Library;
pub use song::{SharedSong, Song};
pub use song_list::{ListKind, SongList};
