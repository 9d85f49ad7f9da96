//! Songlist - in-memory model of songs, albums and playlists
//!
//! Albums and playlists share one ordered-collection type, [`SongList`].
//! Songs are shared between collections rather than copied, and an album
//! marks each song it adds with its [`AlbumId`].

pub mod demo;
pub mod error;
pub mod model;

pub use error::LibraryError;
pub use model::{AlbumId, Genre, Library, SharedSong, Song, SongList};
