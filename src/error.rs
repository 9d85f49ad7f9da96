//! Error types for the library model

use thiserror::Error;

/// Errors raised by the few model operations that can fail
///
/// Lookups and removals never fail; they report absence through `Option`
/// or do nothing.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    #[error("'{title}' is an album and cannot be shuffled")]
    ShuffleUnsupported { title: String },
}
