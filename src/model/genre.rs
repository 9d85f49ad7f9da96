use crate::error::LibraryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Musical genre of a song
///
/// New genres are added as new variants; rendering and parsing pick them up
/// through [`Genre::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    Rock,
    Pop,
    HipHop,
    Jazz,
    Electronic,
    Classical,
    Country,
    Blues,
}

impl Genre {
    /// Every known genre, in declaration order
    pub const ALL: [Genre; 8] = [
        Genre::Rock,
        Genre::Pop,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Electronic,
        Genre::Classical,
        Genre::Country,
        Genre::Blues,
    ];

    /// Variant name, as shown in song renderings
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Rock => "Rock",
            Genre::Pop => "Pop",
            Genre::HipHop => "HipHop",
            Genre::Jazz => "Jazz",
            Genre::Electronic => "Electronic",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Blues => "Blues",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = LibraryError;

    /// Case-insensitive; spaces, dashes and underscores are ignored
    /// so "hip-hop" and "Hip Hop" both parse as [`Genre::HipHop`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| LibraryError::UnknownGenre(s.to_string()))
    }
}
