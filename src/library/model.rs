use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Deserialize;

use crate::playlist::{Entry, Filter, NOT_IN_PLAYLIST};

/// Musical genre of a song.
///
/// Deserializes through [`FromStr`], so config accepts the same spellings
/// as tag values, including the rendered form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Genre {
    Pop,
    Rock,
    Jazz,
    Blues,
    Classical,
    Country,
    Electronic,
    HipHop,
    Metal,
    Folk,
    Reggae,
    Soul,
    Other,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::Jazz => "Jazz",
            Genre::Blues => "Blues",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Electronic => "Electronic",
            Genre::HipHop => "Hip-Hop",
            Genre::Metal => "Metal",
            Genre::Folk => "Folk",
            Genre::Reggae => "Reggae",
            Genre::Soul => "Soul",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: {0:?}")]
pub struct ParseGenreError(pub String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    /// Case-insensitive; spaces, dashes and underscores are ignored so
    /// tag values like "Hip Hop" and "hip-hop" agree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let genre = match key.as_str() {
            "pop" => Genre::Pop,
            "rock" | "rock&roll" | "rocknroll" => Genre::Rock,
            "jazz" => Genre::Jazz,
            "blues" => Genre::Blues,
            "classical" => Genre::Classical,
            "country" => Genre::Country,
            "electronic" | "electronica" | "edm" => Genre::Electronic,
            "hiphop" | "rap" => Genre::HipHop,
            "metal" | "heavymetal" => Genre::Metal,
            "folk" => Genre::Folk,
            "reggae" => Genre::Reggae,
            "soul" | "r&b" | "rnb" => Genre::Soul,
            "other" => Genre::Other,
            _ => return Err(ParseGenreError(s.to_string())),
        };
        Ok(genre)
    }
}

impl TryFrom<String> for Genre {
    type Error = ParseGenreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single playlist song.
///
/// Identity (equality and hashing) covers name, artist, genre and duration.
/// The serial number is bookkeeping owned by whichever [`Playlist`] the song
/// was last added to, so it lives in a `Cell` and is updated through shared
/// references.
///
/// [`Playlist`]: crate::playlist::Playlist
#[derive(Debug, Clone)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub genre: Genre,
    /// Length in whole seconds.
    pub duration: u32,
    serial_number: Cell<i32>,
}

impl Song {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: Genre,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre,
            duration,
            serial_number: Cell::new(NOT_IN_PLAYLIST),
        }
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.artist == other.artist
            && self.genre == other.genre
            && self.duration == other.duration
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.artist.hash(state);
        self.genre.hash(state);
        self.duration.hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name, self.artist, self.genre, self.duration
        )
    }
}

impl Entry for Song {
    type Genre = Genre;

    fn name(&self) -> &str {
        &self.name
    }

    fn artist(&self) -> &str {
        &self.artist
    }

    fn genre(&self) -> Genre {
        self.genre
    }

    fn duration(&self) -> u32 {
        self.duration
    }

    fn serial_number(&self) -> i32 {
        self.serial_number.get()
    }

    fn set_serial_number(&self, serial: i32) {
        self.serial_number.set(serial);
    }

    fn try_clone(&self) -> Option<Self> {
        let copy = self.clone();
        copy.serial_number.set(NOT_IN_PLAYLIST);
        Some(copy)
    }

    fn is_excluded_by(&self, filter: &Filter<Genre>) -> bool {
        if let Some(artist) = filter.artist.as_deref() {
            if self.artist != artist {
                return true;
            }
        }
        if let Some(genre) = filter.genre {
            if self.genre != genre {
                return true;
            }
        }
        filter.max_duration > 0 && self.duration > filter.max_duration
    }
}
