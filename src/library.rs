//! Song records and the directory scanner that builds them from audio tags.

mod model;
mod scan;

pub use model::{Genre, ParseGenreError, Song};
pub use scan::scan;

/// Playlist of scanned songs.
pub type SongPlaylist = crate::playlist::Playlist<Song>;
