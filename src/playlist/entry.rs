//! The capabilities a playlist needs from the songs it holds.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Serial number carried by a song that is not in any playlist.
pub const NOT_IN_PLAYLIST: i32 = -1;

/// A song as seen by [`Playlist`](super::Playlist).
///
/// Equality and hashing are the implementor's identity rules; the playlist
/// only ever compares songs through them. The serial number is mutated
/// through `&self` since songs are shared with the caller.
pub trait Entry: PartialEq + Hash + Display + Sized {
    type Genre: Copy + PartialEq + Debug;

    fn name(&self) -> &str;
    fn artist(&self) -> &str;
    fn genre(&self) -> Self::Genre;
    /// Length in whole seconds.
    fn duration(&self) -> u32;

    fn serial_number(&self) -> i32;
    fn set_serial_number(&self, serial: i32);

    /// Deep copy, or `None` when this song cannot be duplicated.
    fn try_clone(&self) -> Option<Self>;

    /// Whether `filter` hides this song. Unset parameters never exclude.
    fn is_excluded_by(&self, filter: &Filter<Self::Genre>) -> bool;
}

/// Pending filter parameters. `max_duration == 0` means no limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<G> {
    pub artist: Option<String>,
    pub genre: Option<G>,
    pub max_duration: u32,
}

impl<G> Filter<G> {
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.genre.is_none() && self.max_duration == 0
    }
}

impl<G> Default for Filter<G> {
    fn default() -> Self {
        Self {
            artist: None,
            genre: None,
            max_duration: 0,
        }
    }
}
