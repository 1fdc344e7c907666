use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use tracing::{debug, warn};

use super::entry::{Entry, Filter, NOT_IN_PLAYLIST};
use super::error::PlaylistError;
use super::iter::PlaylistIter;
use super::order::ScanningOrder;

/// An ordered, duplicate-free list of shared songs.
///
/// `origin` holds every song in the playlist in insertion order. `songs` is
/// the current view: identical to `origin` until the first [`reorder`], then
/// the filtered and sorted result of the latest one. Songs added or removed
/// afterwards are applied to both.
///
/// [`reorder`]: Playlist::reorder
#[derive(Debug)]
pub struct Playlist<E: Entry> {
    songs: Vec<Rc<E>>,
    origin: Vec<Rc<E>>,
    count: usize,
    total_added: i32,
    filter: Filter<E::Genre>,
}

impl<E: Entry> Playlist<E> {
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            origin: Vec::new(),
            count: 0,
            total_added: 0,
            filter: Filter::default(),
        }
    }

    /// Append `song` and give it the next serial number.
    pub fn add(&mut self, song: Rc<E>) -> Result<(), PlaylistError> {
        // `origin` also covers songs hidden by the current view.
        if self.origin.iter().any(|s| *s == song) {
            return Err(PlaylistError::DuplicateEntry(song.to_string()));
        }

        self.total_added += 1;
        song.set_serial_number(self.total_added);
        debug!(serial = self.total_added, song = %song, "added song");

        self.origin.push(Rc::clone(&song));
        self.songs.push(song);
        self.count += 1;
        Ok(())
    }

    /// Remove the song equal to `song` from the current view.
    ///
    /// Returns `false`, changing nothing, when no such song is visible.
    pub fn remove(&mut self, song: &E) -> bool {
        let Some(pos) = self.songs.iter().position(|s| **s == *song) else {
            return false;
        };

        let removed = self.songs.remove(pos);
        self.origin.retain(|s| !Rc::ptr_eq(s, &removed));
        self.count -= 1;
        removed.set_serial_number(NOT_IN_PLAYLIST);
        debug!(song = %removed, "removed song");
        true
    }

    pub fn set_artist_filter(&mut self, artist: impl Into<String>) {
        self.filter.artist = Some(artist.into());
    }

    pub fn set_genre_filter(&mut self, genre: E::Genre) {
        self.filter.genre = Some(genre);
    }

    /// Hide songs longer than `max_duration` seconds. Zero lifts the limit.
    pub fn set_duration_filter(&mut self, max_duration: u32) {
        self.filter.max_duration = max_duration;
    }

    /// Replace all pending filter parameters at once.
    pub fn set_filter(&mut self, filter: Filter<E::Genre>) {
        self.filter = filter;
    }

    /// Filter parameters waiting for the next [`reorder`](Playlist::reorder).
    pub fn filter(&self) -> &Filter<E::Genre> {
        &self.filter
    }

    /// Rebuild the view from `origin`: drop songs excluded by the pending
    /// filters, sort the rest by `order`, then clear the filters.
    pub fn reorder(&mut self, order: ScanningOrder) {
        let mut view: Vec<Rc<E>> = self.origin.clone();
        view.retain(|s| !s.is_excluded_by(&self.filter));
        view.sort_by(|a, b| order.compare(&**a, &**b));

        let filter = std::mem::take(&mut self.filter);
        debug!(
            ?order,
            ?filter,
            kept = view.len(),
            total = self.origin.len(),
            "reordered playlist"
        );

        self.count = view.len();
        self.songs = view;
    }

    pub fn iter(&self) -> PlaylistIter<'_, E> {
        PlaylistIter::new(&self.songs)
    }

    /// Songs in the current view, in order.
    pub fn songs(&self) -> &[Rc<E>] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of songs ever added, i.e. the highest serial number handed out.
    pub fn total_added(&self) -> i32 {
        self.total_added
    }

    /// Sum of the songs' hashes, independent of order.
    pub fn content_hash(&self) -> u64 {
        self.songs.iter().fold(0u64, |acc, song| {
            let mut hasher = DefaultHasher::new();
            song.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        })
    }

    /// Copy the playlist, deep-copying each visible song in order.
    ///
    /// Copies get fresh serial numbers `1..=len`. Returns `None` if any song
    /// fails to clone.
    pub fn try_clone(&self) -> Option<Self> {
        let mut copy = Self::new();
        for song in &self.songs {
            let Some(dup) = song.try_clone() else {
                warn!(song = %song, "song could not be cloned, discarding playlist copy");
                return None;
            };
            if let Err(e) = copy.add(Rc::new(dup)) {
                warn!(error = %e, "cloned songs collide, discarding playlist copy");
                return None;
            }
        }
        Some(copy)
    }
}

impl<E: Entry> Default for Playlist<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts, for every song on the left, the equal songs on the right; equal
/// when the total matches the left length. Not symmetric when one side holds
/// more songs than the other.
impl<E: Entry> PartialEq for Playlist<E> {
    fn eq(&self, other: &Self) -> bool {
        let matches: usize = self
            .songs
            .iter()
            .map(|left| other.songs.iter().filter(|right| *right == left).count())
            .sum();
        matches == self.count
    }
}

impl<E: Entry> Hash for Playlist<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl<E: Entry> fmt::Display for Playlist<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, song) in self.songs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({song})")?;
        }
        f.write_str("]")
    }
}

impl<'a, E: Entry> IntoIterator for &'a Playlist<E> {
    type Item = &'a Rc<E>;
    type IntoIter = PlaylistIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
