//! Forward-only cursor over a playlist's current view.

use std::rc::Rc;

use super::error::PlaylistError;

/// Borrows the songs it walks, so the playlist cannot change underneath it.
pub struct PlaylistIter<'a, E> {
    songs: &'a [Rc<E>],
    position: usize,
}

impl<'a, E> PlaylistIter<'a, E> {
    pub(crate) fn new(songs: &'a [Rc<E>]) -> Self {
        Self { songs, position: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.songs.len()
    }

    /// Advance, failing with [`PlaylistError::OutOfRange`] once exhausted.
    pub fn next_song(&mut self) -> Result<&'a Rc<E>, PlaylistError> {
        let song = self
            .songs
            .get(self.position)
            .ok_or(PlaylistError::OutOfRange {
                position: self.position,
                len: self.songs.len(),
            })?;
        self.position += 1;
        Ok(song)
    }
}

impl<'a, E> Iterator for PlaylistIter<'a, E> {
    type Item = &'a Rc<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_song().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.songs.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<E> ExactSizeIterator for PlaylistIter<'_, E> {}
