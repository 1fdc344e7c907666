//! Errors raised by playlist operations.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    /// An equal song is already in the playlist.
    #[error("song already exists in playlist: {0}")]
    DuplicateEntry(String),

    /// A cursor was advanced past its last song.
    #[error("playlist cursor out of range: position {position}, length {len}")]
    OutOfRange { position: usize, len: usize },
}
