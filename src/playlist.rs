//! Playlist module: the song collection with its filter/sort pipeline.
//!
//! `Playlist` lives in `playlist::model`; the song contract it relies on is
//! in `playlist::entry`, and sort keys in `playlist::order`.

mod entry;
mod error;
mod iter;
mod model;
mod order;

pub use entry::{Entry, Filter, NOT_IN_PLAYLIST};
pub use error::PlaylistError;
pub use iter::PlaylistIter;
pub use model::Playlist;
pub use order::ScanningOrder;
