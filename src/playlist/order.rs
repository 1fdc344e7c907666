//! Sort keys for [`Playlist::reorder`](super::Playlist::reorder).

use std::cmp::Ordering;

use serde::Deserialize;

use super::entry::Entry;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanningOrder {
    /// Ascending serial number, i.e. the order songs were added.
    #[serde(alias = "adding", alias = "added", alias = "serial")]
    Insertion,
    /// Ascending name, then artist.
    #[serde(alias = "alphabet", alias = "title")]
    Name,
    /// Ascending duration, then name, then artist.
    #[serde(alias = "length")]
    Duration,
}

impl Default for ScanningOrder {
    fn default() -> Self {
        Self::Insertion
    }
}

impl ScanningOrder {
    pub fn compare<E: Entry>(&self, a: &E, b: &E) -> Ordering {
        match self {
            ScanningOrder::Insertion => a.serial_number().cmp(&b.serial_number()),
            ScanningOrder::Name => by_name(a, b),
            ScanningOrder::Duration => a.duration().cmp(&b.duration()).then_with(|| by_name(a, b)),
        }
    }
}

fn by_name<E: Entry>(a: &E, b: &E) -> Ordering {
    a.name()
        .cmp(b.name())
        .then_with(|| a.artist().cmp(b.artist()))
}
