//! Song playlists with attribute filters and sort orders.
//!
//! The [`playlist`] module holds the collection itself. [`library`] provides
//! the `Song` record and a tag scanner, [`config`] the settings layer, and
//! [`runtime`] the command-line driver built on top of them.

pub mod config;
pub mod library;
pub mod playlist;
pub mod runtime;
