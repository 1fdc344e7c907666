//! Configuration loader and schema types.
//!
//! Settings cover where songs are scanned from, how the playlist is filtered
//! and ordered, and the default log level.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;

#[cfg(test)]
mod tests;
