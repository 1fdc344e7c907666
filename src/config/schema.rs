use serde::Deserialize;

use crate::library::Genre;
use crate::playlist::{Filter, ScanningOrder};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/songlist/config.toml` or `~/.config/songlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SONGLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playlist: PlaylistSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

/// How the scanned songs are filtered and ordered before printing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Sort order applied by the reorder pass.
    ///
    /// One of "insertion", "name", "duration".
    pub order: ScanningOrder,
    /// Keep only songs by this exact artist.
    pub artist: Option<String>,
    /// Keep only songs of this genre.
    pub genre: Option<Genre>,
    /// Keep only songs at most this many seconds long. 0 = no limit.
    pub max_duration: u32,
}

impl PlaylistSettings {
    pub fn filter(&self) -> Filter<Genre> {
        Filter {
            artist: self.artist.clone().filter(|a| !a.is_empty()),
            genre: self.genre,
            max_duration: self.max_duration,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default log level when `RUST_LOG` is not set.
    ///
    /// One of "off", "error", "warn", "info", "debug", "trace".
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
