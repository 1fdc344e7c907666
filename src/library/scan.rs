use std::path::Path;

use lofty::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Genre, Song};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Map a free-form tag value to a `Genre`, falling back to `Genre::Other`.
pub(crate) fn genre_from_tag(value: Option<&str>) -> Genre {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(Genre::Other)
}

fn read_song(path: &Path) -> Song {
    let mut name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist = String::new();
    let mut genre = Genre::Other;
    let mut duration = 0u32;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let secs = tagged.properties().duration().as_secs();
            duration = u32::try_from(secs).unwrap_or(u32::MAX);

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title() {
                    if !v.trim().is_empty() {
                        name = v.trim().to_string();
                    }
                }
                if let Some(v) = tag.artist() {
                    artist = v.trim().to_string();
                }
                genre = genre_from_tag(tag.genre().as_deref());
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read tags, using file name");
        }
    }

    Song::new(name, artist, genre, duration)
}

/// Collect every matching audio file under `dir` as a `Song`, ordered by path.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Song> {
    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let songs: Vec<Song> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|entry| {
            let path = entry.path();
            path.is_file()
                && (settings.include_hidden || !is_hidden(path))
                && is_audio_file(path, settings)
        })
        .map(|entry| read_song(entry.path()))
        .collect();

    debug!(dir = %dir.display(), found = songs.len(), "scanned library");
    songs
}
