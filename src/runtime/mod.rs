use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{info, warn};

use crate::config::{self, PlaylistSettings};
use crate::library::{Song, SongPlaylist, scan};
use crate::playlist::Entry;

mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = settings::load_settings();
    let settings = loaded.clone().unwrap_or_default();
    logging::init(&settings.logging);
    match &loaded {
        Ok(_) => {
            if let Some(path) = config::resolve_config_path() {
                info!(path = %path.display(), "configuration loaded");
            }
        }
        Err(msg) => warn!("{msg}"),
    }

    let dir = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(format!("not a directory: {}", dir.display()).into());
    }

    let songs = scan(&dir, &settings.library);
    let playlist = build_playlist(songs, &settings.playlist);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_playlist(&mut out, &playlist)?;
    out.flush()?;
    Ok(())
}

/// Add `songs` in order, skipping duplicates, then apply the configured
/// filters and order.
fn build_playlist(songs: Vec<Song>, settings: &PlaylistSettings) -> SongPlaylist {
    let mut playlist = SongPlaylist::new();
    for song in songs {
        if let Err(e) = playlist.add(Rc::new(song)) {
            warn!(error = %e, "skipping song");
        }
    }

    playlist.set_filter(settings.filter());
    playlist.reorder(settings.order);
    playlist
}

/// One song per line prefixed by its serial number, then a summary line.
fn write_playlist<W: Write>(out: &mut W, playlist: &SongPlaylist) -> io::Result<()> {
    let mut it = playlist.iter();
    while it.has_next() {
        let Ok(song) = it.next_song() else {
            break;
        };
        writeln!(out, "{:>4}  {}", song.serial_number(), song)?;
    }
    writeln!(
        out,
        "{} of {} songs",
        playlist.len(),
        playlist.total_added()
    )
}
