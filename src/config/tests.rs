use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::library::Genre;
use crate::playlist::ScanningOrder;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

/// Point the loader at `contents` written to a fresh config file.
fn with_config_file(contents: &str) -> (tempfile::TempDir, EnvGuard) {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, contents).unwrap();
    let guard = EnvGuard::set("SONGLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    (dir, guard)
}

#[test]
fn resolve_config_path_prefers_songlist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SONGLIST_CONFIG_PATH", "/tmp/songlist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/songlist-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("songlist")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("songlist")
            .join("config.toml")
    );
}

#[test]
fn defaults_apply_no_filter_and_insertion_order() {
    let s = Settings::default();
    assert_eq!(s.playlist.order, ScanningOrder::Insertion);
    assert!(s.playlist.filter().is_empty());
    assert_eq!(s.logging.level, "warn");
    assert!(s.library.recursive);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_order_aliases() {
    let _lock = env_lock();
    let (_dir, _g1) = with_config_file(
        r#"
[playlist]
order = "length"
artist = "Miles Davis"
genre = "hip-hop"
max_duration = 240

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
max_depth = 3

[logging]
level = "debug"
"#,
    );
    let _g2 = EnvGuard::remove("SONGLIST__PLAYLIST__MAX_DURATION");

    let s = Settings::load().unwrap();
    assert_eq!(s.playlist.order, ScanningOrder::Duration);
    assert_eq!(s.playlist.artist.as_deref(), Some("Miles Davis"));
    assert_eq!(s.playlist.genre, Some(Genre::HipHop));
    assert_eq!(s.playlist.max_duration, 240);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(3));
    assert_eq!(s.logging.level, "debug");

    let filter = s.playlist.filter();
    assert_eq!(filter.artist.as_deref(), Some("Miles Davis"));
    assert_eq!(filter.genre, Some(Genre::HipHop));
    assert_eq!(filter.max_duration, 240);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();
    let (_dir, _g1) = with_config_file(
        r#"
[playlist]
max_duration = 240
order = "name"
"#,
    );
    let _g2 = EnvGuard::set("SONGLIST__PLAYLIST__MAX_DURATION", "90");

    let s = Settings::load().unwrap();
    assert_eq!(s.playlist.max_duration, 90);
    assert_eq!(s.playlist.order, ScanningOrder::Name);
}

#[test]
fn settings_load_rejects_unknown_order() {
    let _lock = env_lock();
    let (_dir, _g1) = with_config_file(
        r#"
[playlist]
order = "shuffle"
"#,
    );
    assert!(Settings::load().is_err());
}

#[test]
fn settings_load_accepts_rendered_and_spaced_genre_names() {
    let _lock = env_lock();
    let _g2 = EnvGuard::remove("SONGLIST__PLAYLIST__GENRE");
    for (text, genre) in [
        ("Jazz", Genre::Jazz),
        ("Hip-Hop", Genre::HipHop),
        ("Hip Hop", Genre::HipHop),
        ("ROCK", Genre::Rock),
    ] {
        let (_dir, _g1) = with_config_file(&format!("[playlist]\ngenre = \"{text}\"\n"));
        let s = Settings::load().unwrap();
        assert_eq!(s.playlist.genre, Some(genre), "genre = {text:?}");
    }
}

#[test]
fn settings_load_rejects_unknown_genre() {
    let _lock = env_lock();
    let (_dir, _g1) = with_config_file(
        r#"
[playlist]
genre = "polka"
"#,
    );
    assert!(Settings::load().is_err());
}

#[test]
fn empty_artist_is_treated_as_unset() {
    let s = PlaylistSettings {
        artist: Some(String::new()),
        ..PlaylistSettings::default()
    };
    assert!(s.filter().is_empty());
}

#[test]
fn validate_rejects_empty_extensions_and_unknown_levels() {
    let mut s = Settings::default();
    s.library.extensions = vec![" ".into(), ".".into()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.logging.level = "loud".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.logging.level = "INFO".into();
    assert!(s.validate().is_ok());
}
