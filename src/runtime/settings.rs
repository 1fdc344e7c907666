use crate::config;

/// Load and validate settings. On failure the message explains why the
/// caller should fall back to defaults.
pub fn load_settings() -> Result<config::Settings, String> {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config, using defaults: {msg}")),
        },
        // Config is optional; failures should not prevent the run.
        Err(e) => Err(format!("failed to load config, using defaults: {e}")),
    }
}
