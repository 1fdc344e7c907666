use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.trim().to_ascii_lowercase()));

    // A subscriber may already be installed (e.g. by an embedding program).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
