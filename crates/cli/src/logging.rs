use anyhow::anyhow;
use devis_core::config::{AppConfig, LogFormat};
use tracing::Level;

/// Installs the global subscriber. Output goes to stderr so command output on
/// stdout stays machine-readable.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level);

    let installed = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|error| anyhow!("failed to install log subscriber: {error}"))
}
