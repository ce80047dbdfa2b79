//! Tracing subscriber setup.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Log file name prefix; the daily roller appends the date.
pub const LOG_FILE_NAME: &str = "edurate.log";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured level. When file logging is enabled
/// and a directory is given, a daily rolling file is written as well; the
/// returned guard must be held until shutdown so buffered lines are flushed.
pub fn init_logging(config: &LoggingConfig, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    let (file_layer, guard) = match log_dir.filter(|_| config.file_logging) {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
