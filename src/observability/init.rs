//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "autoselect.log";

/// Initializes the global tracing subscriber.
///
/// Sets up a pipeline that:
/// 1. Filters events by the configured level (`trace_level`, default `info`)
/// 2. Formats them as plain text lines without ANSI colors
/// 3. Appends them to `autoselect.log` in the data directory, rotating at
///    10 MB with three backups
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if that fails; logging is optional
/// - Only the first call in a process installs the subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFile::new(data_dir.join(LOG_FILE_NAME));
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!(level = %level, "tracing initialized");
}
