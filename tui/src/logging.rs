use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub(crate) const LOG_FILE_NAME: &str = "gimnasio-tui.log";
const DEFAULT_LOG_FILTER: &str = "gimnasio_tui=info,gimnasio_overlay=info";

/// Route `tracing` output to `<log_dir>/gimnasio-tui.log`; the terminal
/// itself belongs to the UI. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub(crate) fn init(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(file_layer).try_init()?;
    Ok(guard)
}
