//! Log file setup
//!
//! The terminal belongs to the UI while the app runs, so events go to a
//! file under the user's state directory and never to stdout or stderr.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "perfil-tui.log";

const DEFAULT_FILTER: &str = "perfil_tui=info";

/// State directory where available (Linux), else the local data directory
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "perfil", "perfil-tui").map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf()
    })
}

/// Non-blocking writer appending to `log_dir/perfil-tui.log`
pub fn file_writer(log_dir: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

/// Subscriber writing plain (no ANSI) lines to `writer`, filtered by `RUST_LOG`
pub fn subscriber(writer: NonBlocking) -> impl tracing::Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer),
    )
}

/// Install the global file subscriber.
///
/// Returns the guard that flushes the writer on drop; keep it alive until
/// exit. Without a usable log directory no subscriber is installed and
/// events are discarded.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    let (writer, guard) = file_writer(&dir).ok()?;
    subscriber(writer).init();
    tracing::info!("Logging to {}", dir.join(LOG_FILE_NAME).display());
    Some(guard)
}
