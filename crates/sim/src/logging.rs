//! Log setup: human-readable stderr plus a per-run file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/zonesim/logs`
/// - Linux: `~/.cache/zonesim/logs` (or `$XDG_CACHE_HOME/zonesim/logs`)
/// - Windows: `%LOCALAPPDATA%\zonesim\logs`
/// - Fallback: `/tmp/zonesim/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "zonesim")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/zonesim"))
        .join("logs")
}

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. The returned
/// guard flushes the file writer when dropped, so keep it alive until exit.
pub fn setup_logging(log_dir: &Path, run_id: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_name = format!("{run_id}.log");
    let file_appender = tracing_appender::rolling::never(log_dir, &file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", log_dir.join(&file_name).display());
    Ok(guard)
}
