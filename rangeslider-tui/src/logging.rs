//! File logging for the TUI. The terminal belongs to ratatui, so events go to
//! `<data dir>/rangeslider/rangeslider.log` through a non-blocking writer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "RANGESLIDER_LOG";
pub const DEFAULT_DIRECTIVES: &str = "info";
const LOG_FILE: &str = "rangeslider.log";

/// Keeps the background writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    pub fn file(&self) -> &Path {
        &self.path
    }
}

pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rangeslider")
}

/// Filter from `directives`, or [`DEFAULT_DIRECTIVES`] when unset.
pub fn build_env_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let directives = directives.unwrap_or(DEFAULT_DIRECTIVES);
    EnvFilter::try_new(directives).with_context(|| format!("invalid {LOG_ENV}: {directives:?}"))
}

pub fn setup_logs(dir: &Path) -> Result<LoggingGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    let env = std::env::var(LOG_ENV).ok();
    let filter = build_env_filter(env.as_deref())?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("cannot install log subscriber")?;

    Ok(LoggingGuard {
        _guard: guard,
        path: dir.join(LOG_FILE),
    })
}
