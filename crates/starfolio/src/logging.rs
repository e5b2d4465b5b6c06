//! Tracing setup. The terminal belongs to the UI, so events go to a file.

use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "starfolio=info";

const LOG_FILE_NAME: &str = "starfolio.log";

/// An installed file logger. Dropping it flushes pending lines.
#[derive(Debug)]
pub struct FileLog {
    pub path: PathBuf,
    _guard: WorkerGuard,
}

/// Pick the filter: an explicit directive wins over `RUST_LOG`.
fn filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// A background writer appending to `starfolio.log` in `dir`.
fn file_writer(dir: &Path) -> color_eyre::Result<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .wrap_err_with(|| format!("opening log file in {}", dir.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber.
///
/// Without a data directory logging is left disabled. Keep the returned
/// handle alive until shutdown or trailing lines are lost.
pub fn init(directive: Option<&str>) -> color_eyre::Result<Option<FileLog>> {
    let Some(path) = starfolio_config::log_file_path() else {
        return Ok(None);
    };
    let Some(dir) = path.parent() else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("creating log directory {}", dir.display()))?;
    let (writer, guard) = file_writer(dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(Some(FileLog {
        path: dir.join(LOG_FILE_NAME),
        _guard: guard,
    }))
}
