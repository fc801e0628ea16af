use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_ENV: &str = "CONSOLE_EDITOR_LOG";
const DEFAULT_FILTER: &str = "console_editor=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber: a daily rolling file under `log_dir`
/// (or the per-user log directory), plus stderr when `verbose`.
pub fn init(log_dir: Option<PathBuf>, verbose: bool) -> Option<LoggingGuard> {
    let log_dir = match log_dir {
        Some(dir) => std::fs::create_dir_all(&dir).map(|_| dir),
        None => console_editor::kernel::services::adapters::ensure_log_dir(),
    }
    .or_else(|_| -> std::io::Result<PathBuf> {
        let dir = std::env::temp_dir().join("console_editor").join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    })
    .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "console_editor.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter());

    let stderr_layer = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter())
    });

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer);

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
