use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "vocabutech.log";

/// Keeps the non-blocking file writer alive; dropping it flushes and stops
/// file logging.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true);
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    if let Some((file_writer, guard)) = file_writer() {
        registry
            .with(fmt::layer().with_writer(file_writer).with_ansi(false))
            .init();
        return Some(FileLogGuard { _guard: guard });
    }

    registry.init();
    None
}

fn file_writer() -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let enabled = std::env::var("ENABLE_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    if !enabled {
        return None;
    }

    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!("failed to create log directory {log_dir}: {err}");
        return None;
    }

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);
    Some(tracing_appender::non_blocking(appender))
}
