use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `PRIMAZE_LOG=primaze=trace`.
pub const LOG_ENV: &str = "PRIMAZE_LOG";
/// When set, logs are appended to this file instead of stderr.
pub const LOG_FILE_ENV: &str = "PRIMAZE_LOG_FILE";

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer on drop, so keep it alive until exit.
/// Calling this twice is harmless: the second subscriber is not installed and the
/// refusal is logged at debug level through the first one.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(std::path::Path::to_path_buf)
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "primaze.log".into());
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            if let Err(err) = installed {
                tracing::debug!("[logging] keeping existing subscriber: {}", err);
            }
            Some(guard)
        }
        None => {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
            if let Err(err) = installed {
                tracing::debug!("[logging] keeping existing subscriber: {}", err);
            }
            None
        }
    }
}
