//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_FILTER, LOG_FILE_NAME};
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation under `logs/` (or `WALLET_LOG_DIR`)
/// - Non-blocking writes so logging never stalls a frame
/// - Optional stderr mirror (`WALLET_LOG_STDERR=1`)
/// - Panic hook that records the panic before the default handler runs
///
/// Calling this twice keeps the first subscriber.
pub fn init() {
    let config = DebugConfig::from_env();

    let file_ready = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: Failed to create log directory, logging to stderr only: {}", e);
            false
        }
    };

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = if file_ready {
        let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let stderr_layer = stderr_enabled(&config, file_ready)
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return;
    }

    if file_ready {
        tracing::info!(
            log_file = %config.log_file.display(),
            log_level = %config.log_level,
            "Logging initialized"
        );
    } else {
        tracing::warn!(log_dir = %config.log_dir.display(), "File logging unavailable, using stderr");
    }

    setup_panic_hook();

    // The writer thread must outlive every log call.
    if let Some(guard) = guard {
        std::mem::forget(guard);
    }
}

/// Stderr is mirrored on request, and always used when there is no log file.
fn stderr_enabled(config: &DebugConfig, file_ready: bool) -> bool {
    config.log_to_stderr || !file_ready
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        super::error_aggregator::record_panic(message.clone(), Some(location.clone()));
        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_to_stderr: bool) -> DebugConfig {
        DebugConfig::from_lookup(|key| (key == "WALLET_LOG_STDERR" && log_to_stderr).then(|| "1".to_string()))
    }

    #[test]
    fn test_stderr_fallback_without_log_file() {
        assert!(stderr_enabled(&config(false), false));
        assert!(!stderr_enabled(&config(false), true));
        assert!(stderr_enabled(&config(true), true));
    }
}
