//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/hengio/hengio.log` (or platform equivalent)
//! with 10 MB size-based rotation. The console layer writes to stderr so
//! the prompt and countdown output keep stdout to themselves. Set
//! `DEBUG_LOGGING=1` to enable debug output for hengio crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize logging with dual output (file + stderr).
///
/// Returns a `WorkerGuard` that must be held for the application lifetime
/// so buffered logs are flushed on shutdown.
///
/// # Fallback
/// If the log directory or file cannot be created, returns `None` and
/// falls back to stderr-only logging.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    // Config directory: ~/.config/hengio on Linux, %APPDATA%/hengio on Windows
    let log_dir = match dirs::config_dir() {
        Some(config) => config.join("hengio"),
        None => {
            init_stderr_only(debug_logging);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Can't use tracing yet since the subscriber is not initialized
        eprintln!("Failed to create log directory {log_dir:?}: {e}, using stderr only");
        init_stderr_only(debug_logging);
        return None;
    }

    // Size-based rolling file appender (10 MB, keep 1 rotated file)
    let log_path = log_dir.join("hengio.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(10 * 1024 * 1024),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {log_path:?}: {e}");
            init_stderr_only(debug_logging);
            return None;
        }
    };

    // Wrap in a non-blocking writer for async-safe logging
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,hengio_cli=debug,hengio_core=debug"
    } else {
        "info"
    };

    // Single filter for both layers
    let filter = EnvFilter::new(filter_directive);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "logging initialized");

    Some(guard)
}

/// Fallback when file logging is unavailable.
fn init_stderr_only(debug_logging: bool) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,hengio_cli=debug,hengio_core=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::info!(debug_logging, "logging initialized (stderr only)");
}
