//! Logging setup: compact stderr output, plus an optional JSON file.

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Events go to stderr in compact form. `RUST_LOG` controls the filter when
/// set; otherwise `verbose` selects debug or info for this crate. When a log
/// file is given, events are additionally appended as JSON lines to a
/// daily-rolling file with that name.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bookshelf={}", default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        // A bare filename has an empty parent; roll the file in "." then.
        let dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let _ = std::fs::create_dir_all(dir);
        let prefix = log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("bookshelf.log"));

        let file_layer = fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, prefix))
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_events_are_accepted_after_init() {
        // The global subscriber can only be set once per process, so both
        // tests go through the same guarded initialization.
        init_test_logging();
        tracing::debug!("catalog logging smoke test");
    }

    #[test]
    fn test_init_is_idempotent_in_tests() {
        init_test_logging();
        init_test_logging();
    }
}
