// Logging for the headless HUD host: `[logging]` section → tracing subscriber

use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::core::config::LoggingSettings;

// Flushes the non-blocking writers on exit; set once by the first init
static WRITER_GUARDS: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

/// Appender for `log_file`, or `None` when file logging is off or the path
/// has no file name. The file is never rotated: one host run, one log.
fn log_file_appender(log_file: &str) -> Option<RollingFileAppender> {
    if log_file.is_empty() {
        return None;
    }
    let path = Path::new(log_file);
    let dir = path.parent()?;
    let file_name = path.file_name()?.to_str()?;
    Some(tracing_appender::rolling::never(dir, file_name))
}

/// Install the host's subscriber: `EnvFilter`, then the log file and stdout
/// layers the settings ask for.
///
/// `RUST_LOG` wins over `settings.level`. Calling this twice is harmless:
/// the second subscriber is discarded.
pub fn init_logging(settings: &LoggingSettings) {
    let mut guards = Vec::new();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let file_layer = log_file_appender(&settings.log_file).map(|appender| {
        let (writer, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
    });

    // Replays run from a terminal; keep the lines plain so they diff cleanly
    let console_layer = settings.console.then(|| {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_ok();

    // A losing second init drops its guards, which only flushes its own writers
    if installed {
        let _ = WRITER_GUARDS.set(guards);
    }
}
