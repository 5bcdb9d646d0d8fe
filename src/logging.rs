/// Verbosity-driven `tracing` setup. Logs go to stderr; stdout carries only results.
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

/// Extra `-v` flags beyond this are ignored.
pub const MAX_VERBOSITY: u8 = 3;

/// Map a `-v` count to the default log level.
///
/// 0 → errors only, 1 → warnings, 2 → info, 3+ → debug.
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    match verbosity.min(MAX_VERBOSITY) {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG`, when set, adds directives on top of the verbosity default.
pub fn setup_logging(verbosity: u8) {
    let verbosity = verbosity.min(MAX_VERBOSITY);
    let level = level_for(verbosity);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("[warn] a global tracing subscriber was already installed");
    }

    debug!(verbosity, %level, "logging initialized");
}
