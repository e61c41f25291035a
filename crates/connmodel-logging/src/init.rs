//! Subscriber installation

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Name of the event field carrying the diagnostic locus.
pub const LOCUS_FIELD: &str = "locus";

static INSTALLED: OnceCell<LevelFilter> = OnceCell::new();

/// Parse a log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("invalid log level '{level}', expected off, error, warn, info, debug or trace"))
}

/// Install a formatting subscriber writing to stderr.
///
/// `RUST_LOG`, when set and valid, takes precedence over `level`. Only the
/// first call installs anything; later calls return the level that won.
pub fn init_logging(level: LevelFilter) -> LevelFilter {
    *INSTALLED.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();

        // Another subscriber may already be installed by an embedding host
        let _ = tracing::subscriber::set_global_default(subscriber);
        level
    })
}
