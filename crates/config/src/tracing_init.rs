use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// The filter directive comes from `RUST_LOG` when set, falling back to
/// `LOG_LEVEL`, then to the given default.
pub fn init_tracing(default_level: &str) {
    let filter = ["RUST_LOG", "LOG_LEVEL"]
        .iter()
        .find_map(|key| EnvFilter::try_from_env(key).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(true).init();
}
