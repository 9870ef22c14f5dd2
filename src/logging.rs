use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Default filter when neither an explicit filter nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Filter precedence: `filter` argument, then `RUST_LOG`, then [`DEFAULT_FILTER`]. Subsequent
/// calls are ignored.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let env_filter = match filter {
            Some(f) => EnvFilter::new(f),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        };

        // A subscriber may already be installed by an embedding test harness.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        tracing::debug!("logging initialized");
    });
}
