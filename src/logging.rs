use std::io;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global `tracing` subscriber.
///
/// Events go to stderr so they never interleave with the summary line on
/// stdout. `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        );
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // Another subscriber already owns the global slot; keep it.
        }
    });
}
