//! Diagnostic logging to stderr.
//!
//! Quiet by default (`warn`) so diagnostics do not fight the status line.
//! `RUST_LOG` takes precedence over the `[logging]` table:
//! ```bash
//! RUST_LOG=chatline_core=debug chatline
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Installs the global subscriber. Only the first call takes effect.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.directive())
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .compact()
            .with_filter(filter);

        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
