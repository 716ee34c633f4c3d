// Logging setup
//
// Structured logging for the Lambda environment: JSON lines on stdout,
// filtered through `RUST_LOG` with an `info` default.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Guards subscriber initialization
static INIT: Once = Once::new();

/// Initialize the log subscriber for the Lambda environment.
///
/// Safe to call more than once; only the first call installs the
/// subscriber.
///
/// # Example
/// ```ignore
/// use books_api::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("function started");
/// ```
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // JSON layer for CloudWatch
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .init();
    });
}

/// Initialize a human-readable subscriber for tests.
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
