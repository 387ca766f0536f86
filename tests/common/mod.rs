//! Shared test setup
//!
//! Set `TEST_TRACE=trace` to see the crate's `trace!` events while running tests.

#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::{filter::filter_fn, prelude::*};

    if tracing::dispatcher::has_been_set() {
        return;
    }

    if let Ok(v) = std::env::var("TEST_TRACE") {
        let level = match v.as_str() {
            "true" | "debug" | "on" => tracing::Level::DEBUG,
            "trace" => tracing::Level::TRACE,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => return,
        };

        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .with(filter_fn(move |metadata| {
                metadata.level() <= &level
                    && metadata.target().starts_with("rust_keyed_collections")
            }))
            .try_init();
    }
}
