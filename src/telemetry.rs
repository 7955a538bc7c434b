use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static TEST_LOGGING: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber for the binary. `RUST_LOG` wins over the
/// default level, which is `debug` when verbose and `warn` otherwise.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Logging for tests, safe to call from every test. Level comes from
/// `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_test_logging() {
    TEST_LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
