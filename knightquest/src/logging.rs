use tracing_subscriber::EnvFilter;

/// Install a stderr formatter filtered by `RUST_LOG`, falling back to
/// `default_filter`. Records from the `log` facade are collected too.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
