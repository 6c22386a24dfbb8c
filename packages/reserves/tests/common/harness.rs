//! Test harness setup.

/// Install a tracing subscriber that respects RUST_LOG.
/// Uses try_init() so every test can call it.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
