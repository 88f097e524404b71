use tracing_subscriber::EnvFilter;

/// Initializes console logging. Respects RUST_LOG when set; otherwise
/// defaults to info-level output for this crate.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mpls_fireworks=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
