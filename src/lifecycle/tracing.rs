/// Initializes the tracing/logging infrastructure for the application.
///
/// - **Environment-based filtering**: controlled via `RUST_LOG`
///   (`RUST_LOG=mention_resolver=debug` for this crate only)
/// - **Compact format**: spans shown inline, module paths hidden; store logs
///   carry a `record_type` field instead
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
