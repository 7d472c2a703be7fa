use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Installs a global formatter filtered through `RUST_LOG`. Fails if a global subscriber
/// is already set.
pub fn setup_tracing() -> Result<(), SetGlobalDefaultError> {
    let fmt_layer = fmt::layer().with_target(false);
    let sub = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer);
    set_global_default(sub)
}
