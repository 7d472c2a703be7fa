pub mod tracing;

pub use self::tracing::setup_tracing;
