#![allow(dead_code)]


pub use builders::object::TestObjectBuilder;

use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honouring `RUST_LOG`; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
