pub mod application;
pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::*;
pub use storage::KvStore;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("satang=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
