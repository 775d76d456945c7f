use std::fs;
use std::path::Path;
use std::sync::Once;

use crate::errors::LedgerError;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("cashbook_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Creates the directory (and its parents) when missing.
pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
