//! Runtime configuration for where cash books live on disk.

use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const DEFAULT_DIR_NAME: &str = ".cashbook_core";
const BOOKS_DIR: &str = "books";
const BACKUPS_DIR: &str = "backups";
const DEFAULT_RETENTION: usize = 5;

static DEFAULT_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Some(custom) = env::var_os("CASHBOOK_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
});

/// Data directory layout and backup retention for the JSON storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub backup_retention: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.clone(),
            backup_retention: DEFAULT_RETENTION,
        }
    }
}

impl StoreConfig {
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::default()
        }
    }

    pub fn books_dir(&self) -> PathBuf {
        self.data_dir.join(BOOKS_DIR)
    }

    pub fn backups_dir(&self) -> PathBuf {
        self.data_dir.join(BACKUPS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_data_dir_keeps_the_default_retention() {
        let config = StoreConfig::with_data_dir(PathBuf::from("/tmp/books"));
        assert_eq!(config.backup_retention, DEFAULT_RETENTION);
        assert_eq!(config.books_dir(), PathBuf::from("/tmp/books/books"));
        assert_eq!(config.backups_dir(), PathBuf::from("/tmp/books/backups"));
    }
}
