//! Pluggable persistence for cash books.

mod json_backend;

pub use json_backend::JsonStorage;

use crate::errors::LedgerError;
use crate::ledger::CashBook;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Trait that abstracts interaction with the persistence layer.
pub trait StorageBackend: Send + Sync {
    fn save(&self, book: &CashBook, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<CashBook>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, book: &CashBook, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<CashBook>;
}
