//! Ledger domain models, persistence-friendly types, and helpers.

pub mod balance;
pub mod book;
pub mod day;
pub mod transaction;

pub use book::{CashBook, DateRange};
pub use day::{DayStatus, DaySummary, LedgerDay};
pub use transaction::{EntryKind, PaymentMethod, TransactionFilter, TransactionRecord};
