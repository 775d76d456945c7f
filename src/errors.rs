use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error type that captures ledger rule violations and storage failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("transaction amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("day {0} is closed and no longer accepts transactions")]
    DayClosed(NaiveDate),
    #[error("no ledger day exists for {0}")]
    DayNotFound(NaiveDate),
    #[error("day {0} is already closed")]
    AlreadyClosed(NaiveDate),
    #[error("closing {day} would overwrite the opening balance of already-closed {successor}")]
    CarryForwardConflict {
        day: NaiveDate,
        successor: NaiveDate,
    },
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
