use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{carry_forward, closer::DayCloser};
use crate::errors::LedgerError;
use crate::ledger::{
    CashBook, DateRange, DaySummary, EntryKind, LedgerDay, PaymentMethod, TransactionFilter,
    TransactionRecord,
};
use crate::storage::StorageBackend;

/// Authoritative entry point for every read and write against the daily cash
/// ledger. Owns the book behind a single `RwLock`: mutations serialize on the
/// write lock (which also makes the two-day close atomic), reads clone out a
/// consistent snapshot under the read lock.
pub struct LedgerStore {
    book: RwLock<CashBook>,
    name: String,
    storage: Box<dyn StorageBackend>,
}

impl LedgerStore {
    /// Loads the named cash book from storage, or starts an empty one when the
    /// backend has nothing stored under that name.
    pub fn open(storage: Box<dyn StorageBackend>, name: &str) -> Result<Self, LedgerError> {
        let book = match storage.load(name) {
            Ok(book) => book,
            Err(LedgerError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(%name, "starting a fresh cash book");
                CashBook::new(name)
            }
            Err(err) => return Err(err),
        };
        Ok(Self {
            book: RwLock::new(book),
            name: name.to_string(),
            storage,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> RwLockReadGuard<'_, CashBook> {
        self.book.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CashBook> {
        self.book.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the day's summary, creating the day first if this date was
    /// never touched. A created day opens at the carry-forward balance.
    pub fn ensure_day(&self, date: NaiveDate) -> DaySummary {
        let mut book = self.write();
        Self::ensure_day_mut(&mut book, date).summary()
    }

    fn ensure_day_mut(book: &mut CashBook, date: NaiveDate) -> &mut LedgerDay {
        let opening = carry_forward::resolve_opening_balance(book, date);
        if book.day(date).is_none() {
            tracing::info!(%date, %opening, "ledger day opened");
        }
        book.day_mut_or_insert(date, opening)
    }

    /// Records a transaction against `date`, materializing the day if needed.
    /// The amount is validated before anything is stored.
    pub fn record_transaction(
        &self,
        date: NaiveDate,
        kind: EntryKind,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<TransactionRecord, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let record = TransactionRecord::new(kind, category, description, amount, payment_method);

        let mut book = self.write();
        let day = Self::ensure_day_mut(&mut book, date);
        day.append(record.clone())?;
        book.touch();
        tracing::debug!(%date, id = %record.id, amount = %record.amount, "transaction recorded");
        Ok(record)
    }

    /// Chronological snapshot of the day's transactions matching `filter`.
    /// Returns an owned list, so callers can iterate it as often as they like.
    pub fn list_transactions(
        &self,
        date: NaiveDate,
        filter: &TransactionFilter,
    ) -> Vec<TransactionRecord> {
        self.read()
            .day(date)
            .map(|day| {
                day.transactions()
                    .iter()
                    .filter(|record| filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn day_summary(&self, date: NaiveDate) -> Option<DaySummary> {
        self.read().day(date).map(|day| day.summary())
    }

    /// Summaries of the days recorded inside the range, calendar order.
    pub fn list_days(&self, range: DateRange) -> Vec<DaySummary> {
        self.read()
            .days_in(range)
            .map(LedgerDay::summary)
            .collect()
    }

    /// Closes `date` and carries its balance forward; returns the frozen
    /// closing balance. Both day writes happen under one write lock.
    pub fn close_day(&self, date: NaiveDate) -> Result<Decimal, LedgerError> {
        let mut book = self.write();
        DayCloser::close(&mut book, date)
    }

    /// Persists the current book through the storage backend.
    pub fn save(&self) -> Result<(), LedgerError> {
        let book = self.read();
        self.storage.save(&book, &self.name)
    }

    /// Whole-book clone for callers that need to walk history themselves.
    pub fn book_snapshot(&self) -> CashBook {
        self.read().clone()
    }
}
