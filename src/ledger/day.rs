use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::balance;
use super::transaction::TransactionRecord;

/// Lifecycle of a ledger day. `Closed` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayStatus {
    Open,
    Closed,
}

/// One calendar day of the cash ledger: an opening balance fixed at creation,
/// an ordered transaction list, and a closing balance frozen exactly once.
///
/// Fields stay private so the only mutation paths are the methods below; the
/// transaction sequence is append-only and the closing balance has a single
/// writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDay {
    date: NaiveDate,
    opening_balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    closing_balance: Option<Decimal>,
    status: DayStatus,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
}

impl LedgerDay {
    pub fn opened(date: NaiveDate, opening_balance: Decimal) -> Self {
        Self {
            date,
            opening_balance,
            closing_balance: None,
            status: DayStatus::Open,
            transactions: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    pub fn closing_balance(&self) -> Option<Decimal> {
        self.closing_balance
    }

    pub fn status(&self) -> DayStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.status, DayStatus::Closed)
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn total_income(&self) -> Decimal {
        balance::total_income(self)
    }

    pub fn total_expense(&self) -> Decimal {
        balance::total_expense(self)
    }

    pub fn running_balance(&self) -> Decimal {
        balance::running_balance(self)
    }

    /// Appends a record while the day is open.
    pub(crate) fn append(&mut self, record: TransactionRecord) -> Result<(), LedgerError> {
        if self.is_closed() {
            return Err(LedgerError::DayClosed(self.date));
        }
        self.transactions.push(record);
        Ok(())
    }

    /// Freezes the day. The given balance is the only value ever stored as the
    /// closing balance; it is never recomputed afterward.
    pub(crate) fn close_with(&mut self, closing_balance: Decimal) -> Result<(), LedgerError> {
        if self.is_closed() {
            return Err(LedgerError::AlreadyClosed(self.date));
        }
        self.closing_balance = Some(closing_balance);
        self.status = DayStatus::Closed;
        Ok(())
    }

    /// Corrective carry-forward: callers must have verified the day is open.
    pub(crate) fn set_opening_balance(&mut self, amount: Decimal) {
        self.opening_balance = amount;
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            date: self.date,
            status: self.status,
            opening_balance: self.opening_balance,
            total_income: self.total_income(),
            total_expense: self.total_expense(),
            running_balance: self.running_balance(),
            closing_balance: self.closing_balance,
            transactions: self.transactions.clone(),
        }
    }
}

/// Read model handed to callers: stored fields plus derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub opening_balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub running_balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<Decimal>,
    pub transactions: Vec<TransactionRecord>,
}
