use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::LedgerError;
use crate::ledger::{balance, CashBook, LedgerDay};

/// One-way transition of a ledger day from open to closed, plus the
/// carry-forward of its final balance into the following day.
pub struct DayCloser;

impl DayCloser {
    /// Freezes `date` at its current running balance and seeds or corrects the
    /// following day's opening balance.
    ///
    /// All failure conditions are checked before the first write, so a failed
    /// close leaves both days exactly as they were.
    pub fn close(book: &mut CashBook, date: NaiveDate) -> Result<Decimal, LedgerError> {
        let day = book.day(date).ok_or(LedgerError::DayNotFound(date))?;
        if day.is_closed() {
            return Err(LedgerError::AlreadyClosed(date));
        }

        // No calendar successor is representable at NaiveDate::MAX; the close
        // then freezes the day without carrying anything forward.
        let successor_date = date.succ_opt();
        if let Some(next) = successor_date {
            if book.day(next).is_some_and(LedgerDay::is_closed) {
                return Err(LedgerError::CarryForwardConflict {
                    day: date,
                    successor: next,
                });
            }
        }

        let final_balance = balance::running_balance(day);
        if let Some(day) = book.day_mut(date) {
            day.close_with(final_balance)?;
        }

        if let Some(next) = successor_date {
            match book.day_mut(next) {
                Some(successor) => {
                    if successor.transaction_count() > 0
                        && successor.opening_balance() != final_balance
                    {
                        tracing::warn!(
                            date = %next,
                            opening = %final_balance,
                            "corrective carry-forward onto a day that already holds transactions"
                        );
                    }
                    successor.set_opening_balance(final_balance);
                }
                None => book.insert_day(LedgerDay::opened(next, final_balance)),
            }
        }
        book.touch();
        tracing::info!(%date, closing = %final_balance, "ledger day closed");
        Ok(final_balance)
    }
}
