use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{balance, CashBook};

/// Opening balance for `date`: the previous day's closing balance when that
/// day is closed, its live running balance while it is still open
/// (best-effort, corrected again at close time), and zero when the ledger has
/// no day before `date`.
pub fn resolve_opening_balance(book: &CashBook, date: NaiveDate) -> Decimal {
    let Some(previous) = date.pred_opt() else {
        return Decimal::ZERO;
    };
    match book.day(previous) {
        Some(day) if day.is_closed() => day
            .closing_balance()
            .unwrap_or_else(|| balance::running_balance(day)),
        Some(day) => balance::running_balance(day),
        None => Decimal::ZERO,
    }
}
