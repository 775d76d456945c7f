//! Pure balance arithmetic over a day's transaction sequence.

use rust_decimal::Decimal;

use super::day::LedgerDay;
use super::transaction::EntryKind;

/// Sum of amounts for the given kind.
pub fn total_by_kind(day: &LedgerDay, kind: EntryKind) -> Decimal {
    day.transactions()
        .iter()
        .filter(|record| record.kind == kind)
        .map(|record| record.amount)
        .sum()
}

pub fn total_income(day: &LedgerDay) -> Decimal {
    total_by_kind(day, EntryKind::Income)
}

pub fn total_expense(day: &LedgerDay) -> Decimal {
    total_by_kind(day, EntryKind::Expense)
}

/// Opening balance plus income so far, minus expense so far.
pub fn running_balance(day: &LedgerDay) -> Decimal {
    day.opening_balance() + total_income(day) - total_expense(day)
}
