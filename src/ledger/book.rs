use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::day::LedgerDay;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The full daily cash ledger of one business: every recorded day keyed by
/// calendar date. Days are never removed; calendar order is the map order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashBook {
    pub name: String,
    #[serde(default)]
    days: BTreeMap<NaiveDate, LedgerDay>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "CashBook::schema_version_default")]
    pub schema_version: u8,
}

impl CashBook {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            days: BTreeMap::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&LedgerDay> {
        self.days.get(&date)
    }

    pub(crate) fn day_mut(&mut self, date: NaiveDate) -> Option<&mut LedgerDay> {
        self.days.get_mut(&date)
    }

    /// Returns the existing day or inserts a fresh open one with the given
    /// opening balance.
    pub(crate) fn day_mut_or_insert(
        &mut self,
        date: NaiveDate,
        opening_balance: Decimal,
    ) -> &mut LedgerDay {
        if !self.days.contains_key(&date) {
            self.updated_at = Utc::now();
        }
        self.days
            .entry(date)
            .or_insert_with(|| LedgerDay::opened(date, opening_balance))
    }

    pub(crate) fn insert_day(&mut self, day: LedgerDay) {
        self.days.insert(day.date(), day);
        self.touch();
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// All days in calendar order.
    pub fn days(&self) -> impl Iterator<Item = &LedgerDay> {
        self.days.values()
    }

    /// Days falling inside the inclusive range, calendar order.
    pub fn days_in(&self, range: DateRange) -> impl Iterator<Item = &LedgerDay> {
        self.days.range(range.start..=range.end).map(|(_, day)| day)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

/// Validated inclusive calendar range for historical browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if start > end {
            return Err(LedgerError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn days_iterate_in_calendar_order_regardless_of_insertion() {
        let mut book = CashBook::new("Shop");
        book.insert_day(LedgerDay::opened(date(3), dec!(30)));
        book.insert_day(LedgerDay::opened(date(1), dec!(10)));
        book.insert_day(LedgerDay::opened(date(2), dec!(20)));

        let dates: Vec<_> = book.days().map(LedgerDay::date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3)]);
    }

    #[test]
    fn day_mut_or_insert_keeps_the_existing_opening_balance() {
        let mut book = CashBook::new("Shop");
        book.insert_day(LedgerDay::opened(date(1), dec!(10)));

        let day = book.day_mut_or_insert(date(1), dec!(999));
        assert_eq!(day.opening_balance(), dec!(10));
        assert_eq!(book.day_count(), 1);
    }

    #[test]
    fn days_in_respects_the_inclusive_bounds() {
        let mut book = CashBook::new("Shop");
        for d in 1..=5 {
            book.insert_day(LedgerDay::opened(date(d), Decimal::ZERO));
        }
        let range = DateRange::new(date(2), date(4)).unwrap();
        let dates: Vec<_> = book.days_in(range).map(LedgerDay::date).collect();
        assert_eq!(dates, vec![date(2), date(3), date(4)]);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DateRange::new(date(9), date(1)).expect_err("start after end");
        assert!(matches!(err, LedgerError::InvalidRange { .. }));
    }
}
