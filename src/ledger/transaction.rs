use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a cash movement within a ledger day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

/// How the cash moved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Bank,
    Card,
    Other(String),
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Cash
    }
}

/// A single income or expense line item, append-only once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl TransactionRecord {
    pub fn new(
        kind: EntryKind,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            kind,
            category: category.into(),
            description: description.into(),
            amount,
            payment_method,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, EntryKind::Income)
    }

    /// Amount with income counted positive and expense negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// Read-side filter applied when listing a day's transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<EntryKind>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn searching(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if !record.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(text) = self.search.as_deref() {
            let needle = text.to_lowercase();
            let in_category = record.category.to_lowercase().contains(&needle);
            let in_description = record.description.to_lowercase().contains(&needle);
            if !in_category && !in_description {
                return false;
            }
        }
        true
    }
}
