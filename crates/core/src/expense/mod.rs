//! Business expenses.

use billbook_shared::types::ExpenseId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categories offered for new expenses.
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 6] = [
    "Material",
    "Treibstoff",
    "Marketing",
    "Versicherung",
    "Bürobedarf",
    "Sonstiges",
];

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Date the expense occurred.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Amount in major currency units.
    pub amount: Decimal,
    /// Category label.
    pub category: String,
}

impl Expense {
    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn has_valid_amount(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}
