//! Recurring schedule domain types.

use billbook_shared::types::{ClientId, RecurringInvoiceId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::document::{Billable, LineItem};

/// Billing cadence of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every calendar month.
    Monthly,
    /// Every three calendar months.
    Quarterly,
    /// Every calendar year.
    Yearly,
}

impl Frequency {
    /// Length of one period in calendar months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Yearly => 12,
        }
    }
}

/// A recurring billing schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringInvoice {
    /// Unique identifier.
    pub id: RecurringInvoiceId,
    /// Billed client. Not checked for existence.
    pub client_id: ClientId,
    /// Label shown in schedule lists.
    pub title: String,
    /// Template items, copied into every materialized invoice.
    pub items: Vec<LineItem>,
    /// Tax rate in percent.
    pub tax_rate: Decimal,
    /// Cadence.
    pub frequency: Frequency,
    /// First billing date.
    pub start_date: NaiveDate,
    /// Next date the schedule fires. Never decreases.
    pub next_due_date: NaiveDate,
    /// Paused schedules keep their `next_due_date` frozen.
    pub is_active: bool,
}

impl RecurringInvoice {
    /// Returns true if the schedule fires on `today`.
    #[must_use]
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.is_active && self.next_due_date <= today
    }
}

impl Billable for RecurringInvoice {
    fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }
}
