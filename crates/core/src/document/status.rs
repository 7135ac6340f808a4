//! Effective (display) status of invoices.

use chrono::NaiveDate;

use super::types::{Invoice, InvoiceStatus};

/// Derives the status shown to the user.
///
/// A `Sent` invoice whose due date lies strictly before `today` shows as
/// `Overdue`. Every other status is shown as stored. The stored value is
/// never changed.
#[must_use]
pub fn effective_status(
    status: InvoiceStatus,
    due_date: NaiveDate,
    today: NaiveDate,
) -> InvoiceStatus {
    match status {
        InvoiceStatus::Sent if due_date < today => InvoiceStatus::Overdue,
        other => other,
    }
}

impl Invoice {
    /// Returns the status shown to the user on `today`.
    #[must_use]
    pub fn effective_status(&self, today: NaiveDate) -> InvoiceStatus {
        effective_status(self.status, self.due_date, today)
    }
}
