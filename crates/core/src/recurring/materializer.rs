//! Turning due schedules into invoices.

use billbook_shared::types::InvoiceId;
use chrono::NaiveDate;
use tracing::debug;

use super::schedule::advance;
use super::types::RecurringInvoice;
use crate::document::{Invoice, InvoiceStatus, Numbering, duplicate_items, payment_due};

/// Result of one materialization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializationOutcome {
    /// Invoices created in this pass, in schedule order.
    pub invoices: Vec<Invoice>,
    /// All schedules, in input order, with fired ones advanced.
    pub schedules: Vec<RecurringInvoice>,
}

impl MaterializationOutcome {
    /// Returns true if at least one schedule fired.
    #[must_use]
    pub fn has_new_invoices(&self) -> bool {
        !self.invoices.is_empty()
    }
}

/// Runs one materialization pass.
///
/// Every active schedule with `next_due_date <= today` fires once, in list
/// order. Each fired schedule yields a draft invoice dated `today`, due
/// after the payment term, numbered after both `invoices` and the invoices
/// created earlier in the same pass. Its `next_due_date` then advances by
/// exactly one period from the previous due date, so a schedule several
/// periods behind fires again on later passes rather than catching up here.
#[must_use]
pub fn materialize(
    schedules: &[RecurringInvoice],
    invoices: &[Invoice],
    numbering: &Numbering<'_>,
    today: NaiveDate,
) -> MaterializationOutcome {
    let mut created: Vec<Invoice> = Vec::new();

    let schedules = schedules
        .iter()
        .map(|schedule| {
            if !schedule.is_due(today) {
                return schedule.clone();
            }

            let invoice_number = numbering.next(
                invoices
                    .iter()
                    .chain(&created)
                    .map(|invoice| invoice.invoice_number.as_str()),
            );
            let next_due_date = advance(schedule.next_due_date, schedule.frequency);

            debug!(
                schedule_id = %schedule.id,
                invoice_number = %invoice_number,
                %next_due_date,
                "Recurring schedule fired"
            );

            created.push(Invoice {
                id: InvoiceId::new(),
                invoice_number,
                client_id: schedule.client_id.clone(),
                date: today,
                due_date: payment_due(today),
                items: duplicate_items(&schedule.items),
                tax_rate: schedule.tax_rate,
                status: InvoiceStatus::Draft,
                offer_id: None,
            });

            RecurringInvoice {
                next_due_date,
                ..schedule.clone()
            }
        })
        .collect();

    MaterializationOutcome {
        invoices: created,
        schedules,
    }
}
