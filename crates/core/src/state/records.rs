//! Settings and master data kept by the business state.

use billbook_shared::types::{AppointmentId, ClientId, ExpenseId, LineItemId};
use tracing::info;

use super::business::BusinessState;
use super::error::StateError;
use crate::client::{Appointment, Client};
use crate::company::CompanyInfo;
use crate::document::LineItem;
use crate::expense::Expense;

impl BusinessState {
    /// Replaces the company settings.
    ///
    /// A prefix change takes effect on the next allocated number. Existing
    /// documents keep their numbers.
    pub fn update_company(&mut self, company: CompanyInfo) {
        if company.invoice_number_prefix != self.company.invoice_number_prefix
            || company.offer_number_prefix != self.company.offer_number_prefix
        {
            info!(
                invoice_prefix = %company.invoice_number_prefix,
                offer_prefix = %company.offer_number_prefix,
                "Number prefixes changed"
            );
        }
        self.company = company;
    }

    /// Saves a client, replacing the one with the same id.
    pub fn upsert_client(&mut self, client: Client) {
        replace_or_push(&mut self.clients, client, |a, b| a.id == b.id);
    }

    /// Removes a client. Documents addressed to it are kept.
    pub fn remove_client(&mut self, client_id: &ClientId) -> Result<Client, StateError> {
        take_where(&mut self.clients, |client| client.id == *client_id)
            .ok_or_else(|| StateError::ClientNotFound(client_id.clone()))
    }

    /// Saves an appointment, replacing the one with the same id.
    pub fn upsert_appointment(&mut self, appointment: Appointment) {
        replace_or_push(&mut self.appointments, appointment, |a, b| a.id == b.id);
    }

    /// Removes an appointment.
    pub fn remove_appointment(
        &mut self,
        appointment_id: &AppointmentId,
    ) -> Result<Appointment, StateError> {
        take_where(&mut self.appointments, |appointment| {
            appointment.id == *appointment_id
        })
        .ok_or_else(|| StateError::AppointmentNotFound(appointment_id.clone()))
    }

    /// Adds an item template to the catalog.
    pub fn add_catalog_item(&mut self, item: LineItem) {
        self.catalog.push(item);
    }

    /// Replaces the catalog template with the same id.
    pub fn update_catalog_item(&mut self, item: LineItem) -> Result<(), StateError> {
        let existing = self
            .catalog
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| StateError::CatalogItemNotFound(item.id.clone()))?;
        *existing = item;
        Ok(())
    }

    /// Removes a catalog template. Documents holding copies are unaffected.
    pub fn remove_catalog_item(&mut self, item_id: &LineItemId) -> Result<LineItem, StateError> {
        take_where(&mut self.catalog, |item| item.id == *item_id)
            .ok_or_else(|| StateError::CatalogItemNotFound(item_id.clone()))
    }

    /// Records an expense. The amount must be positive.
    pub fn add_expense(&mut self, expense: Expense) -> Result<(), StateError> {
        ensure_positive(&expense)?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Replaces the expense with the same id. The amount must be positive.
    pub fn update_expense(&mut self, expense: Expense) -> Result<(), StateError> {
        ensure_positive(&expense)?;
        let existing = self
            .expenses
            .iter_mut()
            .find(|existing| existing.id == expense.id)
            .ok_or_else(|| StateError::ExpenseNotFound(expense.id.clone()))?;
        *existing = expense;
        Ok(())
    }

    /// Removes an expense.
    pub fn remove_expense(&mut self, expense_id: &ExpenseId) -> Result<Expense, StateError> {
        take_where(&mut self.expenses, |expense| expense.id == *expense_id)
            .ok_or_else(|| StateError::ExpenseNotFound(expense_id.clone()))
    }
}

fn ensure_positive(expense: &Expense) -> Result<(), StateError> {
    if expense.has_valid_amount() {
        Ok(())
    } else {
        Err(StateError::NonPositiveExpense(expense.amount))
    }
}

fn replace_or_push<T>(records: &mut Vec<T>, record: T, same_id: impl Fn(&T, &T) -> bool) {
    match records.iter().position(|existing| same_id(existing, &record)) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
}

fn take_where<T>(records: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> Option<T> {
    let index = records.iter().position(matches)?;
    Some(records.remove(index))
}
