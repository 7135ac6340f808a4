//! The business state container.

use billbook_shared::PrefixMatch;
use billbook_shared::types::{ClientId, InvoiceId, LineItemId, OfferId, RecurringInvoiceId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use super::error::StateError;
use crate::client::{Appointment, Client};
use crate::company::CompanyInfo;
use crate::document::{
    Invoice, InvoiceStatus, LineItem, NumberedDocument, Numbering, Offer, OfferStatus,
    convert_offer, new_invoice_draft, new_offer_draft,
};
use crate::expense::Expense;
use crate::recurring::{RecurringInvoice, materialize};
use crate::reports::{DashboardSummary, ReportService};

/// The sample client of a fresh installation.
#[must_use]
pub fn default_clients() -> Vec<Client> {
    vec![Client::sample()]
}

/// The item templates of a fresh installation, with ids `item-1` to `item-3`.
#[must_use]
pub fn default_catalog() -> Vec<LineItem> {
    [
        ("Umzugshelfer (pro Stunde)", 50),
        ("Endreinigung Pauschale", 250),
        ("Verpackungsmaterial", 75),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (description, price))| LineItem {
        id: LineItemId::from(format!("item-{}", index + 1)),
        ..LineItem::new(description, Decimal::ONE, Decimal::from(price))
    })
    .collect()
}

/// All business collections plus company settings.
///
/// Owned by the composition root. Operations replace collections with
/// the results of the pure engine functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessState {
    /// Company profile and document defaults. Changed through
    /// [`BusinessState::update_company`].
    pub company: CompanyInfo,
    /// Clients.
    pub clients: Vec<Client>,
    /// Reusable item templates.
    pub catalog: Vec<LineItem>,
    /// Invoices.
    pub invoices: Vec<Invoice>,
    /// Offers.
    pub offers: Vec<Offer>,
    /// Appointments.
    pub appointments: Vec<Appointment>,
    /// Recurring billing schedules.
    pub recurring_invoices: Vec<RecurringInvoice>,
    /// Expenses.
    pub expenses: Vec<Expense>,
    prefix_match: PrefixMatch,
}

impl Default for BusinessState {
    fn default() -> Self {
        Self {
            company: CompanyInfo::default(),
            clients: default_clients(),
            catalog: default_catalog(),
            invoices: Vec::new(),
            offers: Vec::new(),
            appointments: Vec::new(),
            recurring_invoices: Vec::new(),
            expenses: Vec::new(),
            prefix_match: PrefixMatch::default(),
        }
    }
}

impl BusinessState {
    /// Sets the prefix stripping rule used for numbering.
    #[must_use]
    pub fn with_prefix_match(mut self, prefix_match: PrefixMatch) -> Self {
        self.prefix_match = prefix_match;
        self
    }

    /// Returns the prefix stripping rule used for numbering.
    #[must_use]
    pub const fn prefix_match(&self) -> PrefixMatch {
        self.prefix_match
    }

    /// Invoice numbering under the current company prefix.
    #[must_use]
    pub fn invoice_numbering(&self) -> Numbering<'_> {
        self.company.invoice_numbering(self.prefix_match)
    }

    /// Offer numbering under the current company prefix.
    #[must_use]
    pub fn offer_numbering(&self) -> Numbering<'_> {
        self.company.offer_numbering(self.prefix_match)
    }

    /// Preview of the next invoice number.
    #[must_use]
    pub fn next_invoice_number(&self) -> String {
        self.invoice_numbering().next_for(&self.invoices)
    }

    /// Preview of the next offer number.
    #[must_use]
    pub fn next_offer_number(&self) -> String {
        self.offer_numbering().next_for(&self.offers)
    }

    /// A pre-filled, unsaved invoice.
    #[must_use]
    pub fn invoice_draft(&self, client_id: ClientId, today: NaiveDate) -> Invoice {
        new_invoice_draft(
            &self.invoices,
            &self.invoice_numbering(),
            &self.company,
            client_id,
            today,
        )
    }

    /// A pre-filled, unsaved offer.
    #[must_use]
    pub fn offer_draft(&self, client_id: ClientId, today: NaiveDate) -> Offer {
        new_offer_draft(
            &self.offers,
            &self.offer_numbering(),
            &self.company,
            client_id,
            today,
        )
    }

    /// Materializes due recurring schedules and merges the result.
    ///
    /// Meant to run once per session start. Returns the created invoices.
    pub fn run_recurring_billing(&mut self, today: NaiveDate) -> Vec<Invoice> {
        let outcome = materialize(
            &self.recurring_invoices,
            &self.invoices,
            &self.invoice_numbering(),
            today,
        );

        if outcome.has_new_invoices() {
            info!(
                created = outcome.invoices.len(),
                %today,
                "Materialized recurring invoices"
            );
            self.invoices.extend(outcome.invoices.iter().cloned());
            self.recurring_invoices = outcome.schedules;
        }

        outcome.invoices
    }

    /// Accepts an offer and appends the resulting invoice.
    pub fn accept_offer(
        &mut self,
        offer_id: &OfferId,
        today: NaiveDate,
    ) -> Result<&Invoice, StateError> {
        let position = self
            .offers
            .iter()
            .position(|offer| offer.id == *offer_id)
            .ok_or_else(|| StateError::OfferNotFound(offer_id.clone()))?;

        if self.offers[position].status == OfferStatus::Accepted {
            return Err(StateError::OfferAlreadyAccepted(offer_id.clone()));
        }

        let conversion = convert_offer(
            &self.offers[position],
            &self.invoices,
            &self.invoice_numbering(),
            today,
        );

        info!(
            %offer_id,
            invoice_number = %conversion.invoice.invoice_number,
            "Offer accepted"
        );

        self.offers[position] = conversion.offer;
        self.invoices.push(conversion.invoice);
        let index = self.invoices.len() - 1;
        Ok(&self.invoices[index])
    }

    /// Effective status of every invoice on `today`, in list order.
    #[must_use]
    pub fn effective_invoice_statuses(
        &self,
        today: NaiveDate,
    ) -> Vec<(InvoiceId, InvoiceStatus)> {
        self.invoices
            .iter()
            .map(|invoice| (invoice.id.clone(), invoice.effective_status(today)))
            .collect()
    }

    /// Overwrites the stored status of an invoice.
    pub fn set_invoice_status(
        &mut self,
        invoice_id: &InvoiceId,
        status: InvoiceStatus,
    ) -> Result<(), StateError> {
        let invoice = self
            .invoices
            .iter_mut()
            .find(|invoice| invoice.id == *invoice_id)
            .ok_or_else(|| StateError::InvoiceNotFound(invoice_id.clone()))?;
        invoice.status = status;
        Ok(())
    }

    /// Overwrites the status of an offer.
    pub fn set_offer_status(
        &mut self,
        offer_id: &OfferId,
        status: OfferStatus,
    ) -> Result<(), StateError> {
        let offer = self
            .offers
            .iter_mut()
            .find(|offer| offer.id == *offer_id)
            .ok_or_else(|| StateError::OfferNotFound(offer_id.clone()))?;
        offer.status = status;
        Ok(())
    }

    /// Saves an invoice, replacing the one with the same id.
    ///
    /// A new invoice must not reuse an existing number. Edits of an
    /// existing invoice are not checked.
    pub fn upsert_invoice(&mut self, invoice: Invoice) -> Result<(), StateError> {
        upsert_document(&mut self.invoices, invoice, |a, b| a.id == b.id)
    }

    /// Saves an offer, replacing the one with the same id.
    ///
    /// A new offer must not reuse an existing number.
    pub fn upsert_offer(&mut self, offer: Offer) -> Result<(), StateError> {
        upsert_document(&mut self.offers, offer, |a, b| a.id == b.id)
    }

    /// Saves a recurring schedule, replacing the one with the same id.
    pub fn upsert_schedule(&mut self, schedule: RecurringInvoice) {
        match self
            .recurring_invoices
            .iter_mut()
            .find(|existing| existing.id == schedule.id)
        {
            Some(existing) => *existing = schedule,
            None => self.recurring_invoices.push(schedule),
        }
    }

    /// Pauses or resumes a schedule. A paused schedule keeps its next due date.
    pub fn set_schedule_active(
        &mut self,
        schedule_id: &RecurringInvoiceId,
        is_active: bool,
    ) -> Result<(), StateError> {
        let schedule = self
            .recurring_invoices
            .iter_mut()
            .find(|schedule| schedule.id == *schedule_id)
            .ok_or_else(|| StateError::ScheduleNotFound(schedule_id.clone()))?;
        schedule.is_active = is_active;
        Ok(())
    }

    /// Dashboard figures as of `today`.
    #[must_use]
    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        ReportService::dashboard(&self.invoices, &self.offers, &self.appointments, today)
    }
}

fn upsert_document<D: NumberedDocument>(
    documents: &mut Vec<D>,
    document: D,
    same_id: impl Fn(&D, &D) -> bool,
) -> Result<(), StateError> {
    if let Some(existing) = documents.iter_mut().find(|d| same_id(d, &document)) {
        *existing = document;
        return Ok(());
    }

    if documents.iter().any(|d| d.number() == document.number()) {
        return Err(StateError::DuplicateNumber(document.number().to_string()));
    }

    documents.push(document);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurring::Frequency;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn offer(number: &str, status: OfferStatus) -> Offer {
        Offer {
            id: OfferId::new(),
            offer_number: number.to_string(),
            client_id: ClientId::new(),
            date: date(2024, 4, 1),
            valid_until: date(2024, 4, 15),
            items: vec![LineItem::new("A", dec!(1), dec!(100))],
            tax_rate: dec!(19),
            status,
        }
    }

    fn schedule(client_id: ClientId) -> RecurringInvoice {
        RecurringInvoice {
            id: RecurringInvoiceId::new(),
            client_id,
            title: "Reinigung".to_string(),
            items: vec![LineItem::new("Treppenhaus", dec!(1), dec!(60))],
            tax_rate: dec!(19),
            frequency: Frequency::Monthly,
            start_date: date(2024, 1, 1),
            next_due_date: date(2024, 2, 1),
            is_active: true,
        }
    }

    #[test]
    fn test_default_state() {
        let state = BusinessState::default();
        assert_eq!(state.clients.len(), 1);
        assert_eq!(state.catalog.len(), 3);
        assert_eq!(state.next_invoice_number(), "RE-1");
        assert_eq!(state.next_offer_number(), "AN-1");
    }

    #[test]
    fn test_defaults_have_fixed_ids() {
        let first = BusinessState::default();
        let second = BusinessState::default();

        assert_eq!(first.clients[0].id.as_str(), "1");
        let ids: Vec<&str> = first.catalog.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["item-1", "item-2", "item-3"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_accept_offer_merges_invoice() {
        let mut state = BusinessState::default();
        let source = offer("AN-1", OfferStatus::Sent);
        let offer_id = source.id.clone();
        state.offers.push(source);

        let invoice = state.accept_offer(&offer_id, date(2024, 4, 10)).unwrap().clone();

        assert_eq!(invoice.invoice_number, "RE-1");
        assert_eq!(invoice.offer_id.as_ref(), Some(&offer_id));
        assert_eq!(state.invoices, vec![invoice]);
        assert_eq!(state.offers[0].status, OfferStatus::Accepted);
        assert_eq!(state.next_invoice_number(), "RE-2");
    }

    #[test]
    fn test_accept_offer_twice_is_rejected() {
        let mut state = BusinessState::default();
        let source = offer("AN-1", OfferStatus::Sent);
        let offer_id = source.id.clone();
        state.offers.push(source);

        state.accept_offer(&offer_id, date(2024, 4, 10)).unwrap();
        let err = state.accept_offer(&offer_id, date(2024, 4, 11)).unwrap_err();

        assert_eq!(err, StateError::OfferAlreadyAccepted(offer_id));
        assert_eq!(state.invoices.len(), 1);
    }

    #[test]
    fn test_accept_unknown_offer() {
        let mut state = BusinessState::default();
        let missing = OfferId::new();
        assert_eq!(
            state.accept_offer(&missing, date(2024, 4, 10)).unwrap_err(),
            StateError::OfferNotFound(missing)
        );
    }

    #[test]
    fn test_rejected_offer_can_still_be_accepted() {
        let mut state = BusinessState::default();
        let source = offer("AN-3", OfferStatus::Sent);
        let offer_id = source.id.clone();
        state.upsert_offer(source).unwrap();

        state.set_offer_status(&offer_id, OfferStatus::Rejected).unwrap();
        assert!(state.accept_offer(&offer_id, date(2024, 4, 12)).is_ok());
        assert_eq!(state.next_offer_number(), "AN-4");

        let missing = InvoiceId::new();
        assert_eq!(
            state.set_invoice_status(&missing, InvoiceStatus::Paid).unwrap_err(),
            StateError::InvoiceNotFound(missing)
        );
    }

    #[test]
    fn test_upsert_rejects_duplicate_number_for_new_invoice() {
        let mut state = BusinessState::default();
        let client = state.clients[0].id.clone();
        let first = state.invoice_draft(client, date(2024, 4, 1));
        state.upsert_invoice(first.clone()).unwrap();

        let clash = Invoice {
            id: InvoiceId::new(),
            ..first.clone()
        };
        assert_eq!(
            state.upsert_invoice(clash).unwrap_err(),
            StateError::DuplicateNumber("RE-1".to_string())
        );

        let edited = Invoice {
            invoice_number: "RE-99".to_string(),
            ..first
        };
        state.upsert_invoice(edited).unwrap();
        assert_eq!(state.invoices.len(), 1);
        assert_eq!(state.next_invoice_number(), "RE-100");
    }

    #[test]
    fn test_pause_freezes_schedule() {
        let mut state = BusinessState::default();
        let template = schedule(state.clients[0].id.clone());
        let schedule_id = template.id.clone();
        state.upsert_schedule(template);

        state.set_schedule_active(&schedule_id, false).unwrap();
        assert!(state.run_recurring_billing(date(2024, 3, 1)).is_empty());
        assert_eq!(state.recurring_invoices[0].next_due_date, date(2024, 2, 1));

        state.set_schedule_active(&schedule_id, true).unwrap();
        let created = state.run_recurring_billing(date(2024, 3, 1));
        assert_eq!(created.len(), 1);
        assert_eq!(state.recurring_invoices[0].next_due_date, date(2024, 3, 1));
        assert_eq!(state.invoices.len(), 1);
    }

    #[test]
    fn test_upsert_schedule_edits_in_place() {
        let mut state = BusinessState::default();
        let template = schedule(state.clients[0].id.clone());
        state.upsert_schedule(template.clone());

        state.upsert_schedule(RecurringInvoice {
            frequency: Frequency::Yearly,
            next_due_date: date(2025, 1, 1),
            ..template
        });

        assert_eq!(state.recurring_invoices.len(), 1);
        assert_eq!(state.recurring_invoices[0].frequency, Frequency::Yearly);
        assert!(state.run_recurring_billing(date(2024, 3, 1)).is_empty());

        let missing = RecurringInvoiceId::new();
        assert_eq!(
            state.set_schedule_active(&missing, false).unwrap_err(),
            StateError::ScheduleNotFound(missing)
        );
    }

    #[test]
    fn test_effective_statuses_do_not_touch_storage() {
        let mut state = BusinessState::default();
        let client = state.clients[0].id.clone();
        let mut invoice = state.invoice_draft(client, date(2024, 4, 1));
        invoice.status = InvoiceStatus::Sent;
        let invoice_id = invoice.id.clone();
        state.upsert_invoice(invoice).unwrap();

        let statuses = state.effective_invoice_statuses(date(2024, 4, 16));

        assert_eq!(statuses, vec![(invoice_id.clone(), InvoiceStatus::Overdue)]);
        assert_eq!(state.invoices[0].status, InvoiceStatus::Sent);

        state.set_invoice_status(&invoice_id, InvoiceStatus::Paid).unwrap();
        assert_eq!(
            state.effective_invoice_statuses(date(2024, 4, 16)),
            vec![(invoice_id, InvoiceStatus::Paid)]
        );
    }

    #[test]
    fn test_prefix_match_applies_to_previews() {
        let mut state = BusinessState::default().with_prefix_match(PrefixMatch::LeadingNonDigits);
        let client = state.clients[0].id.clone();
        let mut old = state.invoice_draft(client, date(2024, 1, 1));
        old.invoice_number = "INV-41".to_string();
        state.upsert_invoice(old).unwrap();

        assert_eq!(state.prefix_match(), PrefixMatch::LeadingNonDigits);
        assert_eq!(state.next_invoice_number(), "RE-42");
        assert_eq!(
            state
                .clone()
                .with_prefix_match(PrefixMatch::Configured)
                .next_invoice_number(),
            "RE-1"
        );
    }
}
