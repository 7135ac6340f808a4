//! Pre-filled drafts for new documents.

use billbook_shared::types::{ClientId, InvoiceId, OfferId};
use chrono::{Days, NaiveDate};

use super::PAYMENT_TERM_DAYS;
use super::numbering::Numbering;
use super::types::{Invoice, InvoiceStatus, Offer, OfferStatus};
use crate::company::CompanyInfo;

/// Returns the due date for a document issued on `date`.
#[must_use]
pub fn payment_due(date: NaiveDate) -> NaiveDate {
    date + Days::new(PAYMENT_TERM_DAYS)
}

/// Builds an empty draft invoice numbered after `existing`.
#[must_use]
pub fn new_invoice_draft(
    existing: &[Invoice],
    numbering: &Numbering<'_>,
    company: &CompanyInfo,
    client_id: ClientId,
    today: NaiveDate,
) -> Invoice {
    Invoice {
        id: InvoiceId::new(),
        invoice_number: numbering.next_for(existing),
        client_id,
        date: today,
        due_date: payment_due(today),
        items: Vec::new(),
        tax_rate: company.default_tax_rate,
        status: InvoiceStatus::Draft,
        offer_id: None,
    }
}

/// Builds an empty draft offer numbered after `existing`.
#[must_use]
pub fn new_offer_draft(
    existing: &[Offer],
    numbering: &Numbering<'_>,
    company: &CompanyInfo,
    client_id: ClientId,
    today: NaiveDate,
) -> Offer {
    Offer {
        id: OfferId::new(),
        offer_number: numbering.next_for(existing),
        client_id,
        date: today,
        valid_until: payment_due(today),
        items: Vec::new(),
        tax_rate: company.default_tax_rate,
        status: OfferStatus::Draft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billbook_shared::PrefixMatch;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_payment_due_crosses_month() {
        assert_eq!(payment_due(date(2024, 1, 25)), date(2024, 2, 8));
        assert_eq!(payment_due(date(2024, 12, 20)), date(2025, 1, 3));
    }

    #[test]
    fn test_invoice_draft_prefill() {
        let mut company = CompanyInfo::default();
        company.default_tax_rate = dec!(7);
        let numbering = company.invoice_numbering(PrefixMatch::Configured);
        let client_id = ClientId::new();

        let draft = new_invoice_draft(
            &[],
            &numbering,
            &company,
            client_id.clone(),
            date(2024, 3, 1),
        );

        assert_eq!(draft.invoice_number, "RE-1");
        assert_eq!(draft.client_id, client_id);
        assert_eq!(draft.date, date(2024, 3, 1));
        assert_eq!(draft.due_date, date(2024, 3, 15));
        assert_eq!(draft.tax_rate, dec!(7));
        assert_eq!(draft.status, InvoiceStatus::Draft);
        assert!(draft.items.is_empty());
        assert!(draft.offer_id.is_none());
    }

    #[test]
    fn test_offer_draft_follows_existing_numbers() {
        let company = CompanyInfo::default();
        let numbering = company.offer_numbering(PrefixMatch::Configured);
        let first = new_offer_draft(&[], &numbering, &company, ClientId::new(), date(2024, 3, 1));
        let second = new_offer_draft(
            std::slice::from_ref(&first),
            &numbering,
            &company,
            ClientId::new(),
            date(2024, 3, 2),
        );

        assert_eq!(first.offer_number, "AN-1");
        assert_eq!(second.offer_number, "AN-2");
        assert_eq!(second.valid_until, date(2024, 3, 16));
        assert_eq!(second.status, OfferStatus::Draft);
    }
}
