//! Offer-to-invoice conversion.

use billbook_shared::types::InvoiceId;
use chrono::NaiveDate;

use super::draft::payment_due;
use super::numbering::Numbering;
use super::types::{Invoice, InvoiceStatus, Offer, OfferStatus, duplicate_items};

/// Result of accepting an offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferConversion {
    /// The source offer, now `Accepted`.
    pub offer: Offer,
    /// The new draft invoice.
    pub invoice: Invoice,
}

/// Accepts `offer` and builds the invoice that bills it.
///
/// The invoice is numbered after `invoices`, copies client, tax rate and
/// items (under fresh ids) and back-references the offer. The input offer
/// is left untouched; the accepted copy is returned.
#[must_use]
pub fn convert_offer(
    offer: &Offer,
    invoices: &[Invoice],
    numbering: &Numbering<'_>,
    today: NaiveDate,
) -> OfferConversion {
    let invoice = Invoice {
        id: InvoiceId::new(),
        invoice_number: numbering.next_for(invoices),
        client_id: offer.client_id.clone(),
        date: today,
        due_date: payment_due(today),
        items: duplicate_items(&offer.items),
        tax_rate: offer.tax_rate,
        status: InvoiceStatus::Draft,
        offer_id: Some(offer.id.clone()),
    };

    let offer = Offer {
        status: OfferStatus::Accepted,
        ..offer.clone()
    };

    OfferConversion { offer, invoice }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Billable, LineItem};
    use billbook_shared::PrefixMatch;
    use billbook_shared::types::{ClientId, OfferId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn offer(items: Vec<LineItem>) -> Offer {
        Offer {
            id: OfferId::new(),
            offer_number: "AN-3".to_string(),
            client_id: ClientId::new(),
            date: date(2024, 2, 1),
            valid_until: date(2024, 2, 15),
            items,
            tax_rate: dec!(19),
            status: OfferStatus::Sent,
        }
    }

    #[test]
    fn test_conversion_copies_offer() {
        let source = offer(vec![LineItem::new("A", dec!(1), dec!(100))]);
        let numbering = Numbering::new("RE-", PrefixMatch::Configured);

        let result = convert_offer(&source, &[], &numbering, date(2024, 2, 10));

        let invoice = &result.invoice;
        assert_eq!(invoice.invoice_number, "RE-1");
        assert_eq!(invoice.client_id, source.client_id);
        assert_eq!(invoice.tax_rate, dec!(19));
        assert_eq!(invoice.status, InvoiceStatus::Draft);
        assert_eq!(invoice.offer_id.as_ref(), Some(&source.id));
        assert_eq!(invoice.date, date(2024, 2, 10));
        assert_eq!(invoice.due_date, date(2024, 2, 24));
        assert_eq!(invoice.items.len(), 1);
        assert!(invoice.items[0].same_content(&source.items[0]));
        assert_ne!(invoice.items[0].id, source.items[0].id);
        assert_eq!(invoice.totals().total, dec!(119));
    }

    #[test]
    fn test_conversion_accepts_offer_without_mutating_input() {
        let source = offer(Vec::new());
        let numbering = Numbering::new("RE-", PrefixMatch::Configured);

        let result = convert_offer(&source, &[], &numbering, date(2024, 2, 10));

        assert_eq!(source.status, OfferStatus::Sent);
        assert_eq!(result.offer.status, OfferStatus::Accepted);
        assert_eq!(result.offer.id, source.id);
        assert_eq!(result.offer.items, source.items);
    }

    #[test]
    fn test_empty_offer_gives_empty_invoice() {
        let source = offer(Vec::new());
        let numbering = Numbering::new("RE-", PrefixMatch::Configured);

        let result = convert_offer(&source, &[], &numbering, date(2024, 2, 10));

        assert!(result.invoice.items.is_empty());
        assert_eq!(result.invoice.totals().total, dec!(0));
    }
}
