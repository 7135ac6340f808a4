//! Search and ordering for document lists.

use std::cmp::Ordering;

use super::numbering::Numbering;
use super::types::NumberedDocument;
use crate::client::Client;

/// Returns the documents whose number or client name contains `term`,
/// ignoring case. An empty term matches everything.
#[must_use]
pub fn search<'a, D: NumberedDocument>(
    documents: &'a [D],
    clients: &[Client],
    term: &str,
) -> Vec<&'a D> {
    let needle = term.to_lowercase();

    documents
        .iter()
        .filter(|document| {
            document.number().to_lowercase().contains(&needle)
                || Client::find(clients, document.client_id())
                    .is_some_and(|client| client.name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sorts documents by their sequence integer, highest first.
///
/// Numbers that do not parse go last, in their original order.
pub fn sort_by_number_desc<D: NumberedDocument>(documents: &mut [&D], numbering: &Numbering<'_>) {
    documents.sort_by(|a, b| {
        match (
            numbering.sequence_of(a.number()),
            numbering.sequence_of(b.number()),
        ) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Invoice, InvoiceStatus};
    use billbook_shared::PrefixMatch;
    use billbook_shared::types::{ClientId, InvoiceId};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn invoice(number: &str, client_id: &ClientId) -> Invoice {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Invoice {
            id: InvoiceId::new(),
            invoice_number: number.to_string(),
            client_id: client_id.clone(),
            date,
            due_date: date,
            items: Vec::new(),
            tax_rate: Decimal::from(19),
            status: InvoiceStatus::Draft,
            offer_id: None,
        }
    }

    fn numbers(documents: &[&Invoice]) -> Vec<String> {
        documents.iter().map(|d| d.invoice_number.clone()).collect()
    }

    #[test]
    fn test_search_by_number_and_client_name() {
        let max = Client::sample();
        let other = ClientId::new();
        let invoices = vec![
            invoice("RE-1", &max.id),
            invoice("RE-12", &other),
            invoice("RE-2", &other),
        ];
        let clients = vec![max];

        assert_eq!(numbers(&search(&invoices, &clients, "re-1")), ["RE-1", "RE-12"]);
        assert_eq!(numbers(&search(&invoices, &clients, "MUSTER")), ["RE-1"]);
        assert_eq!(search(&invoices, &clients, "").len(), 3);
        assert!(search(&invoices, &clients, "nobody").is_empty());
    }

    #[test]
    fn test_sort_by_number_desc() {
        let client = ClientId::new();
        let invoices = vec![
            invoice("RE-2", &client),
            invoice("legacy", &client),
            invoice("RE-10", &client),
            invoice("RE-9", &client),
        ];
        let mut refs: Vec<&Invoice> = invoices.iter().collect();

        sort_by_number_desc(&mut refs, &Numbering::new("RE-", PrefixMatch::Configured));

        assert_eq!(numbers(&refs), ["RE-10", "RE-9", "RE-2", "legacy"]);
    }
}
