//! Subtotal, tax and total derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::LineItem;

/// Monetary totals of a document, unrounded.
///
/// Values keep full precision so chained calculations do not compound
/// rounding error. Round via `Money` when presenting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Σ(quantity × unit price).
    pub subtotal: Decimal,
    /// subtotal × tax rate / 100.
    pub tax: Decimal,
    /// subtotal + tax.
    pub total: Decimal,
}

impl DocumentTotals {
    /// Derives totals from line items and a tax rate in percent.
    ///
    /// Negative quantities or prices are accepted and contribute negatively.
    #[must_use]
    pub fn calculate(items: &[LineItem], tax_rate: Decimal) -> Self {
        let subtotal = Self::subtotal(items);
        let tax = subtotal * tax_rate / Decimal::ONE_HUNDRED;

        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Sums `quantity × unit price` over the items in input order.
    #[must_use]
    pub fn subtotal(items: &[LineItem]) -> Decimal {
        items.iter().map(LineItem::amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn items(positions: &[(Decimal, Decimal)]) -> Vec<LineItem> {
        positions
            .iter()
            .map(|&(quantity, price)| LineItem::new("position", quantity, price))
            .collect()
    }

    #[test]
    fn test_standard_invoice_totals() {
        let totals = DocumentTotals::calculate(
            &items(&[(dec!(2), dec!(50)), (dec!(1), dec!(250))]),
            dec!(19),
        );

        assert_eq!(totals.subtotal, dec!(350));
        assert_eq!(totals.tax, dec!(66.5));
        assert_eq!(totals.total, dec!(416.5));
    }

    #[test]
    fn test_empty_items_are_zero() {
        let totals = DocumentTotals::calculate(&[], dec!(19));
        assert_eq!(totals, DocumentTotals::default());
    }

    #[rstest]
    #[case(dec!(0), dec!(0), dec!(100))]
    #[case(dec!(7), dec!(7), dec!(107))]
    #[case(dec!(19), dec!(19), dec!(119))]
    #[case(dec!(7.7), dec!(7.7), dec!(107.7))]
    fn test_tax_rates(#[case] rate: Decimal, #[case] tax: Decimal, #[case] total: Decimal) {
        let totals = DocumentTotals::calculate(&items(&[(dec!(1), dec!(100))]), rate);
        assert_eq!(totals.tax, tax);
        assert_eq!(totals.total, total);
    }

    #[test]
    fn test_negative_positions_reduce_subtotal() {
        let totals = DocumentTotals::calculate(
            &items(&[(dec!(1), dec!(100)), (dec!(-1), dec!(30))]),
            dec!(10),
        );
        assert_eq!(totals.subtotal, dec!(70));
        assert_eq!(totals.total, dec!(77));
    }

    #[test]
    fn test_full_precision_is_kept() {
        let totals = DocumentTotals::calculate(&items(&[(dec!(3), dec!(0.333))]), dec!(19));
        assert_eq!(totals.subtotal, dec!(0.999));
        assert_eq!(totals.tax, dec!(0.18981));
        assert_eq!(totals.total, dec!(1.18881));
    }
}
