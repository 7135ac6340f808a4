//! Document domain types.
//!
//! Field names serialize in camelCase so persisted collections keep the
//! shape older clients wrote.

use billbook_shared::types::{ClientId, InvoiceId, LineItemId, OfferId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::totals::DocumentTotals;

/// A single billable position on a document.
///
/// Items are owned by exactly one document. Copying an item between
/// documents goes through [`LineItem::duplicate`] so the copy gets its own id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique identifier.
    pub id: LineItemId,
    /// Free-text description.
    pub description: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Price per unit in major currency units.
    pub unit_price: Decimal,
}

impl LineItem {
    /// Creates an item with a fresh id.
    #[must_use]
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            id: LineItemId::new(),
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns `quantity × unit_price`.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// Returns a value copy of this item under a fresh id.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: LineItemId::new(),
            ..self.clone()
        }
    }

    /// Returns true if both items carry the same description, quantity and price.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.description == other.description
            && self.quantity == other.quantity
            && self.unit_price == other.unit_price
    }
}

/// Copies a list of items, giving every copy a fresh id.
#[must_use]
pub fn duplicate_items(items: &[LineItem]) -> Vec<LineItem> {
    items.iter().map(LineItem::duplicate).collect()
}

/// Stored status of an invoice.
///
/// Older clients persisted German labels; those are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Being prepared, not yet sent.
    #[serde(alias = "Entwurf")]
    Draft,
    /// Sent to the client, awaiting payment.
    #[serde(alias = "Gesendet")]
    Sent,
    /// Paid in full.
    #[serde(alias = "Bezahlt")]
    Paid,
    /// Past its due date without payment.
    #[serde(alias = "Überfällig")]
    Overdue,
}

impl InvoiceStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    /// Returns true if the invoice still awaits payment.
    #[must_use]
    pub const fn is_outstanding(&self) -> bool {
        matches!(self, Self::Sent | Self::Overdue)
    }
}

/// Status of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    /// Being prepared, not yet sent.
    #[serde(alias = "Entwurf")]
    Draft,
    /// Sent to the client.
    #[serde(alias = "Gesendet")]
    Sent,
    /// Accepted by the client and converted into an invoice.
    #[serde(alias = "Angenommen")]
    Accepted,
    /// Declined by the client.
    #[serde(alias = "Abgelehnt")]
    Rejected,
}

impl OfferStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true if the offer still awaits a decision.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Draft | Self::Sent)
    }
}

/// An invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Sequential number, `<prefix><integer>` when allocated by the engine.
    pub invoice_number: String,
    /// Billed client. Not checked for existence.
    pub client_id: ClientId,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Billed positions.
    pub items: Vec<LineItem>,
    /// Tax rate in percent (19 means 19%).
    pub tax_rate: Decimal,
    /// Stored status.
    pub status: InvoiceStatus,
    /// Offer this invoice was converted from. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<OfferId>,
}

/// An offer (quote).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique identifier.
    pub id: OfferId,
    /// Sequential number, `<prefix><integer>` when allocated by the engine.
    pub offer_number: String,
    /// Addressed client. Not checked for existence.
    pub client_id: ClientId,
    /// Issue date.
    pub date: NaiveDate,
    /// Last day the offer is valid.
    pub valid_until: NaiveDate,
    /// Offered positions.
    pub items: Vec<LineItem>,
    /// Tax rate in percent.
    pub tax_rate: Decimal,
    /// Status.
    pub status: OfferStatus,
}

/// A document carrying a sequential number and addressed to a client.
pub trait NumberedDocument {
    /// Returns the document number as stored.
    fn number(&self) -> &str;

    /// Returns the addressed client.
    fn client_id(&self) -> &ClientId;
}

impl NumberedDocument for Invoice {
    fn number(&self) -> &str {
        &self.invoice_number
    }

    fn client_id(&self) -> &ClientId {
        &self.client_id
    }
}

impl NumberedDocument for Offer {
    fn number(&self) -> &str {
        &self.offer_number
    }

    fn client_id(&self) -> &ClientId {
        &self.client_id
    }
}

/// Anything holding line items and a tax rate.
pub trait Billable {
    /// Returns the line items.
    fn items(&self) -> &[LineItem];

    /// Returns the tax rate in percent.
    fn tax_rate(&self) -> Decimal;

    /// Computes subtotal, tax and total at full precision.
    fn totals(&self) -> DocumentTotals {
        DocumentTotals::calculate(self.items(), self.tax_rate())
    }
}

impl Billable for Invoice {
    fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }
}

impl Billable for Offer {
    fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }
}
