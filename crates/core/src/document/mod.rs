//! Invoice and offer documents.
//!
//! This module provides pure logic for billing documents:
//! - Line items and totals
//! - Sequential document numbering
//! - Effective invoice status
//! - Offer-to-invoice conversion
//! - Draft pre-filling and list helpers

pub mod conversion;
pub mod draft;
pub mod listing;
pub mod numbering;
pub mod status;
pub mod totals;
pub mod types;


pub use conversion::{OfferConversion, convert_offer};
pub use draft::{new_invoice_draft, new_offer_draft, payment_due};
pub use numbering::Numbering;
pub use status::effective_status;
pub use totals::DocumentTotals;
pub use types::{
    Billable, Invoice, InvoiceStatus, LineItem, NumberedDocument, Offer, OfferStatus,
    duplicate_items,
};

/// Days between a document's date and its payment due date (or offer
/// validity end).
pub const PAYMENT_TERM_DAYS: u64 = 14;
