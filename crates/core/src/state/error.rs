//! State container error types.

use billbook_shared::AppError;
use billbook_shared::types::{
    AppointmentId, ClientId, ExpenseId, InvoiceId, LineItemId, OfferId, RecurringInvoiceId,
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by state container operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// Offer not found.
    #[error("Offer not found: {0}")]
    OfferNotFound(OfferId),

    /// Offer was already converted into an invoice.
    #[error("Offer already accepted: {0}")]
    OfferAlreadyAccepted(OfferId),

    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    /// Recurring schedule not found.
    #[error("Recurring schedule not found: {0}")]
    ScheduleNotFound(RecurringInvoiceId),

    /// Client not found.
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    /// Appointment not found.
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(AppointmentId),

    /// Catalog item template not found.
    #[error("Catalog item not found: {0}")]
    CatalogItemNotFound(LineItemId),

    /// Expense not found.
    #[error("Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// A new document reuses an existing number.
    #[error("Document number already in use: {0}")]
    DuplicateNumber(String),

    /// Expense amount must be positive.
    #[error("Expense amount must be greater than zero, got {0}")]
    NonPositiveExpense(Decimal),
}

impl From<StateError> for AppError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::OfferNotFound(_)
            | StateError::InvoiceNotFound(_)
            | StateError::ScheduleNotFound(_)
            | StateError::ClientNotFound(_)
            | StateError::AppointmentNotFound(_)
            | StateError::CatalogItemNotFound(_)
            | StateError::ExpenseNotFound(_) => Self::NotFound(err.to_string()),
            StateError::OfferAlreadyAccepted(_) => Self::BusinessRule(err.to_string()),
            StateError::DuplicateNumber(_) => Self::Conflict(err.to_string()),
            StateError::NonPositiveExpense(_) => Self::Validation(err.to_string()),
        }
    }
}
