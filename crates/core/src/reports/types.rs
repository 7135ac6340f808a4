//! Report data types.

use billbook_shared::types::ClientId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::client::Appointment;
use crate::document::Invoice;

/// Headline figures for the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Gross total of paid invoices dated in the current month.
    pub revenue_this_month: Decimal,
    /// Gross total of invoices awaiting payment.
    pub outstanding_total: Decimal,
    /// Offers still awaiting a decision.
    pub open_offers: usize,
    /// Next appointments from today on, earliest first.
    pub upcoming_appointments: Vec<Appointment>,
    /// Latest invoices by date, newest first.
    pub recent_invoices: Vec<Invoice>,
}

/// Revenue and expenses of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyResult {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Gross total of paid invoices dated in the month.
    pub revenue: Decimal,
    /// Sum of expenses dated in the month.
    pub expenses: Decimal,
    /// revenue - expenses.
    pub profit: Decimal,
}

/// Paid revenue attributed to one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRevenue {
    /// Client id.
    pub client_id: ClientId,
    /// Client name, if the client still exists.
    pub client_name: Option<String>,
    /// Gross total of the client's paid invoices.
    pub revenue: Decimal,
}

/// Expense total of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label.
    pub category: String,
    /// Sum of the category's expenses.
    pub amount: Decimal,
}
