//! Report generation service.

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use super::types::{CategoryTotal, ClientRevenue, DashboardSummary, MonthlyResult};
use crate::client::{Appointment, Client};
use crate::document::{Billable, Invoice, InvoiceStatus, Offer};
use crate::expense::{DEFAULT_EXPENSE_CATEGORIES, Expense};

/// Service for deriving reports from the business collections.
pub struct ReportService;

impl ReportService {
    /// Appointments listed on the dashboard.
    pub const UPCOMING_APPOINTMENTS: usize = 4;
    /// Invoices listed on the dashboard.
    pub const RECENT_INVOICES: usize = 5;
    /// Clients listed in the revenue ranking.
    pub const TOP_CLIENTS: usize = 5;
    /// Months covered by the profit and loss report.
    pub const PROFIT_LOSS_MONTHS: u32 = 6;

    /// Builds the dashboard summary as of `today`.
    #[must_use]
    pub fn dashboard(
        invoices: &[Invoice],
        offers: &[Offer],
        appointments: &[Appointment],
        today: NaiveDate,
    ) -> DashboardSummary {
        let month_start = today.with_day(1).unwrap_or(today);

        let revenue_this_month = invoices
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Paid && invoice.date >= month_start)
            .map(|invoice| invoice.totals().total)
            .sum();

        let outstanding_total = invoices
            .iter()
            .filter(|invoice| invoice.effective_status(today).is_outstanding())
            .map(|invoice| invoice.totals().total)
            .sum();

        let open_offers = offers.iter().filter(|offer| offer.status.is_open()).count();

        let mut upcoming_appointments: Vec<Appointment> = appointments
            .iter()
            .filter(|appointment| appointment.date >= today)
            .cloned()
            .collect();
        upcoming_appointments.sort_by_key(|appointment| (appointment.date, appointment.start_time));
        upcoming_appointments.truncate(Self::UPCOMING_APPOINTMENTS);

        let mut recent_invoices = invoices.to_vec();
        recent_invoices.sort_by(|a, b| b.date.cmp(&a.date));
        recent_invoices.truncate(Self::RECENT_INVOICES);

        DashboardSummary {
            revenue_this_month,
            outstanding_total,
            open_offers,
            upcoming_appointments,
            recent_invoices,
        }
    }

    /// Revenue, expenses and profit for the `months` calendar months
    /// ending with the month of `today`, oldest first.
    ///
    /// Revenue counts paid invoices by invoice date.
    #[must_use]
    pub fn monthly_results(
        invoices: &[Invoice],
        expenses: &[Expense],
        today: NaiveDate,
        months: u32,
    ) -> Vec<MonthlyResult> {
        let month_start = today.with_day(1).unwrap_or(today);

        (0..months)
            .rev()
            .filter_map(|back| month_start.checked_sub_months(Months::new(back)))
            .map(|start| {
                let in_month =
                    |date: NaiveDate| date.year() == start.year() && date.month() == start.month();

                let revenue: Decimal = invoices
                    .iter()
                    .filter(|invoice| {
                        invoice.status == InvoiceStatus::Paid && in_month(invoice.date)
                    })
                    .map(|invoice| invoice.totals().total)
                    .sum();
                let spent: Decimal = expenses
                    .iter()
                    .filter(|expense| in_month(expense.date))
                    .map(|expense| expense.amount)
                    .sum();

                MonthlyResult {
                    year: start.year(),
                    month: start.month(),
                    revenue,
                    expenses: spent,
                    profit: revenue - spent,
                }
            })
            .collect()
    }

    /// Clients ranked by paid revenue, highest first, at most `limit`.
    ///
    /// Ties keep the order in which clients first appear among the invoices.
    #[must_use]
    pub fn top_clients(
        invoices: &[Invoice],
        clients: &[Client],
        limit: usize,
    ) -> Vec<ClientRevenue> {
        let mut ranking: Vec<ClientRevenue> = Vec::new();
        let mut positions = HashMap::new();

        for invoice in invoices.iter().filter(|i| i.status == InvoiceStatus::Paid) {
            let position = *positions.entry(&invoice.client_id).or_insert_with(|| {
                ranking.push(ClientRevenue {
                    client_id: invoice.client_id.clone(),
                    client_name: Client::find(clients, &invoice.client_id)
                        .map(|client| client.name.clone()),
                    revenue: Decimal::ZERO,
                });
                ranking.len() - 1
            });
            ranking[position].revenue += invoice.totals().total;
        }

        ranking.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        ranking.truncate(limit);
        ranking
    }

    /// Expense totals per category, largest first.
    ///
    /// Only categories with a positive total are listed. Ties keep the
    /// default category order, followed by other categories in order of
    /// first use.
    #[must_use]
    pub fn expenses_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = DEFAULT_EXPENSE_CATEGORIES
            .iter()
            .map(|category| CategoryTotal {
                category: (*category).to_string(),
                amount: Decimal::ZERO,
            })
            .collect();

        for expense in expenses {
            match totals.iter_mut().find(|t| t.category == expense.category) {
                Some(total) => total.amount += expense.amount,
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                }),
            }
        }

        totals.retain(|total| total.amount > Decimal::ZERO);
        totals.sort_by(|a, b| b.amount.cmp(&a.amount));
        totals
    }
}
