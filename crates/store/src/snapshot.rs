//! Mapping of [`BusinessState`] onto store keys.

use billbook_core::company::CompanyInfo;
use billbook_core::state::{BusinessState, default_catalog, default_clients};
use billbook_shared::PrefixMatch;
use tracing::info;

use crate::error::StoreError;
use crate::json::JsonStore;

/// Storage keys, one per collection.
pub mod keys {
    /// Company profile.
    pub const COMPANY_INFO: &str = "companyInfo";
    /// Clients.
    pub const CLIENTS: &str = "clients";
    /// Item catalog.
    pub const ITEMS: &str = "items";
    /// Invoices.
    pub const INVOICES: &str = "invoices";
    /// Offers.
    pub const OFFERS: &str = "offers";
    /// Appointments.
    pub const APPOINTMENTS: &str = "appointments";
    /// Recurring schedules.
    pub const RECURRING_INVOICES: &str = "recurringInvoices";
    /// Expenses.
    pub const EXPENSES: &str = "expenses";

    /// Every key, in load order.
    pub const ALL: [&str; 8] = [
        COMPANY_INFO,
        CLIENTS,
        ITEMS,
        INVOICES,
        OFFERS,
        APPOINTMENTS,
        RECURRING_INVOICES,
        EXPENSES,
    ];
}

/// Loads and saves the whole business state.
pub struct StateSnapshot;

impl StateSnapshot {
    /// Loads every collection.
    ///
    /// Company settings, clients and the item catalog are seeded with their
    /// defaults and saved the first time they are missing. Other keys that
    /// were never saved load as empty.
    pub fn load(
        store: &JsonStore,
        prefix_match: PrefixMatch,
    ) -> Result<BusinessState, StoreError> {
        let mut state = BusinessState::default().with_prefix_match(prefix_match);
        state.company = store.load_or_init(keys::COMPANY_INFO, CompanyInfo::default())?;
        state.clients = store.load_or_init(keys::CLIENTS, default_clients())?;
        state.catalog = store.load_or_init(keys::ITEMS, default_catalog())?;
        state.invoices = store.load_or_default(keys::INVOICES, Vec::new())?;
        state.offers = store.load_or_default(keys::OFFERS, Vec::new())?;
        state.appointments = store.load_or_default(keys::APPOINTMENTS, Vec::new())?;
        state.recurring_invoices = store.load_or_default(keys::RECURRING_INVOICES, Vec::new())?;
        state.expenses = store.load_or_default(keys::EXPENSES, Vec::new())?;

        info!(
            invoices = state.invoices.len(),
            offers = state.offers.len(),
            schedules = state.recurring_invoices.len(),
            "Loaded business state"
        );
        Ok(state)
    }

    /// Saves every collection.
    pub fn save(store: &JsonStore, state: &BusinessState) -> Result<(), StoreError> {
        store.save(keys::COMPANY_INFO, &state.company)?;
        store.save(keys::CLIENTS, &state.clients)?;
        store.save(keys::ITEMS, &state.catalog)?;
        Self::save_billing(store, state)?;
        store.save(keys::OFFERS, &state.offers)?;
        store.save(keys::APPOINTMENTS, &state.appointments)?;
        store.save(keys::EXPENSES, &state.expenses)?;
        Ok(())
    }

    /// Saves the collections touched by recurring billing.
    pub fn save_billing(store: &JsonStore, state: &BusinessState) -> Result<(), StoreError> {
        store.save(keys::INVOICES, &state.invoices)?;
        store.save(keys::RECURRING_INVOICES, &state.recurring_invoices)?;
        Ok(())
    }
}
