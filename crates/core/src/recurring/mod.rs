//! Recurring billing schedules.
//!
//! A schedule is an invoice template plus a cadence. Each session start
//! materializes the schedules that are due into concrete invoices and
//! advances them by one period.

pub mod materializer;
pub mod schedule;
pub mod types;


pub use materializer::{MaterializationOutcome, materialize};
pub use schedule::{advance, checked_advance};
pub use types::{Frequency, RecurringInvoice};
