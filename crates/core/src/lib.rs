//! Core billing logic for Billbook.
//!
//! This crate contains pure business logic with ZERO storage or UI dependencies.
//! All domain types, numbering rules, schedules and reports live here.
//!
//! # Modules
//!
//! - `company` - Company profile and document defaults
//! - `client` - Clients and appointments
//! - `document` - Invoices, offers, totals, numbering and conversion
//! - `recurring` - Recurring billing schedules and materialization
//! - `expense` - Business expenses
//! - `reports` - Dashboard and financial reports
//! - `state` - The business state container

pub mod client;
pub mod company;
pub mod document;
pub mod expense;
pub mod recurring;
pub mod reports;
pub mod state;
