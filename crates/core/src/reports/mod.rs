//! Financial overview and reports.
//!
//! This module provides pure business logic for:
//! - Dashboard metrics
//! - Monthly profit and loss
//! - Top clients by revenue
//! - Expenses by category

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
