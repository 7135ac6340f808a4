//! Application state container.
//!
//! The composition root owns one [`BusinessState`]. Engine functions stay
//! pure; the container feeds them snapshots and merges their results.

pub mod business;
pub mod error;
mod records;

pub use business::{BusinessState, default_catalog, default_clients};
pub use error::StateError;
