//! JSON file persistence for Billbook.
//!
//! Every collection lives in its own `<key>.json` file inside one data
//! directory. Missing files fall back to defaults.

pub mod error;
pub mod json;
pub mod snapshot;

pub use error::StoreError;
pub use json::JsonStore;
pub use snapshot::{StateSnapshot, keys};
