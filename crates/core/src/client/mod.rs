//! Clients and appointments.

pub mod types;

pub use types::{Appointment, Client};
