//! Common types used across the application.

pub mod clock;
pub mod id;
pub mod money;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id::*;
pub use money::{Currency, Money};
