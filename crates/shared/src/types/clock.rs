//! Calendar clock abstraction.
//!
//! Date-driven logic never reads the wall clock itself. The composition
//! root owns a `Clock` and hands `today` to every engine call.

use chrono::NaiveDate;

/// Source of the current calendar date.
pub trait Clock {
    /// Returns today's date. Time of day is discarded.
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
