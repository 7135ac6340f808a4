//! Company settings.

pub mod info;

pub use info::CompanyInfo;
