//! Shared types, errors, and configuration for Billbook.
//!
//! This crate provides common types used across all other crates:
//! - Money display type with decimal precision
//! - Typed IDs for type-safe entity references
//! - An injectable calendar clock
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, PrefixMatch};
pub use error::{AppError, AppResult};
