//! Shared types, errors, and configuration for Emitrack.
//!
//! This crate provides common types used across all other crates:
//! - Supported currencies and their symbols
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DateStyle, DisplayConfig, DueDayOverflow, ScheduleConfig};
pub use error::{AppError, AppResult};
