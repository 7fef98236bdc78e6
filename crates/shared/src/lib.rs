//! Shared errors and configuration for MemoCont.
//!
//! This crate provides the types used across all other crates:
//! - Application-wide error type with HTTP status mapping
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
