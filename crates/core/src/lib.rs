//! Core business logic for MemoCont.
//!
//! This crate holds the sales domain and reporting logic, free of any web
//! or database dependencies:
//! - Identity and credential verification primitives
//! - Sale input validation (payment methods, number-like totals)
//! - Reporting: daily cash report and spreadsheet export

pub mod auth;
pub mod reports;
pub mod sales;
