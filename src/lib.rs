//! # costcheck - numeric coercion diagnostics for cost models
//!
//! Form input arrives as text. Adding text fields with an untyped `+` joins
//! them instead of summing them, so a cost total of `158000` silently becomes
//! `"600005000030000100008000"`. This crate provides the coercion that guards
//! against that, locale-aware number formatting, and a diagnostic report that
//! shows both paths side by side for a fixed restaurant cost sample.
//!
//! ## Architecture
//!
//! - `coerce`: dynamic input values and zero-defaulting numeric coercion
//! - `format`: digit grouping per locale, currency and percentage text
//! - `record`: the six-field cost record and its samples
//! - `summary`: total cost and revenue ratios
//! - `report`: the linear diagnostic sequence
//! - `config`: YAML configuration with validation
//! - `logging`: structured logging and tracing
//! - `error`: error types

pub mod coerce;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod record;
pub mod report;
pub mod summary;

// Re-export commonly used types
pub use coerce::{RawValue, ToRaw, to_number};
pub use config::Config;
pub use error::{CostcheckError, Result};
pub use format::{Locale, NumberFormat, format_number};
pub use record::{CostRecord, NumericCostRecord, StringCostRecord};
pub use report::{DiagnosticReport, build_report};
pub use summary::CostSummary;
