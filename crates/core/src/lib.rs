//! Core types and configuration for the trade reconciliation pipeline.
//!
//! This crate provides shared types used across all other crates:
//! - Order and summary data types
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, SummarySource};
pub use error::{Error, RecordError, Result};
pub use types::*;
