//! Order aggregation and spread matching for the reconciliation pipeline.
//!
//! This crate provides:
//! - Same-(contract, side, price) order aggregation
//! - The order arena with per-contract long/short pool views
//! - The greedy spread matcher
//! - Unmatched remainder statistics

pub mod aggregate;
pub mod book;
pub mod matcher;
pub mod remainder;

pub use aggregate::aggregate_orders;
pub use book::{ContractPools, PoolBook};
pub use matcher::{ContractMatch, MatchReport, SpreadMatcher};
pub use remainder::RemainderStats;
