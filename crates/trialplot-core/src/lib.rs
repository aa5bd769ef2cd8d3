// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and aggregation for trialplot
//!
//! This crate turns benchmark CSV into plottable summaries:
//!
//! - [`parse`] - Header detection and record parsing into trial buckets
//! - [`bucket`] - Nested, insertion-ordered trial buckets
//! - [`summary`] - Folding buckets into `(low, center, high)` points
//! - [`coord`] - Hashable numeric keys
//! - [`error`] - Error types and Result alias

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Trial buckets keyed by size and metric
pub mod bucket;
/// Hashable numeric keys
pub mod coord;
/// Error types for trialplot operations
pub mod error;
/// CSV record parsing and aggregation
pub mod parse;
/// Summary points for plotting
pub mod summary;
// Re-exports for convenience
pub use bucket::TrialBuckets;
pub use coord::{Coord, SizeKey};
pub use error::{Result, TrialError};
pub use parse::{Aggregation, Aggregator, Header, aggregate_reader, aggregate_str};
pub use summary::{FoldOptions, Grouping, Series, Summary, SummaryPoint};
