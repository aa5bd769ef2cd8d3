// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Chart and Table Rendering
//!
//! Presentation of trial summaries produced by `trialplot-core`.
//!
//! ## Chart
//! An SVG error-bar chart with one series per summary series:
//! - logarithmic x-axis (`n * r`)
//! - line through the mean throughput of each point
//! - asymmetric vertical error bars from the minimum to the maximum sample
//! - legend in the lower-right corner
//!
//! ## Table
//! A Markdown table with one column per x-coordinate and one row per series,
//! each cell holding the mean scaled down by one million.
//!
//! ## Presenter
//! [`Presenter`] drives both: table rows are written as each series is added
//! to the chart, and the SVG document is written once it is complete.

mod chart;
mod error;
mod presenter;
mod table;

pub use chart::{Chart, ChartConfig};
pub use error::{RenderError, Result};
pub use presenter::Presenter;
pub use table::{MarkdownTable, TableConfig, render_table};
