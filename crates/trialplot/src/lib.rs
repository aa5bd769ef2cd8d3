// SPDX-License-Identifier: MIT OR Apache-2.0
//! # trialplot
//!
//! Throughput error-bar charts from benchmark CSV.
//!
//! ```
//! use trialplot::{Chart, ChartConfig, FoldOptions, Summary, aggregate_str, render_table};
//!
//! let aggregation = aggregate_str("N,R,M,time\n2,2,2,4.0\n2,2,2,2.0\n")?;
//! let summary = Summary::fold(&aggregation.buckets, FoldOptions::default());
//!
//! let point = summary.get("time").and_then(|s| s.get(4.0)).copied();
//! assert_eq!(point.map(|p| (p.low, p.center, p.high)), Some((1.0, 3.0, 1.0)));
//!
//! assert!(render_table(&summary, &Default::default()).starts_with("| | 4 |"));
//! let svg = Chart::new(&ChartConfig::default(), &summary).render()?;
//! assert!(svg.contains("</svg>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate re-exports:
//!
//! - [`trialplot_core`] - CSV parsing, trial buckets, summary folding
//! - [`trialplot_render`] - SVG charts, Markdown tables, presenter

#![deny(missing_docs)]

pub use trialplot_core::{
    Aggregation, Aggregator, Coord, FoldOptions, Grouping, Header, Result, Series, SizeKey,
    Summary, SummaryPoint, TrialBuckets, TrialError, aggregate_reader, aggregate_str,
};
pub use trialplot_render::{
    Chart, ChartConfig, MarkdownTable, Presenter, RenderError, TableConfig, render_table,
};

/// Core parsing and aggregation
pub use trialplot_core as core;
/// Chart and table rendering
pub use trialplot_render as render;
