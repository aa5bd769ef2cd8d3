// SPDX-License-Identifier: MIT OR Apache-2.0
//! # trialplot-cli
//!
//! Command-line interface for trialplot - throughput error-bar charts from
//! benchmark CSV.
//!
//! ## Installation
//!
//! ```bash
//! cargo install trialplot-cli
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Chart to stdout
//! ./bench | trialplot > throughput.svg
//!
//! # Chart to a file, with a Markdown table on stdout
//! trialplot --table -i results.csv throughput.svg
//!
//! # Keep trials with different m apart
//! trialplot --split-by-m -i results.csv throughput.svg
//! ```
//!
//! ## Input
//!
//! ```text
//! N,R,M,goroutines,threads
//! 10,10,1000,0.012,0.051
//! 10,10,1000,0.011,0.049
//! 100,10,1000,0.140,0.602
//! ```
//!
//! The first row starts with `N` and names the metric columns. Each data row
//! holds `n, r, m` and one elapsed time per metric; throughput is
//! `n * r * m / time`, averaged over rows with the same `(n, r, m)`.
//!
//! ## Library Usage
//!
//! For programmatic access use the constituent crates directly:
//!
//! - [`trialplot-core`](https://docs.rs/trialplot-core) - Parsing and aggregation
//! - [`trialplot-render`](https://docs.rs/trialplot-render) - Charts and tables

#![doc(html_root_url = "https://docs.rs/trialplot-cli/0.1.0")]
#![warn(missing_docs)]

mod logging;
pub mod options;
pub mod output;

use anyhow::Context;
use std::io;
use tracing::{debug, info, warn};
use trialplot_core::{Summary, aggregate_str};

pub use logging::configure_tracing;
pub use options::Args;
pub use output::{ChartTarget, read_input};

/// Re-export of trialplot-core for parsing and aggregation.
pub use trialplot_core as core;

/// Re-export of trialplot-render for charts and tables.
pub use trialplot_render as render;

/// Read, aggregate, and present according to `args`.
///
/// The chart target is opened only after the input aggregated cleanly, and
/// before any table row is printed.
///
/// # Errors
///
/// Returns the first input, aggregation, or output failure.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let input = read_input(args.input.as_deref()).with_context(|| match &args.input {
        Some(path) => format!("cannot read {}", path.display()),
        None => "cannot read standard input".to_string(),
    })?;

    let aggregation = aggregate_str(&input).context("invalid trial data")?;
    match &aggregation.header {
        Some(header) => debug!(metrics = ?header.metric_names(), "header"),
        None => warn!("input has no `N` header row"),
    }
    let summary = Summary::fold(&aggregation.buckets, args.fold_options());

    let target = args.chart_target();
    let mut chart_out = target
        .open()
        .with_context(|| format!("cannot open {target}"))?;
    info!(output = %target, "writing chart");

    let mut stdout = io::stdout();
    args.presenter()
        .present(&summary, &mut stdout, &mut chart_out)
        .with_context(|| format!("cannot write chart to {target}"))?;
    Ok(())
}
