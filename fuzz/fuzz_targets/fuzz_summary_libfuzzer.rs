#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for aggregation, folding, and table rendering
//!
//! Tests:
//! - aggregate_str on arbitrary input
//! - Summary::fold in both groupings
//! - render_table on every folded summary
//! - No panics on malformed CSV

use libfuzzer_sys::fuzz_target;
use trialplot_core::{FoldOptions, Grouping, Summary, aggregate_str};
use trialplot_render::{TableConfig, render_table};

fuzz_target!(|data: &[u8]| {
    // Skip overly large inputs
    if data.len() > 100_000 {
        return;
    }

    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // === Test: aggregation may fail but must not panic ===
    let Ok(aggregation) = aggregate_str(input) else {
        return;
    };

    let buckets = aggregation.buckets.iter().count();
    for grouping in [Grouping::Merged, Grouping::SplitByM] {
        let options = FoldOptions {
            grouping,
            sort_by_x: false,
        };
        let summary = Summary::fold(&aggregation.buckets, options);

        // === Contract: every bucket is either plotted or counted as overwritten ===
        let points: usize = summary.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(points + summary.overwrites(), buckets);

        // === Contract: table has a header, a separator, and one row per series ===
        let table = render_table(&summary, &TableConfig::default());
        // Quoted metric names may carry line breaks of their own
        if summary.iter().all(|(name, _)| !name.contains('\n')) {
            assert_eq!(table.lines().count(), summary.len() + 2);
        }
    }
});
