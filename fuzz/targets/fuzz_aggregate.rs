#![allow(clippy::all)]
#![allow(clippy::pedantic)]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! AFL fuzz target for trial aggregation.
//!
//! This target verifies that aggregation never panics and that folding the
//! same buckets twice gives identical summaries.
//!
//! Run with:
//!   cargo afl build --release --features afl-fuzz --bin `fuzz_aggregate`
//!   cargo afl fuzz -i fuzz/corpus/aggregate -o fuzz/output/aggregate target/release/`fuzz_aggregate`

#[macro_use]
extern crate afl;

use trialplot_cli::core::{FoldOptions, Summary, aggregate_str};

/// Aggregate, fold twice, and check the results agree bit for bit
fn verify_aggregation(input: &str) {
    let Ok(aggregation) = aggregate_str(input) else {
        return;
    };

    let first = Summary::fold(&aggregation.buckets, FoldOptions::default());
    let second = Summary::fold(&aggregation.buckets, FoldOptions::default());
    assert_eq!(first.len(), second.len(), "series count differs between folds");

    for ((name_a, a), (name_b, b)) in first.iter().zip(second.iter()) {
        assert_eq!(name_a, name_b, "series order differs between folds");
        for ((xa, pa), (xb, pb)) in a.iter().zip(b.iter()) {
            assert_eq!(xa.to_bits(), xb.to_bits());
            assert_eq!(pa.low.to_bits(), pb.low.to_bits());
            assert_eq!(pa.center.to_bits(), pb.center.to_bits());
            assert_eq!(pa.high.to_bits(), pb.high.to_bits());
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        // Skip extremely large inputs to avoid timeout
        if data.len() <= 100_000 {
            if let Ok(input) = std::str::from_utf8(data) {
                verify_aggregation(input);
            }
        }
    });
}
