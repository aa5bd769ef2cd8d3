// SPDX-License-Identifier: MIT OR Apache-2.0
//! Trial buckets: raw throughput values grouped by size key and metric.
//!
//! Buckets nest one ordered map per dimension (`n`, then `r`, then `m`) and a
//! final map from metric name to the values seen for it. Every level keeps
//! first-insertion order, which is the order the fold step walks them in.

use crate::coord::{Coord, SizeKey};
use indexmap::IndexMap;

/// Raw values per metric name for a single size key
pub type MetricValues = IndexMap<String, Vec<f64>>;

type ByM = IndexMap<Coord, MetricValues>;
type ByR = IndexMap<Coord, ByM>;

/// Ordered nested mapping `n -> r -> m -> metric -> values`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialBuckets {
    by_n: IndexMap<Coord, ByR>,
}

impl TrialBuckets {
    /// Create empty buckets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one throughput value, creating intermediate levels on first use
    pub fn push(&mut self, key: SizeKey, metric: &str, value: f64) {
        let metrics = self
            .by_n
            .entry(key.n)
            .or_default()
            .entry(key.r)
            .or_default()
            .entry(key.m)
            .or_default();
        if let Some(values) = metrics.get_mut(metric) {
            values.push(value);
        } else {
            metrics.insert(metric.to_owned(), vec![value]);
        }
    }

    /// Values recorded for `metric` under `key`
    #[must_use]
    pub fn get(&self, key: &SizeKey, metric: &str) -> Option<&[f64]> {
        self.by_n
            .get(&key.n)?
            .get(&key.r)?
            .get(&key.m)?
            .get(metric)
            .map(Vec::as_slice)
    }

    /// Number of distinct size keys
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.by_n
            .values()
            .flat_map(IndexMap::values)
            .map(IndexMap::len)
            .sum()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_n.is_empty()
    }

    /// Walk every `(key, metric, values)` bucket in nested insertion order
    pub fn iter(&self) -> impl Iterator<Item = (SizeKey, &str, &[f64])> + '_ {
        self.by_n.iter().flat_map(|(&n, by_r)| {
            by_r.iter().flat_map(move |(&r, by_m)| {
                by_m.iter().flat_map(move |(&m, metrics)| {
                    metrics.iter().map(move |(name, values)| {
                        (SizeKey { n, r, m }, name.as_str(), values.as_slice())
                    })
                })
            })
        })
    }
}
