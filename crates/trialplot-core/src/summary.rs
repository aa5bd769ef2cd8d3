// SPDX-License-Identifier: MIT OR Apache-2.0
//! Folding trial buckets into per-metric summary points.
//!
//! Each bucket becomes one `(low, center, high)` point at `x = n * r`.
//! `center` is the mean throughput and `low`/`high` are the non-negative
//! distances from the mean down to the minimum and up to the maximum, ready
//! to be drawn as asymmetric error bars.
//!
//! With [`Grouping::Merged`] the `m` dimension does not take part in the
//! x-coordinate, so two keys differing only in `m` collide and the one folded
//! last replaces the other. Those replacements are counted in
//! [`Summary::overwrites`].

use crate::bucket::TrialBuckets;
use crate::coord::{Coord, SizeKey};
use indexmap::{IndexMap, IndexSet};
use tracing::{info, warn};

/// Aggregated error-bar point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryPoint {
    /// Distance from `center` down to the smallest sample, floored at zero
    pub low: f64,
    /// Mean of the samples
    pub center: f64,
    /// Distance from `center` up to the largest sample, floored at zero
    pub high: f64,
}

impl SummaryPoint {
    /// Summarize a non-empty sample; `None` for an empty one
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let center = values.iter().sum::<f64>() / values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            low: (center - min).max(0.0),
            center,
            high: (max - center).max(0.0),
        })
    }

    /// Bottom of the error bar
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.center - self.low
    }

    /// Top of the error bar
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.center + self.high
    }
}

/// How size keys map onto series and x-coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One series per metric at `x = n * r`; colliding keys overwrite
    #[default]
    Merged,
    /// One series per metric and `m` value; only keys sharing both `m` and
    /// `n * r` still collide
    SplitByM,
}

/// Options for [`Summary::fold`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldOptions {
    /// Series grouping
    pub grouping: Grouping,
    /// Order x-coordinates numerically instead of by first insertion
    pub sort_by_x: bool,
}

/// Points of a single series keyed by x-coordinate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: IndexMap<Coord, SummaryPoint>,
}

impl Series {
    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `x`
    #[must_use]
    pub fn get(&self, x: f64) -> Option<&SummaryPoint> {
        self.points.get(&Coord::new(x))
    }

    /// Points in plotting order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &SummaryPoint)> + '_ {
        self.points.iter().map(|(x, p)| (x.get(), p))
    }

    fn sort_by_x(&mut self) {
        self.points.sort_by(|a, _, b, _| a.get().total_cmp(&b.get()));
    }
}

/// Summary points for every series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    series: IndexMap<String, Series>,
    overwrites: usize,
}

impl Summary {
    /// Fold trial buckets into summary points
    #[must_use]
    pub fn fold(buckets: &TrialBuckets, options: FoldOptions) -> Self {
        let mut summary = Self::default();
        for (key, metric, values) in buckets.iter() {
            let Some(point) = SummaryPoint::from_values(values) else {
                continue;
            };
            let name = match options.grouping {
                Grouping::Merged => metric.to_owned(),
                Grouping::SplitByM => format!("{metric} (m={})", key.m),
            };
            summary.insert(name, key, point);
        }
        if options.sort_by_x {
            summary.sort_by_x();
        }
        info!(
            series = summary.series.len(),
            overwrites = summary.overwrites,
            "folded summary"
        );
        summary
    }

    fn insert(&mut self, name: String, key: SizeKey, point: SummaryPoint) {
        let x = key.x();
        let series = self.series.entry(name).or_default();
        if series.points.insert(x, point).is_some() {
            self.overwrites += 1;
            warn!(
                %key,
                x = x.get(),
                "summary point replaced by a later key with the same n * r"
            );
        }
    }

    /// Number of series
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether there are no series
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    /// Series in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> + '_ {
        self.series.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// How many points were replaced by a colliding key
    #[must_use]
    pub const fn overwrites(&self) -> usize {
        self.overwrites
    }

    /// Order every series by x-coordinate
    pub fn sort_by_x(&mut self) {
        for series in self.series.values_mut() {
            series.sort_by_x();
        }
    }

    /// Union of x-coordinates over all series, first occurrence first
    #[must_use]
    pub fn x_coordinates(&self) -> Vec<f64> {
        let mut seen: IndexSet<Coord> = IndexSet::new();
        for series in self.series.values() {
            seen.extend(series.points.keys().copied());
        }
        seen.into_iter().map(Coord::get).collect()
    }
}
