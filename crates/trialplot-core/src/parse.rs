// SPDX-License-Identifier: MIT OR Apache-2.0
//! Record parsing and trial aggregation.
//!
//! Input is CSV with a single header row whose first cell is the literal `N`.
//! Every other row is numeric: three size dimensions `n, r, m` followed by one
//! measured value per metric column. Each value becomes a throughput sample
//! `n * r * m / value` in the bucket for its size key and metric.

use crate::bucket::TrialBuckets;
use crate::coord::SizeKey;
use crate::error::{Result, TrialError};
use std::io::Read;
use tracing::{debug, info, trace};

/// First cell of the header row
pub const HEADER_MARKER: &str = "N";

/// Number of leading size columns (`n`, `r`, `m`)
pub const KEY_COLUMNS: usize = 3;

/// Column names declared by the `N` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    line: u64,
}

impl Header {
    /// Build a header from its trimmed cells, marker included
    #[must_use]
    pub fn new(names: Vec<String>, line: u64) -> Self {
        Self { names, line }
    }

    /// Number of cells, marker included
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the header has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Line the header was read from
    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }

    /// Metric names, first occurrence only, in column order
    #[must_use]
    pub fn metric_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for name in self.names.iter().skip(KEY_COLUMNS) {
            if !seen.contains(&name.as_str()) {
                seen.push(name);
            }
        }
        seen
    }
}

/// Result of a complete aggregation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Header row, if the input had one
    pub header: Option<Header>,
    /// Trial buckets built from every data row
    pub buckets: TrialBuckets,
    /// Number of data rows consumed
    pub rows: usize,
}

/// Incremental aggregator over parsed records
#[derive(Debug, Default)]
pub struct Aggregator {
    header: Option<Header>,
    buckets: TrialBuckets,
    rows: usize,
}

impl Aggregator {
    /// Create an aggregator with no header and empty buckets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one record.
    ///
    /// A data row is validated in full before any of its values are recorded,
    /// so a failing row leaves the buckets untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TrialError::MissingHeader`] for any row before the header,
    /// [`TrialError::DuplicateHeader`] for a second header,
    /// [`TrialError::Parse`] for non-numeric cells,
    /// [`TrialError::TooFewColumns`] for rows without a metric value, and
    /// [`TrialError::UnnamedColumn`] for rows wider than the header.
    pub fn push_record<'a, I>(&mut self, line: u64, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().map(str::trim).collect();

        if fields.first() == Some(&HEADER_MARKER) {
            if let Some(first) = &self.header {
                return Err(TrialError::DuplicateHeader {
                    line,
                    first_line: first.line,
                });
            }
            debug!(line, columns = fields.len(), "header row");
            self.header = Some(Header::new(
                fields.iter().map(|&f| f.to_owned()).collect(),
                line,
            ));
            return Ok(());
        }

        let Some(header) = self.header.as_ref() else {
            return Err(TrialError::MissingHeader { line });
        };

        let values = fields
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|_| TrialError::Parse {
                    line,
                    column,
                    value: (*field).to_owned(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() <= KEY_COLUMNS {
            return Err(TrialError::TooFewColumns {
                line,
                found: values.len(),
            });
        }

        if values.len() > header.len() {
            return Err(TrialError::UnnamedColumn {
                line,
                column: header.len(),
                header_len: header.len(),
            });
        }

        let key = SizeKey::new(values[0], values[1], values[2]);
        let ops = key.ops();
        for (metric, &value) in header.names.iter().zip(&values).skip(KEY_COLUMNS) {
            trace!(line, %key, metric = metric.as_str(), value, "trial");
            self.buckets.push(key, metric, ops / value);
        }
        self.rows += 1;
        Ok(())
    }

    /// Finish the pass
    #[must_use]
    pub fn finish(self) -> Aggregation {
        info!(
            rows = self.rows,
            keys = self.buckets.key_count(),
            "aggregated trials"
        );
        Aggregation {
            header: self.header,
            buckets: self.buckets,
            rows: self.rows,
        }
    }
}

/// Aggregate every record of a CSV stream.
///
/// Fields are trimmed and rows may differ in width; blank lines are skipped.
///
/// # Errors
///
/// Returns the first framing, I/O, or record error; see
/// [`Aggregator::push_record`].
pub fn aggregate_reader<R: Read>(reader: R) -> Result<Aggregation> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut aggregator = Aggregator::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        aggregator.push_record(line, record.iter())?;
    }
    Ok(aggregator.finish())
}

/// Aggregate CSV text held in memory
///
/// # Errors
///
/// See [`aggregate_reader`].
pub fn aggregate_str(input: &str) -> Result<Aggregation> {
    aggregate_reader(input.as_bytes())
}
