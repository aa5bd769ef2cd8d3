// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors raised while reading and aggregating trial records.
///
/// Every variant is fatal: aggregation stops at the first error and no
/// partial result is returned.
#[derive(Error, Debug)]
pub enum TrialError {
    /// A field is neither the `N` marker nor a floating-point number
    #[error("line {line}, column {column}: cannot parse {value:?} as a number")]
    Parse {
        /// 1-based input line
        line: u64,
        /// 0-based column index
        column: usize,
        /// The offending field, trimmed
        value: String,
    },
    /// A data row appeared before the `N` marker row
    #[error("line {line}: data row appears before the `N` header row")]
    MissingHeader {
        /// 1-based input line
        line: u64,
    },
    /// A second `N` marker row appeared
    #[error("line {line}: duplicate `N` header row (first header on line {first_line})")]
    DuplicateHeader {
        /// 1-based input line of the duplicate
        line: u64,
        /// 1-based input line of the accepted header
        first_line: u64,
    },
    /// A data row carries fewer than the three size dimensions plus one metric
    #[error("line {line}: expected at least 4 columns, found {found}")]
    TooFewColumns {
        /// 1-based input line
        line: u64,
        /// Number of fields in the row
        found: usize,
    },
    /// A data row has a value column the header does not name
    #[error("line {line}: column {column} has no name in a {header_len}-column header")]
    UnnamedColumn {
        /// 1-based input line
        line: u64,
        /// 0-based column index
        column: usize,
        /// Number of header cells
        header_len: usize,
    },
    /// Malformed CSV framing
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// Input could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for trial aggregation
pub type Result<T> = std::result::Result<T, TrialError>;
