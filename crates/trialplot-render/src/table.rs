// SPDX-License-Identifier: MIT OR Apache-2.0
//! Markdown summary table.
//!
//! The header lists every x-coordinate after an empty corner cell, followed by
//! a dash separator and one row of scaled centers per series:
//!
//! ```text
//! | | 4 | 16 |
//! |---|---|---|
//! | time | 0.00 | 1.25 |
//! ```

use std::io::{self, Write};
use trialplot_core::{Series, Summary};

/// Table formatting options
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Divisor applied to each center before printing
    pub scale: f64,
    /// Digits after the decimal point
    pub precision: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            scale: 1_000_000.0,
            precision: 2,
        }
    }
}

/// Writer for one table, fixed to the columns of a summary
#[derive(Debug, Clone)]
pub struct MarkdownTable<'a> {
    columns: Vec<f64>,
    config: &'a TableConfig,
}

impl<'a> MarkdownTable<'a> {
    /// Lay out columns from every x-coordinate in `summary`
    #[must_use]
    pub fn new(summary: &Summary, config: &'a TableConfig) -> Self {
        Self {
            columns: summary.x_coordinates(),
            config,
        }
    }

    /// X-coordinates in column order
    #[must_use]
    pub fn columns(&self) -> &[f64] {
        &self.columns
    }

    /// Write the header and separator rows
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_header<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "| |")?;
        for x in &self.columns {
            // Integer columns truncate toward zero
            write!(out, " {:.0} |", x.trunc())?;
        }
        writeln!(out)?;
        write!(out, "|---|")?;
        for _ in &self.columns {
            write!(out, "---|")?;
        }
        writeln!(out)
    }

    /// Write one series row; columns the series lacks stay empty
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_row<W: Write + ?Sized>(
        &self,
        out: &mut W,
        name: &str,
        series: &Series,
    ) -> io::Result<()> {
        write!(out, "| {name} |")?;
        for &x in &self.columns {
            match series.get(x) {
                Some(point) => write!(
                    out,
                    " {:.*} |",
                    self.config.precision,
                    point.center / self.config.scale
                )?,
                None => write!(out, " |")?,
            }
        }
        writeln!(out)
    }
}

/// Render the whole table into a string
#[must_use]
pub fn render_table(summary: &Summary, config: &TableConfig) -> String {
    let table = MarkdownTable::new(summary, config);
    let mut out = Vec::new();
    // Writes into a Vec cannot fail
    let _ = table.write_header(&mut out);
    for (name, series) in summary.iter() {
        let _ = table.write_row(&mut out, name, series);
    }
    String::from_utf8_lossy(&out).into_owned()
}
