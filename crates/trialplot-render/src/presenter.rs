// SPDX-License-Identifier: MIT OR Apache-2.0
//! Chart and table emission for one summary.

use crate::chart::{Chart, ChartConfig};
use crate::error::Result;
use crate::table::{MarkdownTable, TableConfig};
use std::io::Write;
use tracing::info;
use trialplot_core::Summary;

/// Renders a summary as an SVG chart, optionally preceded by a table
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    chart: ChartConfig,
    table: Option<TableConfig>,
}

impl Presenter {
    /// Chart-only presenter
    #[must_use]
    pub const fn new(chart: ChartConfig) -> Self {
        Self { chart, table: None }
    }

    /// Also print a Markdown table
    #[must_use]
    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.table = Some(table);
        self
    }

    /// Chart options
    #[must_use]
    pub const fn chart_config(&self) -> &ChartConfig {
        &self.chart
    }

    /// Table options, if a table is printed
    #[must_use]
    pub const fn table_config(&self) -> Option<&TableConfig> {
        self.table.as_ref()
    }

    /// Emit the table rows to `table_out` while series are added to the
    /// chart, then write the finished SVG to `chart_out`.
    ///
    /// # Errors
    ///
    /// Returns the first drawing or write failure. Nothing is written to
    /// `chart_out` unless the whole chart was drawn.
    pub fn present<T, C>(
        &self,
        summary: &Summary,
        table_out: &mut T,
        chart_out: &mut C,
    ) -> Result<()>
    where
        T: Write + ?Sized,
        C: Write + ?Sized,
    {
        let chart = Chart::new(&self.chart, summary);
        let svg = match &self.table {
            Some(config) => {
                let table = MarkdownTable::new(summary, config);
                table.write_header(&mut *table_out)?;
                let svg = chart.render_with(|name, series| {
                    table.write_row(&mut *table_out, name, series)?;
                    Ok(())
                })?;
                table_out.flush()?;
                svg
            }
            None => chart.render()?,
        };
        chart_out.write_all(svg.as_bytes())?;
        chart_out.flush()?;
        info!(
            series = summary.len(),
            bytes = svg.len(),
            table = self.table.is_some(),
            "chart written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trialplot_core::{FoldOptions, aggregate_str};

    fn summary(input: &str) -> Summary {
        Summary::fold(&aggregate_str(input).unwrap().buckets, FoldOptions::default())
    }

    #[test]
    fn test_chart_only() {
        let s = summary("N,R,M,t\n2,2,2,4\n");
        let mut table = Vec::new();
        let mut chart = Vec::new();
        Presenter::default()
            .present(&s, &mut table, &mut chart)
            .unwrap();
        assert!(table.is_empty());
        assert!(String::from_utf8(chart).unwrap().contains("</svg>"));
    }

    #[test]
    fn test_table_then_chart_on_one_stream() {
        let s = summary("N,R,M,a,b\n2,2,2,4,8\n4,2,2,4,8\n");
        let mut out = Vec::new();
        let mut sink = Vec::new();
        let presenter = Presenter::default().with_table(TableConfig::default());
        presenter.present(&s, &mut out, &mut sink).unwrap();
        out.extend_from_slice(&sink);

        let text = String::from_utf8(out).unwrap();
        let svg_at = text.find("<svg").unwrap();
        let table = &text[..svg_at];
        assert_eq!(table.lines().count(), 4);
        assert!(table.starts_with("| | 4 | 8 |\n|---|---|---|\n| a |"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unwritable_chart_target() {
        let s = summary("N,R,M,t\n1,1,1,1\n");
        let mut table = Vec::new();
        let err = Presenter::default()
            .present(&s, &mut table, &mut FailingWriter)
            .unwrap_err();
        assert!(matches!(err, crate::RenderError::Io(_)));
    }

    #[test]
    fn test_unwritable_table_stops_before_chart() {
        let s = summary("N,R,M,t\n1,1,1,1\n");
        let mut chart = Vec::new();
        let presenter = Presenter::default().with_table(TableConfig::default());
        assert!(presenter.present(&s, &mut FailingWriter, &mut chart).is_err());
        assert!(chart.is_empty());
    }
}
