// SPDX-License-Identifier: MIT OR Apache-2.0
//! Command-line options and their mapping onto library configuration.

use crate::output::ChartTarget;
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use trialplot_core::{FoldOptions, Grouping};
use trialplot_render::{ChartConfig, Presenter, TableConfig};

/// Plot throughput across repeated benchmark trials
#[derive(Parser, Debug, Clone)]
#[command(name = "trialplot")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// SVG output file (writes to stdout if not provided)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// CSV input file (reads from stdin if not provided)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print a Markdown table of mean throughput (millions) before the chart
    #[arg(short = 't', long = "table")]
    pub table: bool,

    /// Order x-coordinates numerically instead of by first appearance
    #[arg(long = "sort")]
    pub sort: bool,

    /// Draw one series per metric and m value instead of merging m
    #[arg(long = "split-by-m")]
    pub split_by_m: bool,

    /// Chart width in pixels
    #[arg(long = "width", default_value = "640")]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long = "height", default_value = "480")]
    pub height: u32,

    /// Chart caption
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Default log level; `RUST_LOG` takes precedence
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Where the chart goes
    #[must_use]
    pub fn chart_target(&self) -> ChartTarget {
        self.output
            .clone()
            .map_or(ChartTarget::Stdout, ChartTarget::File)
    }

    /// Fold options selected by the flags
    #[must_use]
    pub const fn fold_options(&self) -> FoldOptions {
        FoldOptions {
            grouping: if self.split_by_m {
                Grouping::SplitByM
            } else {
                Grouping::Merged
            },
            sort_by_x: self.sort,
        }
    }

    /// Presenter configured by the flags
    #[must_use]
    pub fn presenter(&self) -> Presenter {
        let chart = ChartConfig {
            width: self.width,
            height: self.height,
            title: self.title.clone(),
            ..ChartConfig::default()
        };
        let presenter = Presenter::new(chart);
        if self.table {
            presenter.with_table(TableConfig::default())
        } else {
            presenter
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["trialplot"]).unwrap();
        assert_eq!(args.chart_target(), ChartTarget::Stdout);
        assert!(args.input.is_none());
        assert_eq!(args.log_level, LevelFilter::WARN);

        let fold = args.fold_options();
        assert_eq!(fold.grouping, Grouping::Merged);
        assert!(!fold.sort_by_x);

        let presenter = args.presenter();
        assert_eq!(presenter.chart_config(), &ChartConfig::default());
        assert!(presenter.table_config().is_none());
    }

    #[test]
    fn test_output_path() {
        let args = Args::try_parse_from(["trialplot", "out.svg"]).unwrap();
        assert_eq!(args.chart_target(), ChartTarget::File(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "trialplot",
            "--table",
            "--sort",
            "--split-by-m",
            "--width",
            "800",
            "--height",
            "600",
            "--title",
            "cycles",
            "--log-level",
            "debug",
            "-i",
            "data.csv",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("data.csv")));
        assert_eq!(args.log_level, LevelFilter::DEBUG);

        let fold = args.fold_options();
        assert_eq!(fold.grouping, Grouping::SplitByM);
        assert!(fold.sort_by_x);

        let presenter = args.presenter();
        let chart = presenter.chart_config();
        assert_eq!((chart.width, chart.height), (800, 600));
        assert_eq!(chart.title.as_deref(), Some("cycles"));
        assert_eq!(presenter.table_config(), Some(&TableConfig::default()));
    }

    #[test]
    fn test_at_most_one_output() {
        assert!(Args::try_parse_from(["trialplot", "a.svg", "b.svg"]).is_err());
    }

    #[test]
    fn test_bad_log_level() {
        assert!(Args::try_parse_from(["trialplot", "--log-level", "loud"]).is_err());
    }
}
