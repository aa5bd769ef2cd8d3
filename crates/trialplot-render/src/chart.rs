// SPDX-License-Identifier: MIT OR Apache-2.0
//! SVG error-bar chart.
//!
//! Every series is drawn as a line through its centers with an asymmetric
//! vertical error bar at each point. The x-axis is logarithmic, so points at
//! `x <= 0` cannot be placed and are left out of the drawing.

use crate::error::Result;
use plotters::prelude::*;
use plotters::style::{Palette, Palette99};
use std::ops::Range;
use tracing::debug;
use trialplot_core::{Series, Summary};

/// Chart layout options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Caption drawn above the plot
    pub title: Option<String>,
    /// X-axis description
    pub x_desc: String,
    /// Y-axis description
    pub y_desc: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: None,
            x_desc: "n * r".to_string(),
            y_desc: "ops / unit".to_string(),
        }
    }
}

const ERROR_BAR_WIDTH: u32 = 8;
const LEGEND_LINE: i32 = 20;

/// A chart bound to one summary for a single render call
#[derive(Debug, Clone, Copy)]
pub struct Chart<'a> {
    config: &'a ChartConfig,
    summary: &'a Summary,
}

impl<'a> Chart<'a> {
    /// Bind a configuration to the summary to draw
    #[must_use]
    pub const fn new(config: &'a ChartConfig, summary: &'a Summary) -> Self {
        Self { config, summary }
    }

    /// Draw the chart and return the finished SVG document
    ///
    /// # Errors
    ///
    /// Returns a chart error if the backend fails.
    pub fn render(&self) -> Result<String> {
        self.render_with(|_, _| Ok(()))
    }

    /// Draw the chart, calling `before_series` ahead of each series.
    ///
    /// The legend is drawn and the document finalized only after every series
    /// has been added.
    ///
    /// # Errors
    ///
    /// Returns the first error from `before_series` or the backend.
    pub fn render_with<F>(&self, mut before_series: F) -> Result<String>
    where
        F: FnMut(&str, &Series) -> Result<()>,
    {
        let mut svg = String::new();
        {
            let size = (self.config.width, self.config.height);
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE)?;

            let (x_range, y_range) = bounds(self.summary);
            let mut builder = ChartBuilder::on(&root);
            builder
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(70);
            if let Some(title) = &self.config.title {
                builder.caption(title, ("sans-serif", 20));
            }
            let mut chart = builder.build_cartesian_2d(x_range.log_scale(), y_range)?;

            chart
                .configure_mesh()
                .x_desc(self.config.x_desc.as_str())
                .y_desc(self.config.y_desc.as_str())
                .x_label_formatter(&integer_label)
                .draw()?;

            for (index, (name, series)) in self.summary.iter().enumerate() {
                before_series(name, series)?;

                let color = Palette99::pick(index).to_rgba();
                let points: Vec<(f64, f64, f64, f64)> = series
                    .iter()
                    .filter(|(x, _)| *x > 0.0 && x.is_finite())
                    .map(|(x, p)| (x, p.lower(), p.center, p.upper()))
                    .collect();
                debug!(series = name, points = points.len(), "drawing series");

                chart
                    .draw_series(LineSeries::new(
                        points.iter().map(|&(x, _, center, _)| (x, center)),
                        color.stroke_width(2),
                    ))?
                    .label(name)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + LEGEND_LINE, y)], color.stroke_width(2))
                    });
                chart.draw_series(points.iter().map(|&(x, lower, center, upper)| {
                    ErrorBar::new_vertical(x, lower, center, upper, color.filled(), ERROR_BAR_WIDTH)
                }))?;
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
            root.present()?;
        }
        Ok(svg)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn integer_label(x: &f64) -> String {
    format!("{:.0}", x.trunc())
}

/// Plot ranges covering every drawable point, padded on the log axis.
///
/// Both ranges stay finite; plotters cannot lay out a log axis ending at
/// infinity.
fn bounds(summary: &Summary) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max: f64 = 0.0;
    for (_, series) in summary.iter() {
        for (x, point) in series.iter() {
            if x > 0.0 && x.is_finite() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
            if point.upper().is_finite() {
                y_max = y_max.max(point.upper());
            }
        }
    }
    let x_range = if x_min.is_finite() {
        let start = x_min / 2.0;
        let start = if start > 0.0 { start } else { x_min };
        start..(x_max * 2.0).min(f64::MAX)
    } else {
        1.0..10.0
    };
    let y_max = if y_max > 0.0 {
        (y_max * 1.1).min(f64::MAX)
    } else {
        1.0
    };
    (x_range, 0.0..y_max)
}
