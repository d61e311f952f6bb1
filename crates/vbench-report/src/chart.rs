// Dweve VBENCH - Vector search benchmark analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-row latency trace charts.
//!
//! One SVG image per invocation: a vertical stack of panels, one per
//! selected row, each plotting the post-warmup latency samples against the
//! run number. Every panel's y axis starts at zero and ends
//! [`CHART_Y_MARGIN_US`] above the panel's largest sample.

use crate::error::{ReportError, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;
use vbench_core::{AnalysisError, ResultRow, RunParameters};

/// Headroom above the largest plotted sample, in microseconds.
pub const CHART_Y_MARGIN_US: f64 = 200.0;

/// Default chart file name.
pub const DEFAULT_CHART_FILE: &str = "output.svg";

const CAPTION_FONT_SIZE: u32 = 18;
const LABEL_FONT_SIZE: u32 = 14;
const TRACE_COLOR: RGBColor = RGBColor(66, 133, 244);

/// Chart geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Height of each panel in pixels.
    pub panel_height: u32,
    /// Headroom above the largest sample (us).
    pub y_margin: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            panel_height: 300,
            y_margin: CHART_Y_MARGIN_US,
        }
    }
}

/// One chart panel: a titled latency trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    /// Panel caption.
    pub title: String,
    /// Run number of the first plotted sample (1-based).
    pub first_run: usize,
    /// Plotted samples (us).
    pub samples: Vec<f64>,
}

impl ChartPanel {
    /// Build the panel for `row`, dropping the first `warmup` samples.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientSamples`] when nothing is left
    /// to plot.
    pub fn from_row(
        row: &ResultRow,
        warmup: usize,
        key_column: &str,
        params: &RunParameters,
    ) -> vbench_core::Result<Self> {
        let window = row.window(warmup);
        if window.is_empty() {
            return Err(AnalysisError::InsufficientSamples {
                key: row.key,
                warmup,
                available: row.samples.len(),
            });
        }

        let label = match key_column {
            "k" => "top k",
            "id" => "run id",
            other => other,
        };
        let title = if key_column == "k" {
            format!("{} {}, warmup {}", label, row.key, warmup)
        } else {
            format!(
                "{} {}, K {}, warmup {}",
                label,
                row.key,
                params.top_k_or_default(),
                warmup
            )
        };

        Ok(Self {
            title,
            first_run: warmup + 1,
            samples: window.to_vec(),
        })
    }

    /// Largest plotted sample.
    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    /// Upper bound of the panel's y axis.
    pub fn y_ceiling(&self, margin: f64) -> f64 {
        self.max() + margin
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &s)| ((self.first_run + i) as f64, s))
            .collect()
    }

    fn x_range(&self) -> std::ops::Range<f64> {
        let start = self.first_run as f64;
        let end = (self.first_run + self.samples.len() - 1).max(self.first_run + 1) as f64;
        start..end
    }
}

/// Render `panels` as a stacked SVG chart at `path`.
///
/// An empty panel list still produces an image, captioned
/// "no rows selected".
pub fn render_chart(path: &Path, panels: &[ChartPanel], config: &ChartConfig) -> Result<()> {
    let height = config.panel_height * panels.len().max(1) as u32;
    let root = SVGBackend::new(path, (config.width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(ReportError::chart)?;

    if panels.is_empty() {
        root.titled("no rows selected", ("sans-serif", CAPTION_FONT_SIZE))
            .map_err(ReportError::chart)?;
    } else {
        let areas = root.split_evenly((panels.len(), 1));
        for (area, panel) in areas.iter().zip(panels) {
            draw_panel(area, panel, config)?;
        }
    }

    root.present().map_err(ReportError::chart)?;
    info!(path = %path.display(), panels = panels.len(), "chart written");
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    panel: &ChartPanel,
    config: &ChartConfig,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(panel.x_range(), 0.0..panel.y_ceiling(config.y_margin))
        .map_err(ReportError::chart)?;

    chart
        .configure_mesh()
        .x_desc("run")
        .y_desc("time (us)")
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()
        .map_err(ReportError::chart)?;

    chart
        .draw_series(LineSeries::new(panel.points(), TRACE_COLOR.stroke_width(2)))
        .map_err(ReportError::chart)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RunParameters {
        RunParameters {
            dim: 960,
            nb: 1000,
            m: 16,
            ef: 200,
            top_k: Some(10),
        }
    }

    #[test]
    fn test_panel_from_row() {
        let row = ResultRow::new(50, vec![9000.0, 100.0, 300.0, 200.0], Some(0.9));
        let panel = ChartPanel::from_row(&row, 1, "k", &params()).unwrap();
        assert_eq!(panel.title, "top k 50, warmup 1");
        assert_eq!(panel.first_run, 2);
        assert_eq!(panel.samples, vec![100.0, 300.0, 200.0]);
        assert_eq!(panel.max(), 300.0);
        assert_eq!(panel.y_ceiling(CHART_Y_MARGIN_US), 500.0);
        assert_eq!(panel.points()[0], (2.0, 100.0));
        assert_eq!(panel.x_range(), 2.0..4.0);
    }

    #[test]
    fn test_panel_title_for_run_ids() {
        let row = ResultRow::new(3, vec![1.0, 2.0], Some(1.0));
        let panel = ChartPanel::from_row(&row, 0, "id", &params()).unwrap();
        assert_eq!(panel.title, "run id 3, K 10, warmup 0");
    }

    #[test]
    fn test_single_sample_x_range_not_empty() {
        let row = ResultRow::new(3, vec![1.0, 2.0], None);
        let panel = ChartPanel::from_row(&row, 1, "id", &params()).unwrap();
        assert_eq!(panel.x_range(), 2.0..3.0);
    }

    #[test]
    fn test_panel_requires_samples() {
        let row = ResultRow::new(3, vec![1.0, 2.0], None);
        assert!(matches!(
            ChartPanel::from_row(&row, 2, "id", &params()),
            Err(AnalysisError::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn test_render_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CHART_FILE);
        let panels = vec![
            ChartPanel::from_row(
                &ResultRow::new(10, vec![900.0, 120.0, 110.0, 130.0], Some(0.9)),
                1,
                "k",
                &params(),
            )
            .unwrap(),
            ChartPanel::from_row(
                &ResultRow::new(50, vec![950.0, 220.0, 210.0, 230.0], Some(0.95)),
                1,
                "k",
                &params(),
            )
            .unwrap(),
        ];

        render_chart(&path, &panels, &ChartConfig::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("top k 50, warmup 1"));
    }

    #[test]
    fn test_render_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        render_chart(&path, &[], &ChartConfig::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("no rows selected"));
    }
}
