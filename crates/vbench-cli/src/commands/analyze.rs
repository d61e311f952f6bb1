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


//! Analyze command - statistics report and latency chart for one result file

use super::{check_file_size, write_stdout};
use crate::error::CliError;
use std::path::PathBuf;
use tracing::info;
use vbench_core::{select_by_key, AnalysisConfig, MetadataSource, ResultRow, Selection};
use vbench_csv::{load_with_config, LoadConfig};
use vbench_report::{export, render, render_chart, ChartConfig, ChartPanel, ReportFormat, SummaryReport};

/// Which rows go into the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySelection {
    /// Rows with these keys, in this order. Unknown keys are skipped.
    Keys(Vec<i64>),
    /// Every row, in table order.
    All,
}

/// Everything one `analyze` invocation needs.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Result table to load.
    pub file: PathBuf,
    /// Where the run parameters come from.
    pub metadata: MetadataSource,
    /// Warmup and table shape.
    pub config: AnalysisConfig,
    /// Rows to chart.
    pub keys: KeySelection,
    /// Chart path, `None` to skip charting.
    pub chart: Option<PathBuf>,
    /// Report format.
    pub format: ReportFormat,
    /// Report path, `None` for stdout.
    pub output: Option<PathBuf>,
}

/// Run the full pipeline: parameters, load, select, summarise, chart, report.
///
/// Nothing is written unless every stage succeeds up to the chart, so a
/// failed invocation leaves no partial report behind.
///
/// # Errors
///
/// Returns the first fatal analysis error (missing parameter, missing or
/// malformed file, duplicate key, insufficient samples) or an output error.
/// Requested keys absent from the table are logged and skipped.
pub fn analyze(options: &AnalyzeOptions) -> Result<(), CliError> {
    let params = options.metadata.resolve()?;
    info!(%params, "run parameters");

    check_file_size(&options.file)?;
    let table = load_with_config(&options.file, &options.config.shape, &LoadConfig::default())?;
    let warmup = options.config.warmup;

    let rows: Vec<&ResultRow> = match &options.keys {
        KeySelection::All => table.rows().iter().collect(),
        KeySelection::Keys(keys) => {
            let selection = select_by_key(&table, keys)?;
            Selection::found_rows(&selection)
        }
    };

    let report = SummaryReport::from_table(params, &table, warmup)?;

    if let Some(path) = &options.chart {
        let panels = rows
            .iter()
            .map(|row| {
                info!(
                    key = row.key,
                    warmup,
                    "charting {} {}",
                    table.key_column(),
                    row.key
                );
                ChartPanel::from_row(row, warmup, table.key_column(), &params)
            })
            .collect::<vbench_core::Result<Vec<_>>>()?;
        render_chart(path, &panels, &ChartConfig::default())?;
    }

    match &options.output {
        Some(path) => {
            export(&report, options.format, path)?;
            info!(path = %path.display(), format = %options.format, "report written");
            Ok(())
        }
        None => write_stdout(&render(&report, options.format)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use vbench_core::{AnalysisError, TableShape};

    const NAME: &str = "1-ST-CPU_dim_4_nb_100_m_8_ef_32_latencies.csv";

    fn write_table(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(NAME);
        fs::write(&path, body).unwrap();
        path
    }

    fn options(file: PathBuf, dir: &Path, warmup: usize, keys: KeySelection) -> AnalyzeOptions {
        AnalyzeOptions {
            metadata: MetadataSource::Filename(file.clone()),
            file,
            config: AnalysisConfig::default()
                .with_warmup(warmup)
                .with_shape(TableShape::top_k_sweep()),
            keys,
            chart: Some(dir.join("output.svg")),
            format: ReportFormat::Json,
            output: Some(dir.join("report.json")),
        }
    }

    #[test]
    fn test_analyze_writes_report_and_chart() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_table(
            dir.path(),
            "k, iter1 (us), iter2 (us), iter3 (us), recall (%)\n\
             10, 900, 100, 120, 0.9\n\
             50, 950, 200, 220, 0.95\n",
        );

        analyze(&options(file, dir.path(), 1, KeySelection::Keys(vec![50, 7]))).unwrap();

        let report: SummaryReport =
            serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
                .unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].mean, 210.0);
        assert!(fs::read_to_string(dir.path().join("output.svg"))
            .unwrap()
            .contains("top k 50, warmup 1"));
    }

    #[test]
    fn test_analyze_warmup_too_large_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_table(dir.path(), "k, a, b, recall\n10, 1, 2, 0.5\n");

        let err = analyze(&options(file, dir.path(), 2, KeySelection::All)).unwrap_err();

        assert!(matches!(
            err,
            CliError::Analysis(AnalysisError::InsufficientSamples { .. })
        ));
        assert!(!dir.path().join("output.svg").exists());
        assert!(!dir.path().join("report.json").exists());
    }

    #[test]
    fn test_analyze_duplicate_key() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_table(dir.path(), "k, a, recall\n10, 1, 0.5\n10, 2, 0.5\n");

        let err = analyze(&options(file, dir.path(), 0, KeySelection::Keys(vec![10]))).unwrap_err();

        assert!(matches!(
            err,
            CliError::Analysis(AnalysisError::DuplicateKey { key: 10, count: 2 })
        ));
    }
}
