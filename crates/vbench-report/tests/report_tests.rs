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


//! End-to-end tests: result table to rendered report and chart.

use vbench_core::{extract, select_by_key, ResultRow, ResultTable, Selection, TableShape};
use vbench_report::{
    export, render, render_chart, ChartConfig, ChartPanel, ReportFormat, SummaryReport,
};

const FILENAME: &str = "1-ST-CPU_dim_960_nb_1000000_m_16_ef_200_latencies.csv";

fn sweep_table() -> ResultTable {
    ResultTable::new(
        TableShape::top_k_sweep(),
        (1..=6).map(|i| format!("iter{} (us)", i)).collect(),
        vec![
            ResultRow::new(10, vec![5000.0, 4000.0, 100.0, 120.0, 110.0, 130.0], Some(0.91)),
            ResultRow::new(50, vec![5000.0, 4000.0, 200.0, 220.0, 210.0, 230.0], Some(0.95)),
            ResultRow::new(100, vec![5000.0, 4000.0, 300.0, 320.0, 310.0, 330.0], Some(0.98)),
        ],
    )
    .unwrap()
}

#[test]
fn test_text_report_excludes_warmup() {
    let params = extract(FILENAME).unwrap();
    let report = SummaryReport::from_table(params, &sweep_table(), 2).unwrap();
    let text = render(&report, ReportFormat::Text).unwrap();

    assert!(text.starts_with("dim=960 nb=1000000 m=16 ef=200 K=100 (default) (warmup 2)"));
    assert!(text.contains("top k"));
    // mean of 200, 220, 210, 230
    assert!(text.contains("215.000"));
    assert!(!text.contains("5000.000"));
}

#[test]
fn test_every_format_renders() {
    let params = extract(FILENAME).unwrap();
    let report = SummaryReport::from_table(params, &sweep_table(), 2).unwrap();

    for format in [ReportFormat::Text, ReportFormat::Json, ReportFormat::Markdown] {
        let out = render(&report, format).unwrap();
        assert!(out.contains("100"), "{} output lacks the last key", format);
    }

    let json = render(&report, ReportFormat::Json).unwrap();
    let back: SummaryReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_export_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.md");
    let params = extract(FILENAME).unwrap();
    let report = SummaryReport::from_table(params, &sweep_table(), 2).unwrap();

    export(&report, ReportFormat::Markdown, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("| top k |"));
}

#[test]
fn test_chart_for_selected_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.svg");
    let params = extract(FILENAME).unwrap();
    let table = sweep_table();

    let selection = select_by_key(&table, &[50, 999, 10]).unwrap();
    let panels: Vec<ChartPanel> = Selection::found_rows(&selection)
        .into_iter()
        .map(|row| ChartPanel::from_row(row, 2, table.key_column(), &params).unwrap())
        .collect();
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].title, "top k 50, warmup 2");
    assert_eq!(panels[0].y_ceiling(200.0), 430.0);

    render_chart(&path, &panels, &ChartConfig::default()).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("top k 10, warmup 2"));
}
