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

//! Property-based tests for the analysis engine.
//!
//! - Token extraction is independent of token order and filler text,
//!   including filler glued directly to a token
//! - A missing required token is reported by name
//! - Statistics use exactly `len - warmup` samples
//! - Variance is non-negative and p95 never exceeds p99
//! - Row selection preserves the requested key order

use proptest::prelude::*;
use std::collections::BTreeSet;
use vbench_core::{
    extract, select_by_key, summarize, AnalysisError, ResultRow, ResultTable, Selection,
    TableShape,
};

// ===== Generators =====

/// Lowercase filler words without digits or underscores.
fn filler() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,6}").expect("Failed to create filler regex")
}

/// Lowercase filler that cannot complete a longer harness token
/// (`di` + `m_` reads as `dim_`, `search` + `ef_` as `searchef_`).
fn glue_filler() -> impl Strategy<Value = String> {
    filler().prop_filter("forms a longer token", |s| {
        !s.ends_with("di") && !s.ends_with("search")
    })
}

/// Glue each token directly to a filler word, then join with underscores.
fn build_glued_name(tokens: &[String], fillers: &[String]) -> String {
    let mut parts: Vec<String> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| format!("{}{}", fillers[i % fillers.len()], token))
        .collect();
    parts.push("latencies.csv".to_string());
    parts.join("_")
}

/// Finite latency samples.
fn samples() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1_000_000.0, 1..64)
}

/// Interleave `tokens` with filler words, joined by underscores.
fn build_name(tokens: &[String], fillers: &[String]) -> String {
    let mut parts = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        parts.push(fillers[i % fillers.len()].clone());
        parts.push(token.clone());
    }
    parts.push("latencies.csv".to_string());
    parts.join("_")
}

// ===== Metadata extraction =====

proptest! {
    #[test]
    fn prop_extract_is_order_independent(
        dim in 1u64..100_000,
        nb in 1u64..10_000_000,
        m in 1u64..256,
        ef in 1u64..4096,
        order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
        fillers in prop::collection::vec(filler(), 1..5),
    ) {
        let all = [
            format!("dim_{}", dim),
            format!("nb_{}", nb),
            format!("m_{}", m),
            format!("ef_{}", ef),
        ];
        let tokens: Vec<String> = order.iter().map(|&i| all[i].clone()).collect();
        let name = build_name(&tokens, &fillers);

        let params = extract(&name).unwrap();
        prop_assert_eq!(params.dim, dim);
        prop_assert_eq!(params.nb, nb);
        prop_assert_eq!(params.m, m);
        prop_assert_eq!(params.ef, ef);
        prop_assert_eq!(params.top_k, None);
    }

    #[test]
    fn prop_extract_finds_tokens_glued_to_text(
        dim in 1u64..100_000,
        nb in 1u64..10_000_000,
        m in 1u64..256,
        ef in 1u64..4096,
        k in 1u32..10_000,
        order in Just(vec![0usize, 1, 2, 3, 4]).prop_shuffle(),
        fillers in prop::collection::vec(glue_filler(), 1..5),
    ) {
        let all = [
            format!("dim_{}", dim),
            format!("nb_{}", nb),
            format!("m_{}", m),
            format!("ef_{}", ef),
            format!("K_{}", k),
        ];
        let tokens: Vec<String> = order.iter().map(|&i| all[i].clone()).collect();
        let name = build_glued_name(&tokens, &fillers);

        let params = extract(&name).unwrap();
        prop_assert_eq!(params.dim, dim);
        prop_assert_eq!(params.nb, nb);
        prop_assert_eq!(params.m, m);
        prop_assert_eq!(params.ef, ef);
        prop_assert_eq!(params.top_k, Some(k));
    }

    #[test]
    fn prop_extract_reports_missing_token(
        missing in 0usize..4,
        fillers in prop::collection::vec(filler(), 1..5),
    ) {
        let names = ["dim", "nb", "m", "ef"];
        let tokens: Vec<String> = names
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != missing)
            .map(|(i, name)| format!("{}_{}", name, i + 1))
            .collect();
        let name = build_name(&tokens, &fillers);

        let err = extract(&name).unwrap_err();
        prop_assert_eq!(err, AnalysisError::missing_parameter(names[missing]));
    }

    #[test]
    fn prop_extract_reads_optional_top_k(k in 1u32..10_000) {
        let name = format!("1-ST-CPU_dim_8_nb_9_m_4_ef_16_K_{}_latencies.csv", k);
        prop_assert_eq!(extract(&name).unwrap().top_k, Some(k));
    }
}

// ===== Statistics =====

proptest! {
    #[test]
    fn prop_window_length(values in samples(), warmup_seed in any::<usize>()) {
        let warmup = warmup_seed % values.len();
        let row = ResultRow::new(1, values.clone(), None);

        let summary = summarize(&row, warmup).unwrap();
        prop_assert_eq!(summary.window_len, values.len() - warmup);

        let window = &values[warmup..];
        let min = window.iter().copied().fold(f64::INFINITY, f64::min);
        let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(summary.min, min);
        prop_assert_eq!(summary.max, max);
        prop_assert!(summary.mean >= min - 1e-6 && summary.mean <= max + 1e-6);
    }

    #[test]
    fn prop_variance_non_negative_and_percentiles_ordered(values in samples()) {
        let row = ResultRow::new(1, values, None);
        let summary = summarize(&row, 0).unwrap();

        prop_assert!(summary.variance >= 0.0);
        prop_assert!(summary.p95 <= summary.p99 + 1e-9);
        prop_assert!(summary.p99 <= summary.max + 1e-9);
    }

    #[test]
    fn prop_warmup_past_end_fails(values in samples(), extra in 0usize..10) {
        let len = values.len();
        let row = ResultRow::new(5, values, None);
        let is_insufficient = matches!(
            summarize(&row, len + extra),
            Err(AnalysisError::InsufficientSamples { .. })
        );
        prop_assert!(is_insufficient);
    }
}

// ===== Row selection =====

proptest! {
    #[test]
    fn prop_selection_preserves_request_order(
        table_keys in prop::collection::btree_set(0i64..200, 1..40),
        requested in prop::collection::vec(0i64..200, 0..40),
    ) {
        let rows: Vec<ResultRow> = table_keys
            .iter()
            .rev()
            .map(|&k| ResultRow::new(k, vec![k as f64], None))
            .collect();
        let table = ResultTable::new(
            TableShape::new("k", false),
            vec!["iter1 (us)".to_string()],
            rows,
        )
        .unwrap();

        let selected = select_by_key(&table, &requested).unwrap();
        let keys: Vec<i64> = selected.iter().map(Selection::key).collect();
        prop_assert_eq!(&keys, &requested);

        let present: BTreeSet<i64> = table_keys;
        for selection in &selected {
            prop_assert_eq!(selection.is_found(), present.contains(&selection.key()));
            if let Some(row) = selection.row() {
                prop_assert_eq!(row.key, selection.key());
            }
        }
    }
}

// ===== Scenarios =====

#[test]
fn test_round_trip_scenario_with_warmup() {
    let table = ResultTable::new(
        TableShape::top_k_sweep(),
        (1..=5).map(|i| format!("iter{} (us)", i)).collect(),
        vec![
            ResultRow::new(10, vec![5000.0, 4000.0, 100.0, 110.0, 120.0], Some(0.90)),
            ResultRow::new(50, vec![6000.0, 5000.0, 200.0, 210.0, 220.0], Some(0.95)),
            ResultRow::new(100, vec![7000.0, 6000.0, 300.0, 310.0, 320.0], Some(0.99)),
        ],
    )
    .unwrap();

    let selected = select_by_key(&table, &[50, 999]).unwrap();
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[1], Selection::NotFound { key: 999 });

    let row = selected[0].row().unwrap();
    let summary = summarize(row, 2).unwrap();
    assert_eq!(summary.key, 50);
    assert_eq!(summary.window_len, 3);
    assert!((summary.mean - 210.0).abs() < 1e-9);
    assert!(summary.max < 1000.0);
    assert!((summary.recall_percent.unwrap() - 95.0).abs() < 1e-9);
}

#[test]
fn test_duplicate_key_scenario() {
    let table = ResultTable::new(
        TableShape::new("id", false),
        vec!["iter1 (us)".to_string()],
        vec![
            ResultRow::new(42, vec![1.0], None),
            ResultRow::new(42, vec![2.0], None),
        ],
    )
    .unwrap();

    let err = select_by_key(&table, &[42]).unwrap_err();
    assert!(matches!(err, AnalysisError::DuplicateKey { key: 42, .. }));
}
