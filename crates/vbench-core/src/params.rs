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

//! Run parameter extraction.
//!
//! The benchmark harness encodes the HNSW build parameters in the name of
//! every result file, e.g.
//! `1-ST-CPU_dim_960_nb_1000000_m_16_ef_200_latencies.csv`. This module turns
//! such a name into a [`RunParameters`] record. A JSON sidecar file is
//! accepted as an alternative source, and the record is passed explicitly
//! through the rest of the pipeline once it has been built.
//!
//! # Token rules
//!
//! - Tokens are case-sensitive `name_digits` substrings: `dim_`, `nb_`,
//!   `m_`, `ef_` (required) and `K_` (optional).
//! - A token may sit anywhere in the name, glued to other text or not
//!   (`topK_10` carries `K = 10`). The one exception is a match that is the
//!   tail of a longer token the harness writes: `dim_960` never yields
//!   `m = 960` and `searchef_64` never yields `ef = 64`.
//! - Tokens may appear in any order; the first qualifying occurrence wins.

use crate::error::{AnalysisError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Top-k label used when a file name carries no `K_` token.
pub const DEFAULT_TOP_K: u32 = 100;

/// HNSW run parameters of one benchmark invocation.
///
/// Used for labelling reports and charts only; the statistics never depend
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunParameters {
    /// Vector dimensionality.
    pub dim: u64,
    /// Number of base vectors in the index.
    pub nb: u64,
    /// HNSW `M` (graph degree).
    pub m: u64,
    /// HNSW `ef_construction`.
    pub ef: u64,
    /// Number of neighbours requested per query, when recorded.
    #[serde(default, alias = "K", alias = "k")]
    pub top_k: Option<u32>,
}

impl RunParameters {
    /// Extract parameters from a bare file name.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::MissingParameter`] naming the first required token
    ///   (in `dim`, `nb`, `m`, `ef` order) that is absent.
    /// - [`AnalysisError::InvalidMetadata`] when a token value overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use vbench_core::RunParameters;
    ///
    /// let params = RunParameters::from_filename("ef_200_nb_1000_dim_128_m_16.csv").unwrap();
    /// assert_eq!((params.dim, params.nb, params.m, params.ef), (128, 1000, 16, 200));
    /// assert_eq!(params.top_k, None);
    /// ```
    pub fn from_filename(filename: &str) -> Result<Self> {
        let patterns = token_patterns();

        let params = Self {
            dim: required(filename, &patterns.dim, "dim")?,
            nb: required(filename, &patterns.nb, "nb")?,
            m: required(filename, &patterns.m, "m")?,
            ef: required(filename, &patterns.ef, "ef")?,
            top_k: optional(filename, &patterns.top_k, "K")?,
        };

        debug!(filename, %params, "extracted run parameters");
        Ok(params)
    }

    /// Extract parameters from the file name component of `path`.
    ///
    /// Directory names are ignored so a parent directory called `m_8` cannot
    /// leak into the record.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self::from_filename(&name)
    }

    /// Read parameters from a JSON sidecar file.
    ///
    /// The file holds a single object:
    ///
    /// ```json
    /// { "dim": 960, "nb": 1000000, "m": 16, "ef": 200, "top_k": 10 }
    /// ```
    ///
    /// `top_k` (alias `K`) may be omitted.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::FileNotFound`] when the sidecar does not exist.
    /// - [`AnalysisError::InvalidMetadata`] when it cannot be read or parsed.
    pub fn from_sidecar(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AnalysisError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let origin = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| AnalysisError::invalid_metadata(&origin, e.to_string()))?;
        let params: Self = serde_json::from_str(&content)
            .map_err(|e| AnalysisError::invalid_metadata(&origin, e.to_string()))?;

        debug!(sidecar = %origin, %params, "loaded run parameters");
        Ok(params)
    }

    /// The top-k value, falling back to [`DEFAULT_TOP_K`].
    pub fn top_k_or_default(&self) -> u32 {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }
}

impl fmt::Display for RunParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dim={} nb={} m={} ef={}", self.dim, self.nb, self.m, self.ef)?;
        match self.top_k {
            Some(k) => write!(f, " K={}", k),
            None => write!(f, " K={} (default)", DEFAULT_TOP_K),
        }
    }
}

/// Extract run parameters from a file name.
///
/// Free-function form of [`RunParameters::from_filename`].
pub fn extract(filename: &str) -> Result<RunParameters> {
    RunParameters::from_filename(filename)
}

/// Where the run parameters of an invocation come from.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataSource {
    /// Parse the tokens in the result file's name.
    Filename(PathBuf),
    /// Read a JSON sidecar file.
    Sidecar(PathBuf),
    /// Parameters supplied directly by the caller.
    Explicit(RunParameters),
}

impl MetadataSource {
    /// Build the parameter record from this source.
    pub fn resolve(&self) -> Result<RunParameters> {
        match self {
            MetadataSource::Filename(path) => RunParameters::from_path(path),
            MetadataSource::Sidecar(path) => RunParameters::from_sidecar(path),
            MetadataSource::Explicit(params) => Ok(*params),
        }
    }
}

struct TokenPatterns {
    dim: Regex,
    nb: Regex,
    m: Regex,
    ef: Regex,
    top_k: Regex,
}

fn token_patterns() -> &'static TokenPatterns {
    static PATTERNS: OnceLock<TokenPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TokenPatterns {
        dim: token_regex("dim"),
        nb: token_regex("nb"),
        m: token_regex("m"),
        ef: token_regex("ef"),
        top_k: token_regex("K"),
    })
}

/// Token names written by the benchmark harness.
const KNOWN_TOKENS: [&str; 6] = ["dim", "nb", "m", "ef", "K", "searchef"];

fn token_regex(name: &str) -> Regex {
    Regex::new(&format!(r"{}_([0-9]+)", name)).expect("valid token pattern")
}

/// Whether the `name_` match starting at byte `start` is the tail of a
/// longer known token, e.g. the `m_` of `dim_`.
fn inside_longer_token(filename: &str, start: usize, name: &str) -> bool {
    let before = &filename[..start];
    KNOWN_TOKENS
        .iter()
        .filter(|longer| longer.len() > name.len() && longer.ends_with(name))
        .any(|longer| before.ends_with(&longer[..longer.len() - name.len()]))
}

fn find_token<'a>(filename: &'a str, pattern: &Regex, name: &str) -> Option<&'a str> {
    pattern
        .captures_iter(filename)
        .filter(|caps| {
            caps.get(0)
                .is_some_and(|whole| !inside_longer_token(filename, whole.start(), name))
        })
        .find_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn required(filename: &str, pattern: &Regex, name: &str) -> Result<u64> {
    let digits = find_token(filename, pattern, name)
        .ok_or_else(|| AnalysisError::missing_parameter(name))?;
    digits.parse().map_err(|_| {
        AnalysisError::invalid_metadata(filename, format!("value of '{}_' out of range: {}", name, digits))
    })
}

fn optional(filename: &str, pattern: &Regex, name: &str) -> Result<Option<u32>> {
    match find_token(filename, pattern, name) {
        Some(digits) => digits.parse().map(Some).map_err(|_| {
            AnalysisError::invalid_metadata(
                filename,
                format!("value of '{}_' out of range: {}", name, digits),
            )
        }),
        None => Ok(None),
    }
}
