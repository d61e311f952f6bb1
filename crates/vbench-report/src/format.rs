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

//! Report output formats.

use crate::error::{ReportError, Result};
use crate::json::to_json_string;
use crate::markdown::to_markdown;
use crate::types::SummaryReport;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Output format of the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Aligned plain-text table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Markdown table.
    Markdown,
}

impl ReportFormat {
    /// Lowercase name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render `report` in the given format.
pub fn render(report: &SummaryReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => to_json_string(report),
        ReportFormat::Markdown => Ok(to_markdown(report)),
    }
}

/// Render `report` and write it to `path`.
pub fn export(report: &SummaryReport, format: ReportFormat, path: &Path) -> Result<()> {
    fs::write(path, render(report, format)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vbench_core::RunParameters;

    fn report() -> SummaryReport {
        SummaryReport::new(
            RunParameters {
                dim: 1,
                nb: 2,
                m: 3,
                ef: 4,
                top_k: Some(5),
            },
            "id",
            0,
            &[],
        )
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_format_display_round_trip() {
        for format in [ReportFormat::Text, ReportFormat::Json, ReportFormat::Markdown] {
            assert_eq!(format.to_string().parse::<ReportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_render_each_format() {
        let report = report();
        assert!(render(&report, ReportFormat::Text).unwrap().contains("recall (%)"));
        assert!(render(&report, ReportFormat::Json).unwrap().contains("\"key_column\""));
        assert!(render(&report, ReportFormat::Markdown).unwrap().starts_with('#'));
    }

    #[test]
    fn test_export() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        export(&report(), ReportFormat::Json, temp.path()).unwrap();
        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("\"params\""));
    }
}
