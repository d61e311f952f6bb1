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


//! CLI command implementations

mod analyze;
mod completion;
mod params;

pub use analyze::{analyze, AnalyzeOptions, KeySelection};
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use params::{format_params, params};

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use vbench_core::AnalysisError;

/// Default maximum input file size (1 GiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "VBENCH_MAX_FILE_SIZE";

/// Maximum input file size from the environment, or the default when the
/// variable is unset or not a number.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Check that `path` exists and is within the size limit before it is read.
///
/// # Errors
///
/// - [`AnalysisError::FileNotFound`] if the file does not exist
/// - [`CliError::FileTooLarge`] if it exceeds [`max_file_size`]
/// - [`CliError::Io`] if its metadata cannot be read
pub fn check_file_size(path: &Path) -> Result<(), CliError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AnalysisError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into())
        }
        Err(e) => return Err(CliError::io_error(path, e)),
    };

    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }
    Ok(())
}

/// Write `content` to stdout, terminated by a newline.
pub fn write_stdout(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| {
            if content.ends_with('\n') {
                Ok(())
            } else {
                stdout.write_all(b"\n")
            }
        })
        .and_then(|_| stdout.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}
