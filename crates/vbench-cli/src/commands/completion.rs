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


//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

use crate::error::CliError;

/// Write the completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
    Ok(())
}

/// Shell-specific instructions for enabling vbench completions.
///
/// Shell names are case-insensitive; unknown shells yield `None`.
///
/// # Examples
///
/// ```
/// use vbench_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions("Zsh").unwrap().contains("~/.zshrc"));
/// assert_eq!(print_installation_instructions("tcsh"), None);
/// ```
pub fn print_installation_instructions(shell: &str) -> Option<String> {
    let (name, session, persistent) = match shell.to_lowercase().as_str() {
        "bash" => (
            "bash",
            r#"eval "$(vbench completion bash)""#,
            "vbench completion bash > ~/.local/share/bash-completion/completions/vbench",
        ),
        "zsh" => (
            "zsh",
            r#"eval "$(vbench completion zsh)""#,
            r#"echo 'eval "$(vbench completion zsh)"' >> ~/.zshrc"#,
        ),
        "fish" => (
            "fish",
            "vbench completion fish | source",
            "vbench completion fish > ~/.config/fish/completions/vbench.fish",
        ),
        "powershell" | "pwsh" => (
            "PowerShell",
            "vbench completion powershell | Out-String | Invoke-Expression",
            "Add-Content $PROFILE 'vbench completion powershell | Out-String | Invoke-Expression'",
        ),
        "elvish" => (
            "elvish",
            "eval (vbench completion elvish | slurp)",
            "echo 'eval (vbench completion elvish | slurp)' >> ~/.config/elvish/rc.elv",
        ),
        _ => return None,
    };

    Some(format!(
        "# {} completion installation:\n\n# For current session only:\n{}\n\n# Persistent:\n{}\n",
        name, session, persistent
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_instructions_per_shell() {
        for shell in ["bash", "zsh", "fish", "powershell", "pwsh", "elvish"] {
            let instructions = print_installation_instructions(shell).unwrap();
            assert!(instructions.contains("vbench completion"));
        }
    }

    #[test]
    fn test_installation_instructions_case_insensitive() {
        assert_eq!(
            print_installation_instructions("bash"),
            print_installation_instructions("BASH")
        );
    }

    #[test]
    fn test_installation_instructions_unsupported() {
        assert_eq!(print_installation_instructions("invalid"), None);
        assert_eq!(print_installation_instructions("Unsupported shell"), None);
    }
}
