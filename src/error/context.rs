// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::MesondepError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a MesondepError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a MesondepError) -> Self {
        let (suggestion, details) = match error {
            MesondepError::InvalidArgument(_) => {
                let suggestion =
                    Some("Run 'mesondep --help' to see the expected arguments.".to_string());
                (suggestion, None)
            }
            MesondepError::FileNotFound(path) => {
                let suggestion = Some(
                    "Check the path given on the command line; relative paths are resolved \
                     against the current working directory."
                        .to_string(),
                );
                let details = Some(format!("No file exists at {path}"));
                (suggestion, details)
            }
            MesondepError::DirectoryNotFound(path) => {
                let suggestion = if path.contains(".conan") {
                    Some(
                        "Run 'conan config init' to create the Conan home and its default \
                         profile, then rerun this command."
                            .to_string(),
                    )
                } else {
                    Some("Create the directory or pass a different path.".to_string())
                };
                let details = Some(format!("No directory exists at {path}"));
                (suggestion, details)
            }
            MesondepError::ProfileParse { path, .. }
            | MesondepError::ProfileKeyMissing { path, .. } => {
                let suggestion = Some(
                    "Profiles must be INI files with a [settings] section declaring os, arch, \
                     compiler, compiler.version and compiler.cppstd."
                        .to_string(),
                );
                let details = Some(format!("Offending profile: {path}"));
                (suggestion, details)
            }
            MesondepError::UnresolvedPlaceholder { .. } => {
                let suggestion = Some(
                    "Supported placeholders: ${compiler_version}, ${compiler_cppstd}, \
                     ${compiler_cc_path}, ${compiler_cxx_path}. Use $$ for a literal '$'."
                        .to_string(),
                );
                (suggestion, None)
            }
            MesondepError::ToolNotFound(tool) => {
                let suggestion = Some(format!(
                    "Ensure '{tool}' is installed and available in your PATH."
                ));
                (suggestion, None)
            }
            MesondepError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check mesondep.toml in the working directory and any MESONDEP_* environment \
                     variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            MesondepError::Glob(_) => {
                let suggestion = Some(
                    "Glob patterns are separated by spaces, e.g. \"*.h *.hpp *.hxx\".".to_string(),
                );
                (suggestion, None)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
