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

use crate::error::{ErrorContext, MesondepError};
use colored::Colorize;

/// Plain rendering: the error, then details and a suggestion when known.
pub fn format_error_chain(error: &MesondepError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}

/// Rendering for a terminal, with highlighted headings.
pub fn format_error_with_color(error: &MesondepError, use_color: bool) -> String {
    if !use_color {
        return format_error_chain(error);
    }

    let context = ErrorContext::new(error);
    let mut output = format!("{} {error}", "Error:".red().bold());

    if let Some(details) = &context.details {
        output.push_str(&format!("\n\n{} {details}", "Details:".bold()));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!(
            "\n\n{} {}",
            "Suggestion:".yellow().bold(),
            suggestion.cyan()
        ));
    }

    output
}
