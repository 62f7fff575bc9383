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

//! `$name` / `${name}` placeholder expansion for profile values.
//!
//! `$$` produces a literal `$`. Placeholders without a value in the mapping,
//! and a `$` not followed by a valid name, are errors.

use crate::error::{MesondepError, Result};
use regex::Regex;
use std::sync::OnceLock;

static PLACEHOLDER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn placeholder_pattern() -> &'static Regex {
    PLACEHOLDER_PATTERN.get_or_init(|| {
        Regex::new(
            r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\}|(?P<invalid>))",
        )
        .expect("valid placeholder regex")
    })
}

/// Expand placeholders in `value` using `mapping`.
pub fn substitute(value: &str, mapping: &[(&str, &str)]) -> Result<String> {
    let mut output = String::with_capacity(value.len());
    let mut last = 0;

    for captures in placeholder_pattern().captures_iter(value) {
        let whole = captures.get(0).expect("capture group 0 always exists");
        output.push_str(&value[last..whole.start()]);
        last = whole.end();

        if captures.name("escaped").is_some() {
            output.push('$');
            continue;
        }

        let name = match captures.name("named").or_else(|| captures.name("braced")) {
            Some(name) => name.as_str(),
            None => {
                return Err(MesondepError::ValidationError(format!(
                    "Invalid placeholder at position {} in value '{value}'",
                    whole.start()
                )));
            }
        };

        match mapping.iter().find(|(key, _)| *key == name) {
            Some((_, replacement)) => output.push_str(replacement),
            None => {
                return Err(MesondepError::UnresolvedPlaceholder {
                    placeholder: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    output.push_str(&value[last..]);
    Ok(output)
}
