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

//! GCC version discovery.

use log::{debug, warn};
use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn version_pattern() -> &'static Regex {
    VERSION_PATTERN.get_or_init(|| Regex::new(r"([0-9]+\.)+[0-9]+").expect("valid version regex"))
}

/// Extract the first dotted numeric run from the first line of `gcc --version` output.
pub fn extract_version(output: &str) -> Option<String> {
    let first_line = output.trim().lines().next()?;
    version_pattern()
        .find(first_line)
        .map(|m| m.as_str().to_string())
}

/// Run `<gcc> --version` and parse the reported version.
pub fn query_version(gcc: &Path) -> Option<String> {
    debug!("Querying compiler version: {} --version", gcc.display());

    let output = match Command::new(gcc).arg("--version").output() {
        Ok(output) => output,
        Err(e) => {
            warn!("Failed to execute {} --version: {e}", gcc.display());
            return None;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = extract_version(&stdout);
    if version.is_none() {
        warn!(
            "Could not find a version in output of {} --version",
            gcc.display()
        );
    }
    version
}
