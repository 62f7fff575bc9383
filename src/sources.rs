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

//! Recursive source file discovery for build scripts.

use crate::error::{MesondepError, Result};
use globset::Glob;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Printed by the `glob` command when nothing matches.
pub const EMPTY_MARKER: &str = "<EMPTY>";

/// Split a space-delimited pattern list such as `"*.h *.hpp"`.
pub fn split_patterns(patterns: &str) -> Vec<&str> {
    patterns.split_whitespace().collect()
}

/// Collect files under `cwd/directory` whose names match any pattern.
///
/// Results are grouped by pattern in the order given and sorted within each
/// group. A file matching two patterns appears once per pattern.
pub fn glob_files(cwd: &Path, directory: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let root = cwd.join(directory);
    if !root.is_dir() {
        return Err(MesondepError::DirectoryNotFound(root.display().to_string()));
    }

    let mut globbed = Vec::new();
    for pattern in patterns {
        let matcher = Glob::new(pattern)?.compile_matcher();

        let mut matches = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
                matches.push(entry.into_path());
            }
        }

        debug!("Pattern {pattern} matched {} file(s)", matches.len());
        globbed.extend(matches);
    }

    Ok(globbed)
}
