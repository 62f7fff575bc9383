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

//! Executable lookup over an explicit search path.

use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Search path and working directory used to resolve executables.
///
/// Both are captured explicitly so lookups do not depend on ambient process
/// state once constructed.
#[derive(Debug, Clone)]
pub struct PathSearch {
    paths: Option<OsString>,
    cwd: PathBuf,
}

impl PathSearch {
    pub fn new(paths: Option<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            paths,
            cwd: cwd.into(),
        }
    }

    /// Search the process `PATH`, resolving relative entries against `cwd`.
    pub fn from_path_env(cwd: impl Into<PathBuf>) -> Self {
        Self::new(std::env::var_os("PATH"), cwd)
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Every match for `name`, in search path order.
    pub fn find_all(&self, name: &str) -> Vec<PathBuf> {
        match which::which_in_all(name, self.paths.as_ref(), &self.cwd) {
            Ok(matches) => matches.collect(),
            Err(e) => {
                debug!("'{name}' not found on search path: {e}");
                Vec::new()
            }
        }
    }

    /// First match for `name`, if any.
    pub fn find_first(&self, name: &str) -> Option<PathBuf> {
        self.find_all(name).into_iter().next()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_first(name).is_some()
    }
}
