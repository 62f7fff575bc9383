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

use crate::error::Result;
use crate::profile::template::ProfileTemplate;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory of bundled profile templates.
pub struct ProfileRepository {
    dir: PathBuf,
}

impl ProfileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Template files in file name order. A missing directory is empty.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            warn!(
                "Profile directory {} does not exist",
                self.dir.display()
            );
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }

        debug!(
            "Found {} profile template(s) in {}",
            paths.len(),
            self.dir.display()
        );
        Ok(paths)
    }

    /// Every template that parses, in file name order. Broken files are skipped.
    pub fn templates(&self) -> Result<Vec<ProfileTemplate>> {
        let mut templates = Vec::new();
        for path in self.list()? {
            match ProfileTemplate::load(&path) {
                Ok(template) => templates.push(template),
                Err(e) => warn!("Skipping profile template: {e}"),
            }
        }
        Ok(templates)
    }
}
