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

use crate::config::MesondepConfig;
use crate::error::{MesondepError, Result};
use crate::sources::{EMPTY_MARKER, glob_files, split_patterns};
use std::path::Path;

pub struct GlobCommand<'a> {
    config: &'a MesondepConfig,
}

impl<'a> GlobCommand<'a> {
    pub fn new(config: &'a MesondepConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, directory: &Path, patterns: &str) -> Result<()> {
        let patterns = split_patterns(patterns);
        if patterns.is_empty() {
            return Err(MesondepError::InvalidArgument(
                "At least one glob pattern is required".to_string(),
            ));
        }

        let files = glob_files(self.config.working_dir(), directory, &patterns)?;
        if files.is_empty() {
            println!("{EMPTY_MARKER}");
        } else {
            for file in files {
                println!("{}", file.display());
            }
        }
        Ok(())
    }
}
