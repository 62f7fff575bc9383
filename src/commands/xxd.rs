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
use crate::embed::{array_name, embed_file};
use crate::error::Result;
use std::path::Path;

pub struct XxdCommand<'a> {
    config: &'a MesondepConfig,
}

impl<'a> XxdCommand<'a> {
    pub fn new(config: &'a MesondepConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, file: &Path) -> Result<()> {
        // Named after the path as typed, resolved against the working directory
        let name = array_name(&file.to_string_lossy());
        let rendered = embed_file(&self.config.working_dir().join(file), &name)?;

        println!("{rendered}");
        Ok(())
    }
}
