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
use crate::error::Result;
use crate::platform::PathSearch;
use log::debug;

pub struct WhichCommand<'a> {
    config: &'a MesondepConfig,
}

impl<'a> WhichCommand<'a> {
    pub fn new(config: &'a MesondepConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, name: &str) -> Result<()> {
        let search = PathSearch::from_path_env(self.config.working_dir());
        let found = search.find_all(name);
        debug!("Found {} match(es) for {name}", found.len());

        if found.is_empty() {
            println!("{}", not_found_message(name));
        } else {
            for path in found {
                println!("{}", path.display());
            }
        }
        Ok(())
    }
}

fn not_found_message(name: &str) -> String {
    format!("<Item '{name}' not found on path>")
}
