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
use crate::toolchain::msvc::{VisualStudioLocator, VsWhereLocator, vcvarsall_locations};
use std::io::{self, Write};

pub struct MsvcLocateCommand {
    locator: Box<dyn VisualStudioLocator>,
}

impl MsvcLocateCommand {
    pub fn new() -> Result<Self> {
        Ok(Self::with_locator(Box::new(VsWhereLocator::new())))
    }

    pub fn with_locator(locator: Box<dyn VisualStudioLocator>) -> Self {
        Self { locator }
    }

    pub fn execute(&self) -> Result<()> {
        self.write_locations(io::stdout().lock())
    }

    /// One existing `vcvarsall.bat` per line. Nothing is written when Visual
    /// Studio is absent.
    pub fn write_locations<W: Write>(&self, mut output: W) -> Result<()> {
        let installations = self.locator.installations();
        for vcvarsall in vcvarsall_locations(&installations) {
            writeln!(output, "{}", vcvarsall.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::msvc::VsInstallation;
    use std::fs;
    use tempfile::TempDir;

    struct FixedLocator(Vec<VsInstallation>);

    impl VisualStudioLocator for FixedLocator {
        fn installations(&self) -> Vec<VsInstallation> {
            self.0.clone()
        }
    }

    #[test]
    fn test_lists_only_existing_scripts() {
        let temp_dir = TempDir::new().unwrap();
        let complete = temp_dir.path().join("2022");
        let build_dir = complete.join("VC").join("Auxiliary").join("Build");
        fs::create_dir_all(&build_dir).unwrap();
        fs::write(build_dir.join("vcvarsall.bat"), "@echo off\r\n").unwrap();
        let incomplete = temp_dir.path().join("2019");
        fs::create_dir_all(&incomplete).unwrap();

        let command = MsvcLocateCommand::with_locator(Box::new(FixedLocator(vec![
            VsInstallation::new("17.4.33213.308", &complete),
            VsInstallation::new("16.11.5", &incomplete),
        ])));
        let mut output = Vec::new();
        command.write_locations(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            format!("{}\n", build_dir.join("vcvarsall.bat").display())
        );
    }

    #[test]
    fn test_no_installations() {
        let command = MsvcLocateCommand::with_locator(Box::new(FixedLocator(Vec::new())));
        let mut output = Vec::new();
        command.write_locations(&mut output).unwrap();
        assert!(output.is_empty());
    }
}
