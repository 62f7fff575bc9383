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

//! Visual Studio installation discovery through `vswhere.exe`.

use crate::error::{MesondepError, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A Visual Studio installation reported by the installer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VsInstallation {
    #[serde(rename = "installationVersion")]
    pub version: String,
    #[serde(rename = "installationPath")]
    pub path: PathBuf,
}

impl VsInstallation {
    pub fn new(version: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            path: path.into(),
        }
    }

    /// Location of `vcvarsall.bat` inside this installation.
    pub fn vcvarsall_path(&self) -> PathBuf {
        self.path
            .join("VC")
            .join("Auxiliary")
            .join("Build")
            .join("vcvarsall.bat")
    }
}

/// Source of Visual Studio installations.
pub trait VisualStudioLocator {
    /// Installed instances, newest first. Empty when none are found.
    fn installations(&self) -> Vec<VsInstallation>;
}

/// Queries `vswhere.exe`, which ships with every Visual Studio 2017+ installer.
pub struct VsWhereLocator {
    vswhere: Option<PathBuf>,
}

impl VsWhereLocator {
    pub fn new() -> Self {
        Self {
            vswhere: default_vswhere_path(),
        }
    }

    pub fn with_vswhere(vswhere: impl Into<PathBuf>) -> Self {
        Self {
            vswhere: Some(vswhere.into()),
        }
    }

    fn run_vswhere(&self, vswhere: &Path) -> Result<Vec<VsInstallation>> {
        let output = Command::new(vswhere)
            .args(["-all", "-products", "*", "-sort", "-format", "json", "-utf8"])
            .output()
            .map_err(|e| {
                MesondepError::SystemError(format!("Failed to execute {}: {e}", vswhere.display()))
            })?;

        if !output.status.success() {
            return Err(MesondepError::SystemError(format!(
                "{} exited with status {}",
                vswhere.display(),
                output.status
            )));
        }

        parse_vswhere_output(&String::from_utf8_lossy(&output.stdout))
    }
}

impl Default for VsWhereLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualStudioLocator for VsWhereLocator {
    fn installations(&self) -> Vec<VsInstallation> {
        let Some(vswhere) = &self.vswhere else {
            debug!("No Program Files directory known, skipping vswhere");
            return Vec::new();
        };

        if !vswhere.is_file() {
            debug!("vswhere not found at {}", vswhere.display());
            return Vec::new();
        }

        match self.run_vswhere(vswhere) {
            Ok(installations) => {
                debug!("vswhere reported {} installation(s)", installations.len());
                installations
            }
            Err(e) => {
                warn!("Visual Studio discovery failed: {e}");
                Vec::new()
            }
        }
    }
}

fn default_vswhere_path() -> Option<PathBuf> {
    std::env::var_os("ProgramFiles(x86)")
        .or_else(|| std::env::var_os("ProgramFiles"))
        .map(|dir| {
            PathBuf::from(dir)
                .join("Microsoft Visual Studio")
                .join("Installer")
                .join("vswhere.exe")
        })
}

/// Parse the JSON array printed by `vswhere -format json`.
pub fn parse_vswhere_output(json: &str) -> Result<Vec<VsInstallation>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

/// Existing `vcvarsall.bat` files of the given installations.
pub fn vcvarsall_locations(installations: &[VsInstallation]) -> Vec<PathBuf> {
    installations
        .iter()
        .map(VsInstallation::vcvarsall_path)
        .filter(|path| path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VSWHERE_JSON: &str = r#"[
  {
    "instanceId": "1a2b3c4d",
    "installDate": "2023-01-12T10:00:00Z",
    "installationName": "VisualStudio/17.4.4+33213.308",
    "installationPath": "C:\\Program Files\\Microsoft Visual Studio\\2022\\Community",
    "installationVersion": "17.4.33213.308",
    "productId": "Microsoft.VisualStudio.Product.Community",
    "isPrerelease": false
  },
  {
    "instanceId": "5e6f7a8b",
    "installationPath": "C:\\Program Files (x86)\\Microsoft Visual Studio\\2019\\BuildTools",
    "installationVersion": "16.11.33214.272"
  }
]"#;

    #[test]
    fn test_parse_vswhere_output() {
        let installations = parse_vswhere_output(VSWHERE_JSON).unwrap();

        assert_eq!(installations.len(), 2);
        assert_eq!(installations[0].version, "17.4.33213.308");
        assert_eq!(
            installations[0].path,
            PathBuf::from(r"C:\Program Files\Microsoft Visual Studio\2022\Community")
        );
        assert_eq!(installations[1].version, "16.11.33214.272");
    }

    #[test]
    fn test_parse_empty_vswhere_output() {
        assert!(parse_vswhere_output("").unwrap().is_empty());
        assert!(parse_vswhere_output("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_vswhere_output() {
        let result = parse_vswhere_output("not json");
        assert!(matches!(result, Err(MesondepError::Json(_))));
    }

    #[test]
    fn test_vcvarsall_locations_keeps_existing_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let complete = VsInstallation::new("17.4.33213.308", temp_dir.path().join("2022"));
        let partial = VsInstallation::new("16.11.33214.272", temp_dir.path().join("2019"));

        let vcvarsall = complete.vcvarsall_path();
        fs::create_dir_all(vcvarsall.parent().unwrap()).unwrap();
        fs::write(&vcvarsall, "@echo off\n").unwrap();
        fs::create_dir_all(partial.path.join("VC")).unwrap();

        let locations = vcvarsall_locations(&[complete, partial]);
        assert_eq!(locations, vec![vcvarsall]);
    }

    #[test]
    fn test_missing_vswhere_yields_no_installations() {
        let temp_dir = TempDir::new().unwrap();
        let locator = VsWhereLocator::with_vswhere(temp_dir.path().join("vswhere.exe"));

        assert!(locator.installations().is_empty());
    }
}
