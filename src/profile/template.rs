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

//! INI-backed Conan profile templates.

use crate::error::{MesondepError, Result};
use crate::settings::Settings;
use ini::{EscapePolicy, Ini, ParseOption};
use std::path::{Path, PathBuf};

pub const SETTINGS_SECTION: &str = "settings";
pub const OS_KEY: &str = "os";
pub const ARCH_KEY: &str = "arch";
pub const COMPILER_KEY: &str = "compiler";
pub const COMPILER_VERSION_KEY: &str = "compiler.version";
pub const COMPILER_CPPSTD_KEY: &str = "compiler.cppstd";

/// The `os`, `arch` and `compiler` a profile declares in `[settings]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTriple {
    pub os: String,
    pub arch: String,
    pub compiler: String,
}

impl ProfileTriple {
    /// Triple for the given settings, `None` without a selected compiler.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let compiler = settings.compiler()?;
        Some(Self {
            os: settings.os().conan_name().to_string(),
            arch: settings.arch().conan_name().to_string(),
            compiler: compiler.conan_name().to_string(),
        })
    }
}

/// Values are passed through untouched apart from placeholder expansion.
fn verbatim() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

#[derive(Debug, Clone)]
pub struct ProfileTemplate {
    path: PathBuf,
    ini: Ini,
}

impl ProfileTemplate {
    /// Read a template from disk. Quotes and backslashes are kept verbatim.
    pub fn load(path: &Path) -> Result<Self> {
        let ini = Ini::load_from_file_opt(path, verbatim()).map_err(|e| MesondepError::ProfileParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            ini,
        })
    }

    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let ini = Ini::load_from_str_opt(contents, verbatim()).map_err(|e| MesondepError::ProfileParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            ini,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.ini.section(Some(section))?.get(key)
    }

    pub fn require(&self, section: &str, key: &str) -> Result<&str> {
        self.get(section, key)
            .ok_or_else(|| MesondepError::ProfileKeyMissing {
                path: self.path.display().to_string(),
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Replace the value of an existing key.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) -> Result<()> {
        let path = self.path.display().to_string();
        let properties = self.ini.section_mut(Some(section)).ok_or_else(|| {
            MesondepError::ProfileKeyMissing {
                path: path.clone(),
                section: section.to_string(),
                key: key.to_string(),
            }
        })?;

        if !properties.contains_key(key) {
            return Err(MesondepError::ProfileKeyMissing {
                path,
                section: section.to_string(),
                key: key.to_string(),
            });
        }

        properties.insert(key, value.into());
        Ok(())
    }

    pub fn triple(&self) -> Result<ProfileTriple> {
        Ok(ProfileTriple {
            os: self.require(SETTINGS_SECTION, OS_KEY)?.to_string(),
            arch: self.require(SETTINGS_SECTION, ARCH_KEY)?.to_string(),
            compiler: self.require(SETTINGS_SECTION, COMPILER_KEY)?.to_string(),
        })
    }

    /// Write the profile without escaping, so Windows paths survive.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        self.ini.write_to_file_policy(path, EscapePolicy::Nothing)?;
        Ok(())
    }
}
