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

//! Layered configuration: built-in defaults, an optional `mesondep.toml` in the
//! working directory, then `MESONDEP_*` environment variables.

use crate::error::{MesondepError, Result};
use crate::models::toolchain::CppStd;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "mesondep.toml";
pub const ENV_PREFIX: &str = "MESONDEP";

const DEFAULT_PROFILES_DIR: &str = "files/conan-profiles";
const DEFAULT_OUTPUT_PROFILE_NAME: &str = "conan-generated";
const DEFAULT_DEFAULT_PROFILE_NAME: &str = "default";
const DEFAULT_CPPSTD: &str = "17";
const CONAN_PROFILES_SUBDIR: &str = ".conan/profiles";

#[derive(Debug, Clone, Deserialize)]
pub struct MesondepConfig {
    /// Directory holding the bundled profile templates
    pub profiles_dir: PathBuf,

    /// The user's Conan profile storage directory
    pub conan_profiles_dir: PathBuf,

    /// File name of the generated profile
    pub output_profile_name: String,

    /// File name of Conan's own default profile
    pub default_profile_name: String,

    /// Language standard selected before negotiation
    pub default_cppstd: String,

    #[serde(skip)]
    working_dir: PathBuf,
}

impl MesondepConfig {
    /// Profile template directory, resolved against the working directory when relative.
    pub fn profiles_dir(&self) -> PathBuf {
        self.resolve(&self.profiles_dir)
    }

    pub fn conan_profiles_dir(&self) -> PathBuf {
        self.resolve(&self.conan_profiles_dir)
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn default_cppstd(&self) -> Result<CppStd> {
        CppStd::from_str(&self.default_cppstd)
            .map_err(|e| MesondepError::ConfigError(format!("default_cppstd: {e}")))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

/// Load configuration for a run rooted at the process working directory.
pub fn new_mesondep_config() -> Result<MesondepConfig> {
    let working_dir = std::env::current_dir()?;
    load_config(&working_dir)
}

pub fn load_config(working_dir: &Path) -> Result<MesondepConfig> {
    let config_path = working_dir.join(CONFIG_FILE_NAME);
    let conan_profiles_dir = default_conan_profiles_dir();

    if config_path.exists() {
        log::debug!("Loading config from {}", config_path.display());
    } else {
        log::debug!("Config file not found at {config_path:?}, using defaults");
    }

    let settings = Config::builder()
        .set_default("profiles_dir", DEFAULT_PROFILES_DIR)
        .and_then(|b| {
            b.set_default(
                "conan_profiles_dir",
                conan_profiles_dir.to_string_lossy().to_string(),
            )
        })
        .and_then(|b| b.set_default("output_profile_name", DEFAULT_OUTPUT_PROFILE_NAME))
        .and_then(|b| b.set_default("default_profile_name", DEFAULT_DEFAULT_PROFILE_NAME))
        .and_then(|b| b.set_default("default_cppstd", DEFAULT_CPPSTD))
        .map_err(|e| MesondepError::ConfigError(e.to_string()))?
        .add_source(
            File::new(&config_path.to_string_lossy(), FileFormat::Toml).required(false),
        )
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .map_err(|e| MesondepError::ConfigError(format!("Failed to load configuration: {e}")))?;

    let mut config: MesondepConfig = settings
        .try_deserialize()
        .map_err(|e| MesondepError::ConfigError(format!("Invalid configuration: {e}")))?;
    config.working_dir = working_dir.to_path_buf();

    // Surface a bad standard token at startup rather than mid-run
    config.default_cppstd()?;

    Ok(config)
}

fn default_conan_profiles_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(CONAN_PROFILES_SUBDIR),
        None => {
            log::warn!("Unable to determine home directory, using relative Conan profile path");
            PathBuf::from(CONAN_PROFILES_SUBDIR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(temp_dir.path()).unwrap();

        assert_eq!(config.profiles_dir, PathBuf::from(DEFAULT_PROFILES_DIR));
        assert_eq!(
            config.profiles_dir(),
            temp_dir.path().join(DEFAULT_PROFILES_DIR)
        );
        assert_eq!(config.output_profile_name, "conan-generated");
        assert_eq!(config.default_profile_name, "default");
        assert_eq!(config.default_cppstd().unwrap(), CppStd::Cpp17);
        assert!(config.conan_profiles_dir().ends_with(".conan/profiles"));
    }

    #[test]
    #[serial]
    fn test_config_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
profiles_dir = "tools/profiles"
default_cppstd = "20"
"#,
        )
        .unwrap();

        let config = load_config(temp_dir.path()).unwrap();
        assert_eq!(
            config.profiles_dir(),
            temp_dir.path().join("tools/profiles")
        );
        assert_eq!(config.default_cppstd().unwrap(), CppStd::Cpp20);
        assert_eq!(config.output_profile_name, "conan-generated");
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"output_profile_name = "from-file""#,
        )
        .unwrap();

        unsafe {
            env::set_var("MESONDEP_OUTPUT_PROFILE_NAME", "from-env");
        }
        let config = load_config(temp_dir.path());
        unsafe {
            env::remove_var("MESONDEP_OUTPUT_PROFILE_NAME");
        }

        assert_eq!(config.unwrap().output_profile_name, "from-env");
    }

    #[test]
    #[serial]
    fn test_absolute_paths_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let conan_dir = temp_dir.path().join("conan");
        let conan_dir_str = conan_dir.to_string_lossy();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            format!("conan_profiles_dir = {conan_dir_str:?}"),
        )
        .unwrap();

        let config = load_config(temp_dir.path()).unwrap();
        assert_eq!(config.conan_profiles_dir(), conan_dir);
    }

    #[test]
    #[serial]
    fn test_invalid_cppstd_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"default_cppstd = "42""#,
        )
        .unwrap();

        let result = load_config(temp_dir.path());
        assert!(matches!(result, Err(MesondepError::ConfigError(_))));
    }
}
