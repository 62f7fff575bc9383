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

//! Writes the generated Conan profile into the user's profile directory.

use crate::config::MesondepConfig;
use crate::error::{MesondepError, Result};
use crate::models::toolchain::major_version;
use crate::models::{CompilerKind, CppStd};
use crate::profile::selector::ProfileSelection;
use crate::profile::substitution::substitute;
use crate::profile::template::{
    COMPILER_CPPSTD_KEY, COMPILER_VERSION_KEY, ProfileTemplate, SETTINGS_SECTION,
};
use crate::settings::Settings;
use crate::toolchain::{GCC_C_COMPILER, GCC_CXX_COMPILER, ToolchainProbe};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

const COMPILER_VERSION_PLACEHOLDER: &str = "compiler_version";
const COMPILER_CPPSTD_PLACEHOLDER: &str = "compiler_cppstd";
const COMPILER_CC_PLACEHOLDER: &str = "compiler_cc_path";
const COMPILER_CXX_PLACEHOLDER: &str = "compiler_cxx_path";

/// Places a GCC profile may declare the C compiler path.
const CC_KEYS: [(&str, &str); 2] = [("env", "CC"), ("options", "build_requires.env.CC")];
/// Places a GCC profile may declare the C++ compiler path.
const CXX_KEYS: [(&str, &str); 2] = [("env", "CXX"), ("options", "build_requires.env.CXX")];

/// Concrete values for the template placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    compiler: Option<CompilerKind>,
    compiler_version: String,
    cppstd: CppStd,
    cc_path: Option<PathBuf>,
    cxx_path: Option<PathBuf>,
}

impl Substitutions {
    /// `version` is truncated to its leading numeric component.
    pub fn new(compiler: Option<CompilerKind>, version: &str, cppstd: CppStd) -> Self {
        Self {
            compiler,
            compiler_version: major_version(version).to_string(),
            cppstd,
            cc_path: None,
            cxx_path: None,
        }
    }

    pub fn with_gcc_paths(mut self, cc: Option<PathBuf>, cxx: Option<PathBuf>) -> Self {
        self.cc_path = cc;
        self.cxx_path = cxx;
        self
    }

    /// Values for the negotiated settings, querying the toolchain as needed.
    pub fn from_settings(settings: &Settings, probe: &ToolchainProbe) -> Self {
        let compiler = settings.compiler();
        let version = probe.get_version(compiler.unwrap_or(CompilerKind::Unknown));
        let substitutions = Self::new(compiler, &version, settings.cppstd());

        if compiler == Some(CompilerKind::Gcc) {
            substitutions.with_gcc_paths(
                probe.search().find_first(GCC_C_COMPILER),
                probe.search().find_first(GCC_CXX_COMPILER),
            )
        } else {
            substitutions
        }
    }

    pub fn compiler_version(&self) -> &str {
        &self.compiler_version
    }
}

pub struct ProfileMaterializer {
    output_name: String,
    default_name: String,
}

impl ProfileMaterializer {
    pub fn new(output_name: impl Into<String>, default_name: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            default_name: default_name.into(),
        }
    }

    pub fn from_config(config: &MesondepConfig) -> Self {
        Self::new(&config.output_profile_name, &config.default_profile_name)
    }

    pub fn output_path(&self, destination: &Path) -> PathBuf {
        destination.join(&self.output_name)
    }

    /// Write the generated profile into `destination` and return its path.
    ///
    /// The default selection duplicates Conan's default profile verbatim.
    /// Templates have their placeholders filled in. Any earlier generated
    /// profile is removed first.
    pub fn materialize(
        &self,
        selection: &ProfileSelection,
        destination: &Path,
        substitutions: &Substitutions,
    ) -> Result<PathBuf> {
        let output_path = self.output_path(destination);

        match selection {
            ProfileSelection::Default => self.copy_default(destination, &output_path)?,
            ProfileSelection::Template(template_path) => {
                self.fill_template(template_path, destination, &output_path, substitutions)?
            }
        }

        info!("Wrote Conan profile {}", output_path.display());
        Ok(output_path)
    }

    fn copy_default(&self, destination: &Path, output_path: &Path) -> Result<()> {
        let default_path = destination.join(&self.default_name);
        if !default_path.is_file() {
            return Err(MesondepError::FileNotFound(format!(
                "{} (run 'conan config init' to create Conan's default profile)",
                default_path.display()
            )));
        }

        debug!(
            "Copying default profile {} to {}",
            default_path.display(),
            output_path.display()
        );
        remove_existing_output(output_path)?;
        fs::copy(&default_path, output_path)?;
        Ok(())
    }

    fn fill_template(
        &self,
        template_path: &Path,
        destination: &Path,
        output_path: &Path,
        substitutions: &Substitutions,
    ) -> Result<()> {
        if !template_path.exists() || !destination.exists() {
            return Err(MesondepError::ValidationError(format!(
                "One or more paths are invalid: template {}, destination {}",
                template_path.display(),
                destination.display()
            )));
        }
        if !template_path.is_file() {
            return Err(MesondepError::ValidationError(format!(
                "The profile path must point to a file: {}",
                template_path.display()
            )));
        }
        if !destination.is_dir() {
            return Err(MesondepError::ValidationError(format!(
                "The user path must point to a directory: {}",
                destination.display()
            )));
        }

        let mut template = ProfileTemplate::load(template_path)?;

        let version = template.require(SETTINGS_SECTION, COMPILER_VERSION_KEY)?;
        let version = substitute(
            version,
            &[(
                COMPILER_VERSION_PLACEHOLDER,
                substitutions.compiler_version.as_str(),
            )],
        )?;
        template.set(SETTINGS_SECTION, COMPILER_VERSION_KEY, version)?;

        let cppstd = template.require(SETTINGS_SECTION, COMPILER_CPPSTD_KEY)?;
        let cppstd = substitute(
            cppstd,
            &[(COMPILER_CPPSTD_PLACEHOLDER, substitutions.cppstd.token())],
        )?;
        template.set(SETTINGS_SECTION, COMPILER_CPPSTD_KEY, cppstd)?;

        if substitutions.compiler == Some(CompilerKind::Gcc) {
            fill_compiler_path(
                &mut template,
                &CC_KEYS,
                COMPILER_CC_PLACEHOLDER,
                GCC_C_COMPILER,
                substitutions.cc_path.as_deref(),
            )?;
            fill_compiler_path(
                &mut template,
                &CXX_KEYS,
                COMPILER_CXX_PLACEHOLDER,
                GCC_CXX_COMPILER,
                substitutions.cxx_path.as_deref(),
            )?;
        }

        remove_existing_output(output_path)?;
        template.write_to(output_path)
    }
}

/// Unlink an earlier output, including a symlink, so the new profile never
/// writes through to another file.
fn remove_existing_output(output_path: &Path) -> Result<()> {
    if fs::symlink_metadata(output_path).is_ok() {
        debug!("Removing existing profile {}", output_path.display());
        fs::remove_file(output_path)?;
    }
    Ok(())
}

fn fill_compiler_path(
    template: &mut ProfileTemplate,
    keys: &[(&str, &str)],
    placeholder: &str,
    tool: &str,
    path: Option<&Path>,
) -> Result<()> {
    for (section, key) in keys {
        let Some(value) = template.get(section, key) else {
            continue;
        };

        let path = path.ok_or_else(|| MesondepError::ToolNotFound(tool.to_string()))?;
        let path = path.to_string_lossy();
        let filled = substitute(value, &[(placeholder, &*path)])?;
        template.set(section, key, filled)?;
    }
    Ok(())
}
