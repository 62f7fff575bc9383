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
use crate::models::PlatformDescriptor;
use crate::platform::{PathSearch, detect_host_platform};
use crate::profile::{
    ProfileMaterializer, ProfileRepository, ProfileSelection, Substitutions, select_best_profile,
};
use crate::settings::{Negotiator, Settings};
use crate::toolchain::ToolchainProbe;
use colored::Colorize;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const NO_PROFILE_WARNING: &str = "/!\\ WARNING: An appropriate Conan profile was unable to be \
                                  selected. The default one generated by Conan during the `conan \
                                  config init` step will be used instead.";

/// Directories a `conan-init` run reads templates from and writes into.
#[derive(Debug, Clone)]
pub struct ProfileDirs {
    pub templates: PathBuf,
    pub conan: PathBuf,
}

pub struct ConanInitCommand<'a> {
    config: &'a MesondepConfig,
}

impl<'a> ConanInitCommand<'a> {
    pub fn new(config: &'a MesondepConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        profiles_dir: Option<&Path>,
        conan_profiles_dir: Option<&Path>,
        assume_yes: bool,
    ) -> Result<()> {
        let dirs = ProfileDirs {
            templates: profiles_dir
                .map(|dir| self.config.working_dir().join(dir))
                .unwrap_or_else(|| self.config.profiles_dir()),
            conan: conan_profiles_dir
                .map(|dir| self.config.working_dir().join(dir))
                .unwrap_or_else(|| self.config.conan_profiles_dir()),
        };

        let host = detect_host_platform();
        let search = PathSearch::from_path_env(self.config.working_dir());
        let probe = ToolchainProbe::for_host(search, host.os);

        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(host, &probe, &dirs, assume_yes, stdin.lock(), stdout.lock())?;
        Ok(())
    }

    /// Detect, negotiate, select and write the profile. Returns the written path.
    pub fn run<R: BufRead, W: Write>(
        &self,
        host: PlatformDescriptor,
        probe: &ToolchainProbe,
        dirs: &ProfileDirs,
        assume_yes: bool,
        input: R,
        mut output: W,
    ) -> Result<PathBuf> {
        let mut settings = Settings::new(
            host,
            probe.list_available_compilers(),
            self.config.default_cppstd()?,
        );
        info!("Detected settings: {settings:?}");

        write!(output, "OS and compiler settings auto-detected. ")?;
        if assume_yes {
            writeln!(output)?;
        } else {
            Negotiator::new(input, &mut output).run(&mut settings)?;
        }

        writeln!(output, "\nConfiguring Conan with the following settings:")?;
        Negotiator::new(io::empty(), &mut output).show_settings(&settings)?;
        writeln!(output)?;

        let repository = ProfileRepository::new(&dirs.templates);
        let selection = select_best_profile(&repository, &settings)?;
        if selection == ProfileSelection::Default {
            writeln!(output, "{}", NO_PROFILE_WARNING.yellow())?;
        }
        writeln!(
            output,
            "The following Conan profile has been selected based on the given settings: \
             {selection}"
        )?;
        writeln!(
            output,
            "If the above profile isn't correct, simply rerun this script again."
        )?;

        let substitutions = Substitutions::from_settings(&settings, probe);
        let materializer = ProfileMaterializer::from_config(self.config);
        let written = materializer.materialize(&selection, &dirs.conan, &substitutions)?;

        writeln!(
            output,
            "Profile copied. It can be found under the following path: {}",
            written.display()
        )?;
        Ok(written)
    }
}
