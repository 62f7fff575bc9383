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

//! Best-fit profile selection.

use crate::error::Result;
use crate::profile::repository::ProfileRepository;
use crate::profile::template::ProfileTriple;
use crate::settings::Settings;
use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// Path form of [`ProfileSelection::Default`].
pub const DEFAULT_SENTINEL: &str = ".";

/// Outcome of profile selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSelection {
    /// A bundled template matched the settings
    Template(PathBuf),
    /// Nothing matched; Conan's own default profile is used
    Default,
}

impl ProfileSelection {
    /// Interpret a path, treating `.` as the default sentinel.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path == Path::new(DEFAULT_SENTINEL) {
            ProfileSelection::Default
        } else {
            ProfileSelection::Template(path)
        }
    }

    pub fn as_path(&self) -> &Path {
        match self {
            ProfileSelection::Template(path) => path,
            ProfileSelection::Default => Path::new(DEFAULT_SENTINEL),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, ProfileSelection::Default)
    }
}

impl fmt::Display for ProfileSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSelection::Template(path) => match path.file_name() {
                Some(name) => write!(f, "{}", name.to_string_lossy()),
                None => write!(f, "{}", path.display()),
            },
            ProfileSelection::Default => write!(f, "<default>"),
        }
    }
}

/// Pick the template whose `os`, `arch` and `compiler` all equal the settings.
///
/// Templates are visited in file name order and the last match wins. Without a
/// match, or without a selected compiler, the result is
/// [`ProfileSelection::Default`].
pub fn select_best_profile(
    repository: &ProfileRepository,
    settings: &Settings,
) -> Result<ProfileSelection> {
    let Some(wanted) = ProfileTriple::from_settings(settings) else {
        debug!("No compiler selected, falling back to the default profile");
        return Ok(ProfileSelection::Default);
    };

    let mut selection = ProfileSelection::Default;
    for template in repository.templates()? {
        let triple = match template.triple() {
            Ok(triple) => triple,
            Err(e) => {
                warn!("Skipping profile template: {e}");
                continue;
            }
        };

        if triple == wanted {
            debug!("Profile {} matches {wanted:?}", template.path().display());
            selection = ProfileSelection::Template(template.path().to_path_buf());
        }
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Architecture, CompilerKind, CppStd, OperatingSystem, PlatformDescriptor,
    };
    use std::fs;
    use tempfile::TempDir;

    fn profile(os: &str, arch: &str, compiler: &str) -> String {
        format!(
            "[settings]\nos={os}\narch={arch}\ncompiler={compiler}\n\
             compiler.version=${{compiler_version}}\ncompiler.cppstd=${{compiler_cppstd}}\n"
        )
    }

    fn linux_gcc_settings() -> Settings {
        Settings::new(
            PlatformDescriptor::new(OperatingSystem::Linux, Architecture::X86_64),
            vec![CompilerKind::Gcc],
            CppStd::Cpp17,
        )
    }

    #[test]
    fn test_empty_repository_selects_default() {
        let temp_dir = TempDir::new().unwrap();
        let repository = ProfileRepository::new(temp_dir.path());

        let selection = select_best_profile(&repository, &linux_gcc_settings()).unwrap();
        assert_eq!(selection, ProfileSelection::Default);
        assert_eq!(selection.as_path(), Path::new("."));
    }

    #[test]
    fn test_single_match() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("linux-gcc-x86_64"),
            profile("Linux", "x86_64", "gcc"),
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("linux-gcc-armv8"),
            profile("Linux", "armv8", "gcc"),
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("windows-msvc-x86_64"),
            profile("Windows", "x86_64", "Visual Studio"),
        )
        .unwrap();

        let repository = ProfileRepository::new(temp_dir.path());
        let selection = select_best_profile(&repository, &linux_gcc_settings()).unwrap();

        assert_eq!(
            selection,
            ProfileSelection::Template(temp_dir.path().join("linux-gcc-x86_64"))
        );
        assert_eq!(selection.to_string(), "linux-gcc-x86_64");
    }

    #[test]
    fn test_last_match_wins() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a-linux-gcc", "b-linux-gcc", "c-linux-gcc"] {
            fs::write(temp_dir.path().join(name), profile("Linux", "x86_64", "gcc")).unwrap();
        }

        let repository = ProfileRepository::new(temp_dir.path());
        let selection = select_best_profile(&repository, &linux_gcc_settings()).unwrap();

        assert_eq!(
            selection,
            ProfileSelection::Template(temp_dir.path().join("c-linux-gcc"))
        );
    }

    #[test]
    fn test_partial_match_is_not_selected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("linux-x86"), profile("Linux", "x86", "gcc")).unwrap();

        let repository = ProfileRepository::new(temp_dir.path());
        let selection = select_best_profile(&repository, &linux_gcc_settings()).unwrap();

        assert!(selection.is_default());
    }

    #[test]
    fn test_comparison_is_exact() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("lowercase"), profile("linux", "x86_64", "gcc")).unwrap();

        let repository = ProfileRepository::new(temp_dir.path());
        let selection = select_best_profile(&repository, &linux_gcc_settings()).unwrap();

        assert!(selection.is_default());
    }

    #[test]
    fn test_templates_without_triple_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a-match"), profile("Linux", "x86_64", "gcc")).unwrap();
        fs::write(temp_dir.path().join("b-incomplete"), "[settings]\nos=Linux\n").unwrap();

        let repository = ProfileRepository::new(temp_dir.path());
        let selection = select_best_profile(&repository, &linux_gcc_settings()).unwrap();

        assert_eq!(
            selection,
            ProfileSelection::Template(temp_dir.path().join("a-match"))
        );
    }

    #[test]
    fn test_no_compiler_selects_default() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("linux"), profile("Linux", "x86_64", "UNKNOWN")).unwrap();

        let settings = Settings::new(
            PlatformDescriptor::new(OperatingSystem::Linux, Architecture::X86_64),
            Vec::new(),
            CppStd::Cpp17,
        );
        let repository = ProfileRepository::new(temp_dir.path());

        assert!(select_best_profile(&repository, &settings).unwrap().is_default());
    }

    #[test]
    fn test_selection_path_round_trip() {
        assert_eq!(ProfileSelection::from_path("."), ProfileSelection::Default);
        assert_eq!(
            ProfileSelection::from_path("profiles/linux"),
            ProfileSelection::Template(PathBuf::from("profiles/linux"))
        );
        assert_eq!(ProfileSelection::Default.to_string(), "<default>");
    }
}
