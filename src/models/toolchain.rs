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

use crate::error::{MesondepError, Result};
use std::fmt;
use std::str::FromStr;

/// Compiler family, named after Conan's `compiler` setting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerKind {
    Gcc,
    Msvc,
    Unknown,
}

impl CompilerKind {
    /// Value of the `compiler` key in a Conan profile
    pub fn conan_name(&self) -> &'static str {
        match self {
            CompilerKind::Gcc => "gcc",
            CompilerKind::Msvc => "Visual Studio",
            CompilerKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CompilerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompilerKind::Gcc => "GCC",
            CompilerKind::Msvc => "MSVC",
            CompilerKind::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// C++ language standard, tokens as accepted by Conan's `compiler.cppstd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CppStd {
    Cpp98,
    Cpp03,
    Cpp11,
    Cpp14,
    Cpp17,
    Cpp20,
    Cpp23,
    None,
}

impl CppStd {
    pub const ALL: [CppStd; 8] = [
        CppStd::Cpp98,
        CppStd::Cpp03,
        CppStd::Cpp11,
        CppStd::Cpp14,
        CppStd::Cpp17,
        CppStd::Cpp20,
        CppStd::Cpp23,
        CppStd::None,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            CppStd::Cpp98 => "98",
            CppStd::Cpp03 => "03",
            CppStd::Cpp11 => "11",
            CppStd::Cpp14 => "14",
            CppStd::Cpp17 => "17",
            CppStd::Cpp20 => "20",
            CppStd::Cpp23 => "23",
            CppStd::None => "None",
        }
    }
}

impl FromStr for CppStd {
    type Err = MesondepError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let token = normalized
            .strip_prefix("c++")
            .or_else(|| normalized.strip_prefix("cpp"))
            .unwrap_or(normalized.as_str());

        CppStd::ALL
            .iter()
            .find(|candidate| candidate.token().eq_ignore_ascii_case(token))
            .copied()
            .ok_or_else(|| MesondepError::InvalidArgument(format!("Unknown C++ standard: {s}")))
    }
}

impl fmt::Display for CppStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CppStd::None => write!(f, "None"),
            other => write!(f, "C++{}", other.token()),
        }
    }
}

/// A compiler found on the host together with its reported version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainDescriptor {
    pub kind: CompilerKind,
    pub version: String,
}

impl ToolchainDescriptor {
    pub fn new(kind: CompilerKind, version: impl Into<String>) -> Self {
        Self {
            kind,
            version: version.into(),
        }
    }

    /// Leading numeric component of the version, e.g. "11" for "11.2.0".
    pub fn major_version(&self) -> &str {
        major_version(&self.version)
    }
}

pub fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_conan_names() {
        assert_eq!(CompilerKind::Gcc.conan_name(), "gcc");
        assert_eq!(CompilerKind::Msvc.conan_name(), "Visual Studio");
        assert_eq!(CompilerKind::Gcc.to_string(), "GCC");
    }

    #[test]
    fn test_cppstd_parsing() {
        assert_eq!(CppStd::from_str("17").unwrap(), CppStd::Cpp17);
        assert_eq!(CppStd::from_str("c++20").unwrap(), CppStd::Cpp20);
        assert_eq!(CppStd::from_str("C++03").unwrap(), CppStd::Cpp03);
        assert_eq!(CppStd::from_str("None").unwrap(), CppStd::None);
        assert!(CppStd::from_str("42").is_err());
    }

    #[test]
    fn test_cppstd_display_and_token() {
        assert_eq!(CppStd::Cpp17.to_string(), "C++17");
        assert_eq!(CppStd::Cpp17.token(), "17");
        assert_eq!(CppStd::None.to_string(), "None");
        assert_eq!(CppStd::None.token(), "None");
    }

    #[test]
    fn test_major_version() {
        assert_eq!(major_version("11.2.0"), "11");
        assert_eq!(major_version("17.4.33213.308"), "17");
        assert_eq!(major_version("0"), "0");
        assert_eq!(
            ToolchainDescriptor::new(CompilerKind::Gcc, "13.1").major_version(),
            "13"
        );
    }
}
