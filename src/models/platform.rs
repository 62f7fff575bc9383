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

/// Host operating system, named after Conan's `os` setting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Windows,
    MacOS,
    Linux,
    FreeBSD,
    SunOS,
    Unknown,
}

impl OperatingSystem {
    /// Value of the `os` key in a Conan profile
    pub fn conan_name(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOS => "Macos",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::FreeBSD => "FreeBSD",
            OperatingSystem::SunOS => "SunOS",
            OperatingSystem::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for OperatingSystem {
    type Err = MesondepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(OperatingSystem::Windows),
            "macos" => Ok(OperatingSystem::MacOS),
            "linux" => Ok(OperatingSystem::Linux),
            "freebsd" => Ok(OperatingSystem::FreeBSD),
            "sunos" => Ok(OperatingSystem::SunOS),
            "unknown" => Ok(OperatingSystem::Unknown),
            _ => Err(MesondepError::InvalidArgument(format!(
                "Unknown operating system: {s}"
            ))),
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let os = match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOS => "MacOS",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::FreeBSD => "FreeBSD",
            OperatingSystem::SunOS => "SunOS",
            OperatingSystem::Unknown => "UNKNOWN",
        };
        write!(f, "{os}")
    }
}

/// CPU architecture, named after Conan's `arch` setting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    X86_64,
    X86,
    Arm64,
    Arm32,
    Unknown,
}

impl Architecture {
    /// Value of the `arch` key in a Conan profile
    pub fn conan_name(&self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86_64",
            Architecture::X86 => "x86",
            Architecture::Arm64 => "armv8",
            Architecture::Arm32 => "armv7",
            Architecture::Unknown => "UNKNOWN",
        }
    }

    pub fn is_64bit(&self) -> bool {
        matches!(self, Architecture::X86_64 | Architecture::Arm64)
    }

    pub fn is_x86_family(&self) -> bool {
        matches!(self, Architecture::X86_64 | Architecture::X86)
    }

    pub fn is_arm_family(&self) -> bool {
        matches!(self, Architecture::Arm64 | Architecture::Arm32)
    }
}

impl FromStr for Architecture {
    type Err = MesondepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "x86_64" => Ok(Architecture::X86_64),
            "x86" => Ok(Architecture::X86),
            "arm64" | "armv8" => Ok(Architecture::Arm64),
            "arm32" | "armv7" => Ok(Architecture::Arm32),
            "unknown" => Ok(Architecture::Unknown),
            _ => Err(MesondepError::InvalidArgument(format!(
                "Unknown architecture: {s}"
            ))),
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arch = match self {
            Architecture::X86_64 => "x86_64",
            Architecture::X86 => "x86",
            Architecture::Arm64 => "arm64",
            Architecture::Arm32 => "arm32",
            Architecture::Unknown => "UNKNOWN",
        };
        write!(f, "{arch}")
    }
}

/// Operating system and architecture of the host, derived once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub os: OperatingSystem,
    pub arch: Architecture,
}

impl PlatformDescriptor {
    pub fn new(os: OperatingSystem, arch: Architecture) -> Self {
        Self { os, arch }
    }

    pub fn is_windows(&self) -> bool {
        self.os == OperatingSystem::Windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operating_system_conan_names() {
        assert_eq!(OperatingSystem::Windows.conan_name(), "Windows");
        assert_eq!(OperatingSystem::MacOS.conan_name(), "Macos");
        assert_eq!(OperatingSystem::Linux.conan_name(), "Linux");
        assert_eq!(OperatingSystem::FreeBSD.conan_name(), "FreeBSD");
        assert_eq!(OperatingSystem::SunOS.conan_name(), "SunOS");
    }

    #[test]
    fn test_architecture_conan_names() {
        assert_eq!(Architecture::X86_64.conan_name(), "x86_64");
        assert_eq!(Architecture::X86.conan_name(), "x86");
        assert_eq!(Architecture::Arm64.conan_name(), "armv8");
        assert_eq!(Architecture::Arm32.conan_name(), "armv7");
    }

    #[test]
    fn test_architecture_parsing() {
        assert_eq!(
            Architecture::from_str("x86_64").unwrap(),
            Architecture::X86_64
        );
        assert_eq!(Architecture::from_str("armv8").unwrap(), Architecture::Arm64);
        assert_eq!(Architecture::from_str("ARM64").unwrap(), Architecture::Arm64);
        assert_eq!(Architecture::from_str("armv7").unwrap(), Architecture::Arm32);
        assert!(Architecture::from_str("sparc").is_err());
    }

    #[test]
    fn test_operating_system_parsing() {
        assert_eq!(
            OperatingSystem::from_str("Macos").unwrap(),
            OperatingSystem::MacOS
        );
        assert_eq!(
            OperatingSystem::from_str("linux").unwrap(),
            OperatingSystem::Linux
        );
        assert!(OperatingSystem::from_str("plan9").is_err());
    }

    #[test]
    fn test_architecture_families() {
        assert!(Architecture::X86_64.is_64bit());
        assert!(Architecture::X86_64.is_x86_family());
        assert!(!Architecture::X86.is_64bit());
        assert!(Architecture::Arm32.is_arm_family());
        assert!(!Architecture::Unknown.is_x86_family());
        assert!(!Architecture::Unknown.is_arm_family());
    }

    #[test]
    fn test_display() {
        assert_eq!(OperatingSystem::MacOS.to_string(), "MacOS");
        assert_eq!(Architecture::Arm64.to_string(), "arm64");
        assert_eq!(Architecture::Unknown.to_string(), "UNKNOWN");
    }
}
