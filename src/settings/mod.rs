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

//! Build settings negotiated before a Conan profile is generated.

pub mod negotiator;

use crate::error::{MesondepError, Result};
use crate::models::{
    Architecture, CompilerKind, CppStd, OperatingSystem, PlatformDescriptor,
};

pub use negotiator::{NegotiationState, Negotiator};

/// A field of [`Settings`] the user may change, by menu index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Architecture,
    Compiler,
    CppStd,
}

impl SettingField {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SettingField::Architecture),
            1 => Some(SettingField::Compiler),
            2 => Some(SettingField::CppStd),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingField::Architecture => "architecture",
            SettingField::Compiler => "compiler",
            SettingField::CppStd => "C++ standard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    platform: PlatformDescriptor,
    arch: Architecture,
    available_compilers: Vec<CompilerKind>,
    compiler: Option<CompilerKind>,
    cppstd: CppStd,
}

impl Settings {
    /// Start from detected values.
    ///
    /// The last available compiler is preselected, so MSVC wins over GCC on
    /// Windows hosts that have both.
    pub fn new(
        platform: PlatformDescriptor,
        available_compilers: Vec<CompilerKind>,
        cppstd: CppStd,
    ) -> Self {
        let compiler = available_compilers.last().copied();
        Self {
            platform,
            arch: platform.arch,
            available_compilers,
            compiler,
            cppstd,
        }
    }

    pub fn platform(&self) -> PlatformDescriptor {
        self.platform
    }

    pub fn os(&self) -> OperatingSystem {
        self.platform.os
    }

    pub fn arch(&self) -> Architecture {
        self.arch
    }

    pub fn available_compilers(&self) -> &[CompilerKind] {
        &self.available_compilers
    }

    /// Selected compiler; `None` when no compiler was detected.
    pub fn compiler(&self) -> Option<CompilerKind> {
        self.compiler
    }

    pub fn cppstd(&self) -> CppStd {
        self.cppstd
    }

    pub fn set_arch(&mut self, arch: Architecture) {
        self.arch = arch;
    }

    /// Select a compiler. Only detected compilers are accepted.
    pub fn set_compiler(&mut self, compiler: CompilerKind) -> Result<()> {
        if !self.available_compilers.contains(&compiler) {
            return Err(MesondepError::ValidationError(format!(
                "Compiler {compiler} is not available on this host"
            )));
        }
        self.compiler = Some(compiler);
        Ok(())
    }

    pub fn set_cppstd(&mut self, cppstd: CppStd) {
        self.cppstd = cppstd;
    }

    /// Architectures the user may switch to on this host.
    pub fn allowed_architectures(&self) -> Vec<Architecture> {
        allowed_architectures(self.platform)
    }

    pub fn is_gcc_on_windows(&self) -> bool {
        self.platform.is_windows() && self.compiler == Some(CompilerKind::Gcc)
    }

    /// Menu lines describing the current settings.
    pub fn describe(&self) -> Vec<String> {
        let available = if self.available_compilers.is_empty() {
            "<none>".to_string()
        } else {
            self.available_compilers
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let compiler = self
            .compiler
            .map(|c| c.to_string())
            .unwrap_or_else(|| CompilerKind::Unknown.to_string());

        vec![
            format!("\tOS: {}", self.platform.os),
            format!("\t(0) Arch: {}", self.arch),
            format!("\tAvailable compilers: {available}"),
            format!("\t(1) Selected compiler: {compiler}"),
            format!("\t(2) C++ standard: {}", self.cppstd),
        ]
    }
}

/// Architectures offered for a host.
///
/// Non-macOS hosts get the 32-bit variant of their family; 64-bit hosts also
/// get the 64-bit variant. macOS has no 32-bit targets.
pub fn allowed_architectures(host: PlatformDescriptor) -> Vec<Architecture> {
    let mut allowed = Vec::new();

    if host.os != OperatingSystem::MacOS {
        if host.arch.is_x86_family() {
            allowed.push(Architecture::X86);
        } else if host.arch.is_arm_family() {
            allowed.push(Architecture::Arm32);
        }
    }

    if host.arch.is_64bit() {
        allowed.push(if host.arch.is_x86_family() {
            Architecture::X86_64
        } else {
            Architecture::Arm64
        });
    }

    allowed
}
