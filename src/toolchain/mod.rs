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

//! Compiler discovery on the host.

pub mod gcc;
pub mod msvc;

use crate::models::{CompilerKind, OperatingSystem, ToolchainDescriptor};
use crate::platform::PathSearch;
use log::debug;
use msvc::{VisualStudioLocator, VsInstallation, VsWhereLocator};
use std::cell::OnceCell;

/// Version reported when a compiler is not installed.
pub const VERSION_NOT_FOUND: &str = "0";

pub const GCC_C_COMPILER: &str = "gcc";
pub const GCC_CXX_COMPILER: &str = "g++";

pub struct ToolchainProbe {
    search: PathSearch,
    os: OperatingSystem,
    vs_locator: Box<dyn VisualStudioLocator>,
    vs_installations: OnceCell<Vec<VsInstallation>>,
}

impl ToolchainProbe {
    pub fn new(
        search: PathSearch,
        os: OperatingSystem,
        vs_locator: Box<dyn VisualStudioLocator>,
    ) -> Self {
        Self {
            search,
            os,
            vs_locator,
            vs_installations: OnceCell::new(),
        }
    }

    /// Probe using `vswhere` for Visual Studio discovery.
    pub fn for_host(search: PathSearch, os: OperatingSystem) -> Self {
        Self::new(search, os, Box::new(VsWhereLocator::new()))
    }

    pub fn search(&self) -> &PathSearch {
        &self.search
    }

    /// Visual Studio installations, queried once. Always empty off Windows.
    pub fn vs_installations(&self) -> &[VsInstallation] {
        self.vs_installations.get_or_init(|| {
            if self.os == OperatingSystem::Windows {
                self.vs_locator.installations()
            } else {
                Vec::new()
            }
        })
    }

    /// Compilers usable on this host, GCC first.
    ///
    /// GCC requires both the C and C++ drivers on the search path. MSVC is only
    /// considered on Windows hosts.
    pub fn list_available_compilers(&self) -> Vec<CompilerKind> {
        let mut compilers = Vec::new();

        if self.search.contains(GCC_C_COMPILER) && self.search.contains(GCC_CXX_COMPILER) {
            compilers.push(CompilerKind::Gcc);
        }

        if !self.vs_installations().is_empty() {
            compilers.push(CompilerKind::Msvc);
        }

        debug!("Available compilers: {compilers:?}");
        compilers
    }

    /// Version string of the given compiler, or [`VERSION_NOT_FOUND`].
    pub fn get_version(&self, kind: CompilerKind) -> String {
        let version = match kind {
            CompilerKind::Gcc => self
                .search
                .find_first(GCC_C_COMPILER)
                .and_then(|gcc| gcc::query_version(&gcc)),
            CompilerKind::Msvc => self
                .vs_installations()
                .first()
                .map(|installation| installation.version.clone()),
            CompilerKind::Unknown => None,
        };

        version.unwrap_or_else(|| VERSION_NOT_FOUND.to_string())
    }

    /// Descriptor for every available compiler.
    pub fn detect(&self) -> Vec<ToolchainDescriptor> {
        self.list_available_compilers()
            .into_iter()
            .map(|kind| ToolchainDescriptor::new(kind, self.get_version(kind)))
            .collect()
    }
}
