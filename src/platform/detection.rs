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

//! Host platform detection.
//!
//! Raw identifiers reported by the runtime are normalized into the closed
//! [`OperatingSystem`] and [`Architecture`] enumerations. Unrecognized values
//! map to `Unknown`, which callers treat as "no usable match".

use crate::models::{Architecture, OperatingSystem, PlatformDescriptor};
use std::sync::OnceLock;
use sysinfo::System;

/// Cached host platform to avoid repeated system queries.
static CACHED_PLATFORM: OnceLock<PlatformDescriptor> = OnceLock::new();

/// Whether this process runs in 64-bit mode.
pub fn is_64bit_process() -> bool {
    cfg!(target_pointer_width = "64")
}

/// Normalize a raw operating system identifier.
///
/// Windows identifiers are checked first since MSYS and Cygwin report
/// POSIX-like names on Windows hosts.
pub fn normalize_os(raw: &str) -> OperatingSystem {
    let raw = raw.trim().to_lowercase();

    if matches!(raw.as_str(), "nt" | "win32" | "windows" | "msys" | "cygwin") {
        return OperatingSystem::Windows;
    }

    match raw.as_str() {
        "darwin" | "macos" => OperatingSystem::MacOS,
        "linux" => OperatingSystem::Linux,
        other if other.contains("freebsd") => OperatingSystem::FreeBSD,
        other if other.contains("sun") || other.contains("solaris") || other.contains("illumos") => {
            OperatingSystem::SunOS
        }
        _ => OperatingSystem::Unknown,
    }
}

/// Normalize a raw machine identifier given the process bitness.
///
/// 64-bit identifiers seen from a 32-bit process map to the 32-bit variant of
/// the same family.
pub fn normalize_architecture(raw: &str, is_64bit: bool) -> Architecture {
    let raw = raw.trim().to_lowercase();

    match raw.as_str() {
        "x86_64" | "amd64" => {
            if is_64bit {
                Architecture::X86_64
            } else {
                Architecture::X86
            }
        }
        "i386" | "i686" | "i86pc" | "x86" => Architecture::X86,
        other if other == "arm64" || other == "aarch64" || other.contains("armv8") => {
            if is_64bit {
                Architecture::Arm64
            } else {
                Architecture::Arm32
            }
        }
        other if other.contains("armv6") || other.contains("armv7") => Architecture::Arm32,
        _ => Architecture::Unknown,
    }
}

/// Raw machine identifier of the host.
///
/// Prefers the kernel-reported machine name and falls back to the compile
/// target when the system cannot be queried.
pub fn raw_machine() -> String {
    System::cpu_arch().unwrap_or_else(|| std::env::consts::ARCH.to_string())
}

/// Detect the host platform with caching.
pub fn detect_host_platform() -> PlatformDescriptor {
    *CACHED_PLATFORM.get_or_init(|| {
        let raw_os = std::env::consts::OS;
        let raw_arch = raw_machine();
        let os = normalize_os(raw_os);
        let arch = normalize_architecture(&raw_arch, is_64bit_process());
        log::debug!("Host platform: {raw_os}/{raw_arch} normalized to {os}/{arch}");
        PlatformDescriptor::new(os, arch)
    })
}
