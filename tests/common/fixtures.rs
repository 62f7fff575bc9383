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

/// Shared fixtures for profile directories and source trees
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROFILE: &str = "[settings]
os=Linux
os_build=Linux
arch=x86_64
arch_build=x86_64
compiler=gcc
compiler.version=9
compiler.libcxx=libstdc++
build_type=Release
[options]
[build_requires]
[env]
";

pub const MSVC_TEMPLATE: &str = "[settings]
os=Windows
arch=x86_64
compiler=Visual Studio
compiler.version=${compiler_version}
compiler.cppstd=${compiler_cppstd}
compiler.runtime=MD
build_type=Release
";

/// Writes Conan's default profile and returns its path
pub fn write_default_profile(conan_profiles_dir: &Path) -> PathBuf {
    let path = conan_profiles_dir.join("default");
    fs::write(&path, DEFAULT_PROFILE).expect("Failed to write default profile");
    path
}

pub fn write_template(templates_dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = templates_dir.join(name);
    fs::write(&path, contents).expect("Failed to write profile template");
    path
}

/// Creates empty files at the given paths relative to `root`
pub fn create_source_tree(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create source directory");
        }
        fs::write(&path, "").expect("Failed to create source file");
    }
}
