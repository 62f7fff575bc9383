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

use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a test home directory under target/home with a random 8-character name
/// The directory will be automatically cleaned up when the returned guard is dropped
pub struct TestHomeGuard {
    path: PathBuf,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let random_name: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();

        let path = PathBuf::from("target/home").join(random_name);
        fs::create_dir_all(&path).expect("Failed to create test home directory");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Working directory of the simulated Meson project
    pub fn project_dir(&self) -> PathBuf {
        self.path.join("project")
    }

    /// Bundled templates, at the default location inside the project
    pub fn templates_dir(&self) -> PathBuf {
        self.project_dir().join("files").join("conan-profiles")
    }

    pub fn conan_profiles_dir(&self) -> PathBuf {
        self.path.join(".conan").join("profiles")
    }

    /// Directory placed on `PATH` so host compilers stay invisible
    pub fn empty_bin_dir(&self) -> PathBuf {
        self.path.join("bin")
    }

    pub fn setup_project_structure(&self) -> &Self {
        fs::create_dir_all(self.templates_dir()).expect("Failed to create templates directory");
        fs::create_dir_all(self.conan_profiles_dir())
            .expect("Failed to create Conan profiles directory");
        fs::create_dir_all(self.empty_bin_dir()).expect("Failed to create bin directory");
        self
    }
}

impl Drop for TestHomeGuard {
    fn drop(&mut self) {
        if self.path.exists() {
            fs::remove_dir_all(&self.path).unwrap_or_else(|e| {
                eprintln!(
                    "Failed to cleanup test directory {}: {}",
                    self.path.display(),
                    e
                );
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_and_cleans_up_directory() {
        let test_path = {
            let guard = TestHomeGuard::new();
            let path = guard.path().to_path_buf();
            assert!(path.exists());
            assert!(path.starts_with("target/home"));
            path
        };
        assert!(!test_path.exists());
    }

    #[test]
    fn test_setup_project_structure() {
        let guard = TestHomeGuard::new();
        let guard = guard.setup_project_structure();

        assert!(guard.templates_dir().exists());
        assert!(guard.conan_profiles_dir().exists());
        assert!(guard.empty_bin_dir().exists());
    }
}
