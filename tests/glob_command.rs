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

#[path = "common/mod.rs"]
mod common;

use assert_cmd::Command;
use common::{TestHomeGuard, fixtures};
use predicates::prelude::*;
use std::fs;

fn mesondep(guard: &TestHomeGuard) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mesondep"));
    cmd.current_dir(guard.path());
    cmd
}

#[test]
fn test_glob_single_match() {
    let guard = TestHomeGuard::new();
    fixtures::create_source_tree(guard.path(), &["include/a.h", "include/b.cpp"]);

    let output = mesondep(&guard)
        .args(["glob", "include", "*.h"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("a.h"));
}

#[test]
fn test_glob_multiple_patterns_recursive() {
    let guard = TestHomeGuard::new();
    fixtures::create_source_tree(
        guard.path(),
        &["src/main.cpp", "src/util/strings.cpp", "src/util/strings.hpp"],
    );

    mesondep(&guard)
        .args(["glob", "src", "*.cpp *.hpp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.cpp"))
        .stdout(predicate::str::contains("strings.cpp"))
        .stdout(predicate::str::contains("strings.hpp"));
}

#[test]
fn test_glob_empty_result() {
    let guard = TestHomeGuard::new();
    fixtures::create_source_tree(guard.path(), &["src/main.cpp"]);

    mesondep(&guard)
        .args(["glob", "src", "*.h"])
        .assert()
        .success()
        .stdout("<EMPTY>\n");
}

#[test]
fn test_glob_missing_directory() {
    let guard = TestHomeGuard::new();
    fs::create_dir_all(guard.path()).unwrap();

    mesondep(&guard)
        .args(["glob", "nowhere", "*.h"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_glob_requires_arguments() {
    let guard = TestHomeGuard::new();

    mesondep(&guard).args(["glob", "src"]).assert().failure();
}
