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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MesondepError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to parse profile {path}: {message}")]
    ProfileParse { path: String, message: String },

    #[error("Profile {path} is missing key '{key}' in section [{section}]")]
    ProfileKeyMissing {
        path: String,
        section: String,
        key: String,
    },

    #[error("Unresolved placeholder '${{{placeholder}}}' in value '{value}'")]
    UnresolvedPlaceholder { placeholder: String, value: String },

    #[error("Tool '{0}' not found in PATH")]
    ToolNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("System error: {0}")]
    SystemError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error(transparent)]
    Glob(#[from] globset::Error),
}

pub type Result<T> = std::result::Result<T, MesondepError>;
