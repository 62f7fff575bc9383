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

//! Renders files as C byte arrays, the same shape `xxd -i` produces.

use crate::error::{MesondepError, Result};
use std::fs;
use std::path::Path;

const BYTES_PER_LINE: usize = 12;

/// Identifier for the array, with every non-alphanumeric character of the
/// path replaced by `_`.
pub fn array_name(path: &str) -> String {
    path.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Render `bytes` as an `unsigned char` array followed by its length.
pub fn to_c_array(name: &str, bytes: &[u8]) -> String {
    let mut output = format!("unsigned char {name}[] = {{");

    let lines: Vec<String> = bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|byte| format!("0x{byte:02x}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    for (index, line) in lines.iter().enumerate() {
        let separator = if index + 1 < lines.len() { "," } else { "" };
        output.push_str(&format!("\n\t{line}{separator}"));
    }

    output.push_str(&format!(
        "\n}};\nunsigned int {name}_len = {};",
        bytes.len()
    ));
    output
}

/// Read `path` and render it as an array called `name`.
pub fn embed_file(path: &Path, name: &str) -> Result<String> {
    if !path.is_file() {
        return Err(MesondepError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    Ok(to_c_array(name, &bytes))
}
