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

//! Interactive settings negotiation.
//!
//! The session is a small state machine: the user picks a field by index, then
//! a value for it from a numbered list, until an empty line (or end of input)
//! accepts the current settings.

use crate::error::Result;
use crate::models::CppStd;
use crate::settings::{SettingField, Settings};
use colored::Colorize;
use std::fmt::Display;
use std::io::{BufRead, Write};

const GCC_ON_WINDOWS_WARNING: &str = "/!\\ WARNING: Compiling with GCC on Windows may cause \
                                      compilation issues with dependencies. Use with caution.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationState {
    AwaitingField,
    AwaitingValue(SettingField),
    Done,
}

pub struct Negotiator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Negotiator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the session until the user accepts the settings.
    pub fn run(&mut self, settings: &mut Settings) -> Result<()> {
        let mut state = NegotiationState::AwaitingField;

        loop {
            state = match state {
                NegotiationState::AwaitingField => self.await_field(settings)?,
                NegotiationState::AwaitingValue(field) => self.await_value(field, settings)?,
                NegotiationState::Done => break,
            };
        }

        log::debug!("Negotiated settings: {settings:?}");
        Ok(())
    }

    /// Print the current settings, including the GCC on Windows warning.
    pub fn show_settings(&mut self, settings: &Settings) -> Result<()> {
        for line in settings.describe() {
            writeln!(self.output, "{line}")?;
        }
        if settings.is_gcc_on_windows() {
            writeln!(self.output, "{}", GCC_ON_WINDOWS_WARNING.yellow())?;
        }
        Ok(())
    }

    fn await_field(&mut self, settings: &Settings) -> Result<NegotiationState> {
        writeln!(self.output, "The following settings are in force for Conan:")?;
        self.show_settings(settings)?;
        writeln!(
            self.output,
            "Enter the numbers you wish to change or press enter to finalize the selected \
             configuration."
        )?;

        let Some(selection) = self.prompt()? else {
            return Ok(NegotiationState::Done);
        };
        if selection.is_empty() {
            return Ok(NegotiationState::Done);
        }

        let Some(index) = parse_index(&selection) else {
            writeln!(
                self.output,
                "Invalid selection. The selection must be a non-negative number.\n"
            )?;
            return Ok(NegotiationState::AwaitingField);
        };

        match SettingField::from_index(index) {
            Some(field) => {
                writeln!(self.output, "Changing option {index} - {}...", field.label())?;
                Ok(NegotiationState::AwaitingValue(field))
            }
            None => {
                writeln!(self.output, "<Invalid option; skipping>\n")?;
                Ok(NegotiationState::AwaitingField)
            }
        }
    }

    fn await_value(
        &mut self,
        field: SettingField,
        settings: &mut Settings,
    ) -> Result<NegotiationState> {
        match field {
            SettingField::Architecture => {
                let candidates = settings.allowed_architectures();
                if let Some(arch) = self.pick(&candidates)? {
                    settings.set_arch(arch);
                }
            }
            SettingField::Compiler => {
                let candidates = settings.available_compilers().to_vec();
                if let Some(compiler) = self.pick(&candidates)? {
                    settings.set_compiler(compiler)?;
                }
            }
            SettingField::CppStd => {
                if let Some(cppstd) = self.pick(&CppStd::ALL)? {
                    settings.set_cppstd(cppstd);
                }
            }
        }

        writeln!(self.output)?;
        Ok(NegotiationState::AwaitingField)
    }

    /// Let the user pick one item from a numbered list.
    ///
    /// Re-prompts until a valid index is entered. Returns `None` when the list
    /// is empty or the input ends.
    pub fn pick<T: Display + Copy>(&mut self, items: &[T]) -> Result<Option<T>> {
        if items.is_empty() {
            writeln!(self.output, "No alternatives are available on this host.")?;
            return Ok(None);
        }

        let listing = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("({i}) {item}"))
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            writeln!(self.output, "Select the desired option: {listing}")?;

            let Some(selection) = self.prompt()? else {
                return Ok(None);
            };

            match parse_index(&selection) {
                Some(index) if index < items.len() => return Ok(Some(items[index])),
                _ => {
                    writeln!(
                        self.output,
                        "\"{selection}\" is not a valid selection. The selection must be a valid \
                         number in range [0, {}]",
                        items.len() - 1
                    )?;
                }
            }
        }
    }

    /// Read one trimmed line; `None` at end of input.
    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Plain decimal digits only; signs and whitespace are rejected.
fn parse_index(selection: &str) -> Option<usize> {
    if selection.is_empty() || !selection.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    selection.parse().ok()
}
