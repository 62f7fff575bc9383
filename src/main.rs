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

use clap::{Parser, Subcommand};
use mesondep::commands::conan_init::ConanInitCommand;
use mesondep::commands::glob::GlobCommand;
use mesondep::commands::msvc_locate::MsvcLocateCommand;
use mesondep::commands::which::WhichCommand;
use mesondep::commands::xxd::XxdCommand;
use mesondep::config::new_mesondep_config;
use mesondep::error::{MesondepError, Result, format_error_with_color, get_exit_code};
use mesondep::logging;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mesondep")]
#[command(author, version, about = "Build helpers for Meson projects with Conan dependencies", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the toolchain and generate a Conan profile
    #[command(long_about = "Detect the toolchain and generate a Conan profile

Probes the host OS, architecture and compilers, lets you adjust the settings,
picks the best matching bundled profile template and writes it to the Conan
profile directory as 'conan-generated'.

Examples:
  mesondep conan-init
  mesondep conan-init --yes
  mesondep conan-init --profiles-dir files/conan-profiles")]
    ConanInit {
        /// Directory containing the bundled profile templates
        #[arg(long, value_name = "DIR")]
        profiles_dir: Option<PathBuf>,

        /// Conan's profile directory (defaults to ~/.conan/profiles)
        #[arg(long, value_name = "DIR")]
        conan_profiles_dir: Option<PathBuf>,

        /// Accept the detected settings without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// List files below a directory matching glob patterns
    Glob {
        /// Directory to search, relative to the working directory
        directory: PathBuf,

        /// Space-delimited patterns (e.g., "*.h *.hpp")
        patterns: String,
    },

    /// Print the location of every vcvarsall.bat
    MsvcLocate,

    /// Print a file as a C byte array
    Xxd {
        /// File to embed
        file: PathBuf,
    },

    /// Show every match for an executable on the search path
    #[command(visible_alias = "w")]
    Which {
        /// Executable name
        name: String,
    },
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn exit_with_error(error: &MesondepError) -> ! {
    eprintln!(
        "{}",
        format_error_with_color(error, io::stderr().is_terminal())
    );
    std::process::exit(get_exit_code(error));
}

fn main() {
    let cli = Cli::parse();

    setup_logger(&cli);

    let config = match new_mesondep_config() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };

    let result: Result<()> = (|| match cli.command {
        Commands::ConanInit {
            profiles_dir,
            conan_profiles_dir,
            yes,
        } => {
            let command = ConanInitCommand::new(&config)?;
            command.execute(
                profiles_dir.as_deref(),
                conan_profiles_dir.as_deref(),
                yes,
            )
        }
        Commands::Glob {
            directory,
            patterns,
        } => {
            let command = GlobCommand::new(&config)?;
            command.execute(&directory, &patterns)
        }
        Commands::MsvcLocate => {
            let command = MsvcLocateCommand::new()?;
            command.execute()
        }
        Commands::Xxd { file } => {
            let command = XxdCommand::new(&config)?;
            command.execute(&file)
        }
        Commands::Which { name } => {
            let command = WhichCommand::new(&config)?;
            command.execute(&name)
        }
    })();

    if let Err(e) = result {
        exit_with_error(&e);
    }
}
