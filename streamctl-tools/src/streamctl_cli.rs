// Copyright 2023 The Streamctl Authors
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

use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;
use tracing::debug;

use crate::cli::pretty_printer::JqPrinter;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::core::config::CliConfig;
use crate::core::connection::Connection;
use crate::core::localizer::localize_error;
use crate::core::localizer::Localizer;
use crate::core::localizer::MessageCatalog;
use crate::core::StreamctlResult;
use crate::log;
use crate::ui::output;

const BIN_NAME: &str = "streamctl";

#[derive(Parser)]
#[command(name = "streamctl")]
#[command(about = "Manage Kafka instances and their consumer groups", long_about = None, version)]
pub struct StreamctlCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true, help = "Enable verbose logging")]
    verbose: bool,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl StreamctlCli {
    pub fn handle(&self) -> ExitCode {
        log::init_logger(self.verbose);

        // Handle completion generation
        if let Some(shell) = &self.completion {
            return Self::generate_completion(shell);
        }

        let Some(commands) = &self.commands else {
            output::print_error("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        };

        let catalog = MessageCatalog::english();
        match Self::run(commands, catalog.clone()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                debug!(error = ?e, "command failed");
                output::print_error(&localize_error(&catalog, &e));
                ExitCode::FAILURE
            }
        }
    }

    fn run(commands: &Commands, localizer: impl Localizer + 'static) -> StreamctlResult<()> {
        let config = CliConfig::load()?;
        let ctx = CommandContext::new(
            Connection::new(config),
            Box::new(localizer),
            Box::new(JqPrinter::detect()),
        );
        commands.execute(&ctx)
    }

    fn generate_completion(shell: &str) -> ExitCode {
        let mut cmd = StreamctlCli::command();
        match shell.to_lowercase().as_str() {
            "bash" => generate(Bash, &mut cmd, BIN_NAME, &mut std::io::stdout()),
            "zsh" => generate(Zsh, &mut cmd, BIN_NAME, &mut std::io::stdout()),
            "fish" => generate(Fish, &mut cmd, BIN_NAME, &mut std::io::stdout()),
            _ => {
                output::print_error(&format!("Unsupported shell: {shell}"));
                eprintln!("Supported shells: bash, zsh, fish");
                return ExitCode::FAILURE;
            }
        }
        ExitCode::SUCCESS
    }
}
