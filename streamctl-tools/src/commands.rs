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

pub mod command_util;
mod consumer_group_commands;
mod kafka_commands;
mod status_command;

use clap::Parser;
use clap::Subcommand;

use crate::cli::pretty_printer::PrettyPrinter;
use crate::cli::validators::CompletionHints;
use crate::core::connection::Connection;
use crate::core::localizer::Localizer;
use crate::core::StreamctlResult;

pub use consumer_group_commands::ListOutcome;

/// A trait that defines the execution behavior for commands.
///
/// Commands write their output to stdout. Everything they need from the
/// outside world comes through the [`CommandContext`].
pub trait CommandExecute {
    /// Executes the command.
    ///
    /// # Parameters
    /// - `ctx`: Connection to the remote APIs, message catalog and the
    ///   pretty-printer used for raw documents.
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()>;
}

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    connection: Connection,
    localizer: Box<dyn Localizer>,
    printer: Box<dyn PrettyPrinter>,
}

impl CommandContext {
    pub fn new(connection: Connection, localizer: Box<dyn Localizer>, printer: Box<dyn PrettyPrinter>) -> Self {
        Self {
            connection,
            localizer,
            printer,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }

    pub fn printer(&self) -> &dyn PrettyPrinter {
        self.printer.as_ref()
    }
}

#[derive(Debug, Parser, Clone, Default)]
pub struct CommonArgs {
    /// Kafka instance to target instead of the selected one
    #[arg(
        long = "instance-id",
        required = false,
        help = "ID of the Kafka instance, defaults to the instance selected in the config"
    )]
    pub instance_id: Option<String>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_parser = CompletionHints::output_formats(),
        help = "Output format: json, yaml or yml"
    )]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Consumer group commands")]
    #[command(name = "consumer-group")]
    ConsumerGroup(consumer_group_commands::ConsumerGroupCommands),

    #[command(subcommand)]
    #[command(about = "Kafka instance commands")]
    Kafka(kafka_commands::KafkaCommands),

    #[command(about = "Show the selected Kafka instance")]
    Status(status_command::StatusCommand),
}

impl CommandExecute for Commands {
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()> {
        match self {
            Commands::ConsumerGroup(value) => value.execute(ctx),
            Commands::Kafka(value) => value.execute(ctx),
            Commands::Status(value) => value.execute(ctx),
        }
    }
}
