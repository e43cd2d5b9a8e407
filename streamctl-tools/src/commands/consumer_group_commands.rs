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

mod describe_sub_command;
mod list_sub_command;

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::StreamctlResult;

pub use list_sub_command::ListOutcome;

#[derive(Subcommand)]
pub enum ConsumerGroupCommands {
    #[command(
        name = "list",
        about = "List consumer groups",
        long_about = r#"List the consumer groups of a Kafka instance together with their active members and
the number of partitions that are lagging behind."#
    )]
    List(list_sub_command::ListSubCommand),

    #[command(
        name = "describe",
        about = "Describe a consumer group",
        long_about = r#"Show the members of a consumer group with the current offset, log end offset and
lag of every partition they consume."#
    )]
    Describe(describe_sub_command::DescribeSubCommand),
}

impl CommandExecute for ConsumerGroupCommands {
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()> {
        match self {
            ConsumerGroupCommands::List(value) => value.execute(ctx),
            ConsumerGroupCommands::Describe(value) => value.execute(ctx),
        }
    }
}
