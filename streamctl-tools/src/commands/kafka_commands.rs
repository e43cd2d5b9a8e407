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

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::StreamctlResult;

#[derive(Subcommand)]
pub enum KafkaCommands {
    #[command(
        name = "describe",
        about = "View a Kafka instance",
        long_about = r#"Print the Kafka instance as returned by the control plane. The document is passed
through jq when it is installed, otherwise it is indented with two spaces."#
    )]
    Describe(describe_sub_command::DescribeSubCommand),
}

impl CommandExecute for KafkaCommands {
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()> {
        match self {
            KafkaCommands::Describe(value) => value.execute(ctx),
        }
    }
}
