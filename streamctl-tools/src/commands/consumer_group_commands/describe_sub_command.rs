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

use std::io;
use std::io::Write;

use clap::Parser;
use streamctl_error::RenderError;
use streamctl_error::TemplateData;

use crate::cli::formatters::RenderMode;
use crate::cli::pretty_printer::PrettyPrinter;
use crate::cli::render;
use crate::cli::validators;
use crate::commands::command_util;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::api::KafkaAdminApi;
use crate::core::consumer_group::partitions_with_lag;
use crate::core::consumer_group::ConsumerGroupService;
use crate::core::localizer::Localizer;
use crate::core::StreamctlResult;

#[derive(Debug, Clone, Parser)]
pub struct DescribeSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    /// Consumer group ID
    #[arg(value_name = "ID", help = "ID of the consumer group")]
    id: String,
}

/// Fetch one consumer group and render it
///
/// The default mode prints the group id, member count and lagging partition
/// count, a blank line, then one table row per member.
pub fn run_describe(
    out: &mut dyn Write,
    api: &dyn KafkaAdminApi,
    instance_name: &str,
    group_id: &str,
    mode: RenderMode,
    localizer: &dyn Localizer,
    printer: &dyn PrettyPrinter,
) -> StreamctlResult<()> {
    let response = ConsumerGroupService::describe(api, instance_name, group_id)?;

    if mode == RenderMode::Default {
        let group = &response.data;
        let header = [
            ("consumerGroup.describe.output.id", "ID", group.group_id.clone()),
            (
                "consumerGroup.describe.output.activeMembers",
                "ActiveMembers",
                group.active_members().to_string(),
            ),
            (
                "consumerGroup.describe.output.partitionsWithLag",
                "LaggingPartitions",
                partitions_with_lag(&group.consumers).to_string(),
            ),
        ];
        for (message_id, key, value) in header {
            let line = localizer.localize(message_id, &TemplateData::from([(key, value)]));
            writeln!(out, "{line}").map_err(RenderError::from)?;
        }
        writeln!(out).map_err(RenderError::from)?;
    }
    render::render(out, &response, mode, printer)?;
    Ok(())
}

impl CommandExecute for DescribeSubCommand {
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()> {
        let mode = validators::validate_output(self.common_args.output.as_deref())?;
        validators::validate_consumer_group_id(&self.id)?;

        let instance = command_util::selected_instance(ctx, self.common_args.instance_id.as_deref())?;
        let api = ctx.connection().kafka_admin(&instance)?;

        let mut stdout = io::stdout().lock();
        run_describe(
            &mut stdout,
            &api,
            instance.display_name(),
            &self.id,
            mode,
            ctx.localizer(),
            ctx.printer(),
        )
    }
}
