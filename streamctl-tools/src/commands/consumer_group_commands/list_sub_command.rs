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
use streamctl_error::TemplateData;
use tracing::debug;

use crate::cli::formatters::RenderMode;
use crate::cli::pretty_printer::PrettyPrinter;
use crate::cli::render;
use crate::cli::validators;
use crate::commands::command_util;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::api::KafkaAdminApi;
use crate::core::consumer_group::ConsumerGroupService;
use crate::core::StreamctlResult;
use crate::ui::output;

const DEFAULT_LIMIT: i32 = 1000;

#[derive(Debug, Clone, Parser)]
pub struct ListSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    /// Page size
    #[arg(
        long = "limit",
        default_value_t = DEFAULT_LIMIT,
        allow_negative_numbers = true,
        help = "Maximum number of consumer groups to list"
    )]
    limit: i32,
}

/// Whether anything was written for a list call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The instance has no consumer groups; nothing was written
    Empty,
    Printed,
}

/// Fetch the consumer groups and render them
pub fn run_list(
    out: &mut dyn Write,
    api: &dyn KafkaAdminApi,
    instance_name: &str,
    limit: i32,
    mode: RenderMode,
    printer: &dyn PrettyPrinter,
) -> StreamctlResult<ListOutcome> {
    let response = ConsumerGroupService::list(api, instance_name, limit)?;
    if response.data.is_empty() {
        debug!(instance = instance_name, "no consumer groups");
        return Ok(ListOutcome::Empty);
    }
    render::render(out, &response, mode, printer)?;
    Ok(ListOutcome::Printed)
}

impl CommandExecute for ListSubCommand {
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()> {
        let mode = validators::validate_output(self.common_args.output.as_deref())?;
        validators::validate_limit(self.limit)?;

        let instance = command_util::selected_instance(ctx, self.common_args.instance_id.as_deref())?;
        let api = ctx.connection().kafka_admin(&instance)?;

        let mut stdout = io::stdout().lock();
        let outcome = run_list(
            &mut stdout,
            &api,
            instance.display_name(),
            self.limit,
            mode,
            ctx.printer(),
        )?;
        if outcome == ListOutcome::Empty {
            let data = TemplateData::from([("InstanceName", instance.display_name().to_string())]);
            output::print_info(
                &ctx.localizer()
                    .localize("consumerGroup.list.log.info.noConsumerGroups", &data),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use streamctl_error::ErrorCategory;
    use streamctl_error::TransportError;

    use super::*;
    use crate::cli::pretty_printer::NoPrettyPrinter;
    use crate::core::api::ApiResponse;
    use crate::core::api::MockKafkaAdminApi;
    use crate::core::consumer_group::ConsumerGroupList;

    const BODY: &[u8] = br#"{"items":[{"groupId":"orders","consumers":[{"groupId":"orders","topic":"t","partition":0,"offset":2,"logEndOffset":7,"lag":5,"memberId":"m-1"},{"groupId":"orders","topic":"t","partition":1,"offset":7,"logEndOffset":7,"lag":0}]}],"count":1,"limit":1000,"offset":0}"#;

    fn api_with_groups() -> MockKafkaAdminApi {
        let mut api = MockKafkaAdminApi::new();
        api.expect_get_consumer_group_list().returning(|_| {
            Ok(ApiResponse {
                status: 200,
                body: BODY.to_vec(),
                data: serde_json::from_slice(BODY).unwrap(),
            })
        });
        api
    }

    #[test]
    fn test_empty_list_writes_nothing_in_any_mode() {
        for mode in [RenderMode::Default, RenderMode::Json, RenderMode::Yaml] {
            let mut api = MockKafkaAdminApi::new();
            api.expect_get_consumer_group_list()
                .returning(|_| Ok(ApiResponse::from_data(ConsumerGroupList::default()).unwrap()));

            let mut out = Vec::new();
            let outcome = run_list(&mut out, &api, "my-kafka", 1000, mode, &NoPrettyPrinter).unwrap();
            assert_eq!(outcome, ListOutcome::Empty);
            assert!(out.is_empty(), "mode {mode}");
        }
    }

    #[test]
    fn test_table_shows_summary_rows() {
        let mut out = Vec::new();
        let outcome = run_list(
            &mut out,
            &api_with_groups(),
            "my-kafka",
            1000,
            RenderMode::Default,
            &NoPrettyPrinter,
        )
        .unwrap();
        assert_eq!(outcome, ListOutcome::Printed);

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("Consumer group ID"));
        assert!(lines[0].contains("Partitions with lag"));
        let columns: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(columns, vec!["orders", "2", "1"]);
    }

    #[test]
    fn test_json_is_the_full_collection() {
        let mut out = Vec::new();
        run_list(
            &mut out,
            &api_with_groups(),
            "my-kafka",
            1000,
            RenderMode::Json,
            &NoPrettyPrinter,
        )
        .unwrap();
        assert_eq!(out, [BODY, b"\n".as_slice()].concat());
    }

    #[test]
    fn test_forbidden_is_classified() {
        let mut api = MockKafkaAdminApi::new();
        api.expect_get_consumer_group_list()
            .returning(|_| Err(TransportError::with_status(403, "403 Forbidden")));

        let mut out = Vec::new();
        let err = run_list(&mut out, &api, "my-kafka", 10, RenderMode::Default, &NoPrettyPrinter).unwrap_err();
        assert_eq!(err.api_category(), Some(ErrorCategory::Forbidden));
        assert!(out.is_empty());
    }

    #[test]
    fn test_limit_flag_parsing() {
        let cmd = ListSubCommand::try_parse_from(["list", "--limit", "25", "-o", "yaml"]).unwrap();
        assert_eq!(cmd.limit, 25);
        assert_eq!(cmd.common_args.output.as_deref(), Some("yaml"));

        let cmd = ListSubCommand::try_parse_from(["list"]).unwrap();
        assert_eq!(cmd.limit, DEFAULT_LIMIT);
        assert!(cmd.common_args.instance_id.is_none());
    }
}
