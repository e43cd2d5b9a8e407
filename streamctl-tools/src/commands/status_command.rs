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
use crate::cli::validators::CompletionHints;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::api::ControlPlaneApi;
use crate::core::kafka::KafkaService;
use crate::core::StreamctlResult;
use crate::ui::output;

#[derive(Debug, Clone, Parser)]
pub struct StatusCommand {
    /// Services to report on, all of them when omitted
    #[arg(value_name = "SERVICE", value_parser = CompletionHints::services(), help = "Services to report on (kafka)")]
    services: Vec<String>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_parser = CompletionHints::output_formats(),
        help = "Output format: json, yaml or yml"
    )]
    output: Option<String>,
}

/// Print the selected Kafka instance as a one-row table, or its document
pub fn run_status(
    out: &mut dyn Write,
    api: &dyn ControlPlaneApi,
    id: &str,
    mode: RenderMode,
    printer: &dyn PrettyPrinter,
) -> StreamctlResult<()> {
    let response = KafkaService::get_instance(api, id)?;
    render::render(out, &response, mode, printer)?;
    Ok(())
}

impl CommandExecute for StatusCommand {
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()> {
        validators::validate_services(&self.services)?;
        let mode = validators::validate_output(self.output.as_deref())?;
        if !self.services.is_empty() {
            debug!(services = ?self.services, "requesting status of services");
        }
        let config = ctx.connection().config();
        if !config.has_kafka() {
            output::print_info(
                &ctx.localizer()
                    .localize("status.log.info.noStatusesAreUsed", &TemplateData::new()),
            );
            return Ok(());
        }
        let id = config.kafka_id(None)?;
        let api = ctx.connection().control_plane()?;

        let mut stdout = io::stdout().lock();
        run_status(&mut stdout, &api, &id, mode, ctx.printer())
    }
}

#[cfg(test)]
mod tests {
    use streamctl_error::ErrorCategory;
    use streamctl_error::TransportError;

    use super::*;
    use crate::cli::pretty_printer::NoPrettyPrinter;
    use crate::core::api::ApiResponse;
    use crate::core::api::MockControlPlaneApi;

    const BODY: &[u8] =
        br#"{"id":"abc","name":"my-kafka","status":"ready","bootstrap_server_host":"my-kafka.example.com:443"}"#;

    fn api() -> MockControlPlaneApi {
        let mut api = MockControlPlaneApi::new();
        api.expect_get_kafka_by_id().returning(|_| {
            Ok(ApiResponse {
                status: 200,
                body: BODY.to_vec(),
                data: serde_json::from_slice(BODY).unwrap(),
            })
        });
        api
    }

    #[test]
    fn test_service_arguments() {
        let cmd = StatusCommand::try_parse_from(["status", "kafka", "-o", "yml"]).unwrap();
        assert_eq!(cmd.services, vec!["kafka"]);
        assert_eq!(cmd.output.as_deref(), Some("yml"));

        let cmd = StatusCommand::try_parse_from(["status", "registry"]).unwrap();
        assert!(validators::validate_services(&cmd.services).is_err());
    }

    #[test]
    fn test_status_table() {
        let mut out = Vec::new();
        run_status(&mut out, &api(), "abc", RenderMode::Default, &NoPrettyPrinter).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Bootstrap URL"));
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["my-kafka", "abc", "ready", "my-kafka.example.com:443"]
        );
    }

    #[test]
    fn test_status_json_is_raw_document() {
        let mut out = Vec::new();
        run_status(&mut out, &api(), "abc", RenderMode::Json, &NoPrettyPrinter).unwrap();
        assert_eq!(out, [BODY, b"\n".as_slice()].concat());
    }

    #[test]
    fn test_status_unavailable_names_instance_id() {
        let mut api = MockControlPlaneApi::new();
        api.expect_get_kafka_by_id()
            .returning(|_| Err(TransportError::with_status(503, "503 Service Unavailable")));

        let mut out = Vec::new();
        let err = run_status(&mut out, &api, "abc", RenderMode::Default, &NoPrettyPrinter).unwrap_err();
        assert_eq!(err.api_category(), Some(ErrorCategory::Unavailable));
        assert!(err.to_string().contains("\"abc\""));
    }
}
