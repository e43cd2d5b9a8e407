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

#[derive(Debug, Clone, Parser)]
pub struct DescribeSubCommand {
    /// Kafka instance ID
    #[arg(long = "id", help = "ID of the Kafka instance, defaults to the selected one")]
    id: Option<String>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_parser = CompletionHints::output_formats(),
        help = "Output format: json, yaml or yml"
    )]
    output: Option<String>,

    #[arg(long = "condensed", help = "Print the default output on a single line")]
    condensed: bool,
}

/// Fetch a Kafka instance and print the document
pub fn run_describe(
    out: &mut dyn Write,
    api: &dyn ControlPlaneApi,
    id: &str,
    mode: RenderMode,
    condensed: bool,
    printer: &dyn PrettyPrinter,
) -> StreamctlResult<()> {
    let response = KafkaService::get_instance(api, id)?;
    match mode {
        RenderMode::Default if condensed => render::simple(out, &response.body, printer)?,
        RenderMode::Default => render::pretty(out, &response.body, printer)?,
        RenderMode::Json | RenderMode::Yaml => render::render_bytes(out, &response.body, mode, printer)?,
    }
    Ok(())
}

impl CommandExecute for DescribeSubCommand {
    fn execute(&self, ctx: &CommandContext) -> StreamctlResult<()> {
        let mode = validators::validate_output(self.output.as_deref())?;
        let id = ctx.connection().config().kafka_id(self.id.as_deref())?;
        let api = ctx.connection().control_plane()?;

        let mut stdout = io::stdout().lock();
        run_describe(&mut stdout, &api, &id, mode, self.condensed, ctx.printer())
    }
}
