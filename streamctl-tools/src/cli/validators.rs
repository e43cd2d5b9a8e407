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

//! CLI input validators
//!
//! Provides validation for command-line arguments

use std::ffi::OsStr;

use clap::builder::PossibleValue;
use clap::builder::StringValueParser;
use clap::builder::TypedValueParser;

use crate::cli::formatters::RenderMode;
use crate::cli::formatters::VALID_OUTPUT_FORMATS;
use crate::core::StreamctlResult;
use crate::core::ToolsError;

/// Services the `status` command can report on
pub const VALID_SERVICES: &[&str] = &["kafka"];

/// Value parser that offers a fixed set of values to help and shell completion
/// but accepts any string, leaving rejection to the validators below
#[derive(Debug, Clone, Copy)]
pub struct CompletionHints(&'static [&'static str]);

impl CompletionHints {
    pub const fn output_formats() -> Self {
        Self(VALID_OUTPUT_FORMATS)
    }

    pub const fn services() -> Self {
        Self(VALID_SERVICES)
    }
}

impl TypedValueParser for CompletionHints {
    type Value = String;

    fn parse_ref(&self, cmd: &clap::Command, arg: Option<&clap::Arg>, value: &OsStr) -> Result<String, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(self.0.iter().map(|value| PossibleValue::new(*value))))
    }
}

/// Validate the `--output` flag
///
/// # Format
/// Empty for the default table view, otherwise `json`, `yaml` or `yml`
pub fn validate_output(output: Option<&str>) -> StreamctlResult<RenderMode> {
    Ok(output.unwrap_or_default().parse::<RenderMode>()?)
}

/// Validate the `--limit` flag of list commands
pub fn validate_limit(limit: i32) -> StreamctlResult<()> {
    if limit < 1 {
        return Err(ToolsError::validation_error("limit", format!("must be at least 1, got {limit}")).into());
    }
    Ok(())
}

/// Validate the positional service names of `status`
pub fn validate_services(services: &[String]) -> StreamctlResult<()> {
    if let Some(unknown) = services.iter().find(|s| !VALID_SERVICES.contains(&s.as_str())) {
        return Err(ToolsError::unknown_service(unknown.as_str(), VALID_SERVICES).into());
    }
    Ok(())
}

/// Validate a consumer group id argument
pub fn validate_consumer_group_id(id: &str) -> StreamctlResult<()> {
    if id.trim().is_empty() {
        return Err(ToolsError::validation_error("id", "Consumer group ID cannot be empty").into());
    }
    Ok(())
}
