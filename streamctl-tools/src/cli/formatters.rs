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

//! CLI output formatters
//!
//! Provides multiple output formats: JSON, YAML, Table and the pretty-printed
//! default for raw documents.

mod json_formatter;
mod pretty_formatter;
mod table_formatter;
mod yaml_formatter;

use std::io::Write;
use std::str::FromStr;

pub use json_formatter::JsonFormatter;
pub use pretty_formatter::PrettyFormatter;
use streamctl_error::RenderError;
use streamctl_error::ToolsError;
use strum::Display;
pub use table_formatter::TableFormatter;
pub use yaml_formatter::YamlFormatter;

use crate::cli::pretty_printer::PrettyPrinter;
use crate::cli::pretty_printer::PrettyStyle;
pub use crate::core::table_rows::TableRows;

/// Accepted values of the `--output` flag
pub const VALID_OUTPUT_FORMATS: &[&str] = &["json", "yaml", "yml"];

/// Output mode, selected once per invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum RenderMode {
    /// Table for row-shaped data, pretty-printed JSON for raw documents
    #[default]
    #[strum(serialize = "table")]
    Default,
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "yaml")]
    Yaml,
}

impl FromStr for RenderMode {
    type Err = ToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Default),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ToolsError::invalid_flag_value("output", other, VALID_OUTPUT_FORMATS)),
        }
    }
}

/// Formatter trait for already-encoded JSON payloads
pub trait Formatter {
    /// Write `body` to `out`; payloads the formatter cannot parse are written verbatim
    fn write_payload(&self, out: &mut dyn Write, body: &[u8]) -> Result<(), RenderError>;
}

/// Formatter enum that holds concrete implementations
pub enum FormatterType<'a> {
    Json(JsonFormatter),
    Yaml(YamlFormatter),
    Pretty(PrettyFormatter<'a>),
}

impl FormatterType<'_> {
    pub fn write_payload(&self, out: &mut dyn Write, body: &[u8]) -> Result<(), RenderError> {
        match self {
            Self::Json(f) => f.write_payload(out, body),
            Self::Yaml(f) => f.write_payload(out, body),
            Self::Pretty(f) => f.write_payload(out, body),
        }
    }
}

/// Get formatter for an output mode
pub fn get_formatter(mode: RenderMode, printer: &dyn PrettyPrinter) -> FormatterType<'_> {
    match mode {
        RenderMode::Json => FormatterType::Json(JsonFormatter),
        RenderMode::Yaml => FormatterType::Yaml(YamlFormatter),
        RenderMode::Default => FormatterType::Pretty(PrettyFormatter::new(printer, PrettyStyle::Indented)),
    }
}

/// Raw bytes plus a trailing newline if they lack one
pub(crate) fn write_raw(out: &mut dyn Write, body: &[u8]) -> Result<(), RenderError> {
    out.write_all(body)?;
    if !body.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_from_str() {
        assert_eq!("".parse::<RenderMode>().unwrap(), RenderMode::Default);
        assert_eq!("json".parse::<RenderMode>().unwrap(), RenderMode::Json);
        assert_eq!("yaml".parse::<RenderMode>().unwrap(), RenderMode::Yaml);
        assert_eq!("yml".parse::<RenderMode>().unwrap(), RenderMode::Yaml);
        assert!("table".parse::<RenderMode>().is_err());
        assert!("JSON".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_render_mode_display() {
        assert_eq!(RenderMode::Default.to_string(), "table");
        assert_eq!(RenderMode::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_write_raw_adds_single_newline() {
        let mut out = Vec::new();
        write_raw(&mut out, b"abc").unwrap();
        write_raw(&mut out, b"def\n").unwrap();
        assert_eq!(out, b"abc\ndef\n");
    }
}
