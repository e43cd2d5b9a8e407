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

//! Rendering entry points used by every command
//!
//! Row-shaped responses are shown as a table in the default mode. In JSON and
//! YAML mode the full response body is written, never the row projection.

use std::io::Write;

use streamctl_error::RenderError;
use tabled::Tabled;

use crate::cli::formatters::get_formatter;
use crate::cli::formatters::Formatter;
use crate::cli::formatters::PrettyFormatter;
use crate::cli::formatters::RenderMode;
use crate::cli::formatters::TableFormatter;
use crate::cli::formatters::TableRows;
use crate::cli::pretty_printer::PrettyPrinter;
use crate::cli::pretty_printer::PrettyStyle;
use crate::core::api::ApiResponse;

/// Write an encoded payload in the given mode; an empty payload writes nothing
pub fn render_bytes(
    out: &mut dyn Write,
    body: &[u8],
    mode: RenderMode,
    printer: &dyn PrettyPrinter,
) -> Result<(), RenderError> {
    if body.is_empty() {
        return Ok(());
    }
    get_formatter(mode, printer).write_payload(out, body)
}

/// Indented JSON, keeping the payload's key order
pub fn pretty(out: &mut dyn Write, body: &[u8], printer: &dyn PrettyPrinter) -> Result<(), RenderError> {
    PrettyFormatter::new(printer, PrettyStyle::Indented).write_payload(out, body)
}

/// Condensed JSON where the pretty-printer supports it, indented otherwise
pub fn simple(out: &mut dyn Write, body: &[u8], printer: &dyn PrettyPrinter) -> Result<(), RenderError> {
    PrettyFormatter::new(printer, PrettyStyle::Condensed).write_payload(out, body)
}

/// Render a response: its table projection by default, its body otherwise
pub fn render<T: TableRows>(
    out: &mut dyn Write,
    response: &ApiResponse<T>,
    mode: RenderMode,
    printer: &dyn PrettyPrinter,
) -> Result<(), RenderError> {
    match mode {
        RenderMode::Default => table(out, &response.data.rows()),
        RenderMode::Json | RenderMode::Yaml => render_bytes(out, &response.body, mode, printer),
    }
}

pub fn table<R: Tabled>(out: &mut dyn Write, rows: &[R]) -> Result<(), RenderError> {
    TableFormatter::write_rows(out, rows)
}
