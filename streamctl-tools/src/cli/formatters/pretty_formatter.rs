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

//! Pretty formatter for raw documents in the default mode

use std::io::Write;

use streamctl_error::RenderError;
use tracing::debug;

use super::write_raw;
use super::Formatter;
use crate::cli::pretty_printer::PrettyPrinter;
use crate::cli::pretty_printer::PrettyStyle;
use crate::core::document::StructuredDocument;

/// Hands the document to an external pretty-printer when one is available,
/// otherwise indents it with two spaces. Key order is kept either way.
pub struct PrettyFormatter<'a> {
    printer: &'a dyn PrettyPrinter,
    style: PrettyStyle,
}

impl<'a> PrettyFormatter<'a> {
    pub fn new(printer: &'a dyn PrettyPrinter, style: PrettyStyle) -> Self {
        Self { printer, style }
    }
}

impl Formatter for PrettyFormatter<'_> {
    fn write_payload(&self, out: &mut dyn Write, body: &[u8]) -> Result<(), RenderError> {
        if body.is_empty() {
            return Ok(());
        }
        let document = match StructuredDocument::from_slice(body) {
            Ok(document) => document,
            Err(e) => {
                debug!(error = %e, "payload is not a JSON object, writing it unchanged");
                return write_raw(out, body);
            }
        };

        if self.printer.is_available() {
            let formatted = self.printer.format(body, self.style)?;
            out.write_all(&formatted)?;
            return Ok(());
        }

        let pretty = document
            .to_json_pretty()
            .map_err(|e| RenderError::encode_failed("JSON", e.to_string()))?;
        writeln!(out, "{pretty}")?;
        Ok(())
    }
}
