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

//! JSON formatter

use std::io::Write;

use streamctl_error::RenderError;

use super::write_raw;
use super::Formatter;

/// Writes the payload exactly as the server encoded it
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn write_payload(&self, out: &mut dyn Write, body: &[u8]) -> Result<(), RenderError> {
        if body.is_empty() {
            return Ok(());
        }
        write_raw(out, body)
    }
}
