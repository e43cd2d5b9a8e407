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

//! YAML formatter

use std::io::Write;

use serde_json::Value;
use streamctl_error::RenderError;

use super::write_raw;
use super::Formatter;

pub struct YamlFormatter;

impl YamlFormatter {
    /// YAML text of a JSON payload, keeping key order
    pub fn format(body: &[u8]) -> Option<Result<String, RenderError>> {
        let value: Value = serde_json::from_slice(body).ok()?;
        Some(serde_yaml::to_string(&value).map_err(|e| RenderError::encode_failed("YAML", e.to_string())))
    }
}

impl Formatter for YamlFormatter {
    fn write_payload(&self, out: &mut dyn Write, body: &[u8]) -> Result<(), RenderError> {
        if body.is_empty() {
            return Ok(());
        }
        match Self::format(body) {
            Some(yaml) => write_raw(out, yaml?.as_bytes()),
            None => write_raw(out, body),
        }
    }
}
