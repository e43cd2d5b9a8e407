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

//! Output rendering errors

use thiserror::Error;

/// Errors raised while writing command output
///
/// Malformed payloads never end up here; they are written through verbatim.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The destination stream rejected the write
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    /// The external pretty-printer could not be launched or exited non-zero
    #[error("External tool '{tool}' failed: {reason}")]
    ExternalToolFailed { tool: &'static str, reason: String },

    /// A typed value could not be encoded
    #[error("Encoding failed ({format}): {message}")]
    EncodeFailed { format: &'static str, message: String },
}

impl RenderError {
    /// Create an external tool failure
    #[inline]
    pub fn external_tool_failed(tool: &'static str, reason: impl Into<String>) -> Self {
        Self::ExternalToolFailed {
            tool,
            reason: reason.into(),
        }
    }

    /// Create an encode failed error
    #[inline]
    pub fn encode_failed(format: &'static str, message: impl Into<String>) -> Self {
        Self::EncodeFailed {
            format,
            message: message.into(),
        }
    }
}
