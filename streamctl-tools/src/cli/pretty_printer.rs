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

//! Optional external pretty-printer
//!
//! When `jq` is on the `PATH` the default output of raw documents goes
//! through it. jq only colours by itself when writing to a terminal, and
//! here it writes to a pipe, so `-C` is passed when our stdout is a
//! terminal.

use std::io::IsTerminal;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::thread;

#[cfg(test)]
use mockall::automock;
use streamctl_error::RenderError;
use tracing::debug;

const JQ: &str = "jq";

/// Layout requested from the pretty-printer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrettyStyle {
    #[default]
    Indented,
    /// One line per document
    Condensed,
}

#[cfg_attr(test, automock)]
pub trait PrettyPrinter {
    fn is_available(&self) -> bool;

    /// Format a JSON document, returning the bytes to write
    fn format(&self, body: &[u8], style: PrettyStyle) -> Result<Vec<u8>, RenderError>;
}

/// `jq` found on the `PATH`
#[derive(Debug, Clone, Default)]
pub struct JqPrinter {
    path: Option<PathBuf>,
    colour: bool,
}

impl JqPrinter {
    pub fn detect() -> Self {
        let path = which::which(JQ).ok();
        let colour = std::io::stdout().is_terminal();
        debug!(?path, colour, "pretty-printer lookup");
        Self { path, colour }
    }
}

fn jq_args(style: PrettyStyle, colour: bool) -> Vec<&'static str> {
    let mut args = Vec::with_capacity(3);
    if colour {
        args.push("-C");
    }
    if style == PrettyStyle::Condensed {
        args.push("-c");
    }
    args.push(".");
    args
}

impl PrettyPrinter for JqPrinter {
    fn is_available(&self) -> bool {
        self.path.is_some()
    }

    fn format(&self, body: &[u8], style: PrettyStyle) -> Result<Vec<u8>, RenderError> {
        let Some(path) = &self.path else {
            return Err(RenderError::external_tool_failed(JQ, "not found on PATH"));
        };

        let mut child = Command::new(path)
            .args(jq_args(style, self.colour))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| RenderError::external_tool_failed(JQ, e.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::external_tool_failed(JQ, "stdin is not piped"))?;

        // stdin is fed from another thread so a full stdout pipe cannot block us
        let output = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(body));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            output.and_then(|output| written.map(|_| output))
        })
        .map_err(|e| RenderError::external_tool_failed(JQ, e.to_string()))?;

        if !output.status.success() {
            return Err(RenderError::external_tool_failed(JQ, output.status.to_string()));
        }
        Ok(output.stdout)
    }
}

/// Used when no external pretty-printer should be involved
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrettyPrinter;

impl PrettyPrinter for NoPrettyPrinter {
    fn is_available(&self) -> bool {
        false
    }

    fn format(&self, _body: &[u8], _style: PrettyStyle) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::external_tool_failed(JQ, "no pretty-printer configured"))
    }
}
