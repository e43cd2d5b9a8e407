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

//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`. User-facing lines are printed
//! by [`crate::ui::output`] instead.

use std::str::FromStr;

use tracing::Level;

/// Level used when `RUST_LOG` is unset or not a plain level name
const DEFAULT_LEVEL: Level = Level::WARN;

/// Initializes the logger.
///
/// The level is read from the `RUST_LOG` environment variable, defaulting to
/// WARN. `verbose` forces DEBUG. Calling this more than once is harmless.
pub fn init_logger(verbose: bool) {
    let level = resolve_level(std::env::var("RUST_LOG").ok().as_deref(), verbose);
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}

fn resolve_level(rust_log: Option<&str>, verbose: bool) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    rust_log
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_level() {
        assert_eq!(resolve_level(None, false), Level::WARN);
        assert_eq!(resolve_level(Some("info"), false), Level::INFO);
        assert_eq!(resolve_level(Some("TRACE"), false), Level::TRACE);
        assert_eq!(resolve_level(Some("nonsense"), false), Level::WARN);
        assert_eq!(resolve_level(Some("error"), true), Level::DEBUG);
    }
}
