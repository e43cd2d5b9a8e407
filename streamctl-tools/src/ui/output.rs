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

//! Informational and error lines for the user
//!
//! Both go to stderr so that stdout only ever carries command output.

use colored::Colorize;

/// Print info message
pub fn print_info(message: &str) {
    eprintln!("{message}");
}

/// Print error message with red prefix
pub fn print_error(message: &str) {
    eprintln!("{}", error_line(message));
}

fn error_line(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}
