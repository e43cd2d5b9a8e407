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

//! Table formatter

use std::io::Write;

use streamctl_error::RenderError;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

/// Column-aligned plain text table, headers always shown
pub struct TableFormatter;

impl TableFormatter {
    pub fn format_tabled<R: Tabled>(rows: &[R]) -> String {
        let mut table = Table::new(rows);
        table.with(Style::blank());
        table.to_string()
    }

    pub fn write_rows<R: Tabled>(out: &mut dyn Write, rows: &[R]) -> Result<(), RenderError> {
        writeln!(out, "{}", Self::format_tabled(rows))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Count")]
        count: u32,
    }

    #[test]
    fn test_table_formatter() {
        let rows = vec![
            Row {
                name: "orders".to_string(),
                count: 3,
            },
            Row {
                name: "payments".to_string(),
                count: 12,
            },
        ];
        let output = TableFormatter::format_tabled(&rows);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Name") && lines[0].contains("Count"));
        assert!(lines[1].contains("orders"));
        assert!(lines[2].contains("payments") && lines[2].contains("12"));
    }

    #[test]
    fn test_empty_rows_keep_header() {
        let mut out = Vec::new();
        TableFormatter::write_rows::<Row>(&mut out, &[]).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Name"));
        assert_eq!(output.trim_end().lines().count(), 1);
    }
}
