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

//! Integration tests for output rendering and response classification
//!
//! Tests cover:
//! - Empty payloads in every mode
//! - Key order through the pretty path, with and without a pretty-printer
//! - Lag consistency between the list and describe projections
//! - Classification of every handled status

use std::cell::RefCell;

use streamctl_error::ErrorCategory;
use streamctl_error::ErrorContext;
use streamctl_error::RenderError;
use streamctl_error::TransportError;
use streamctl_tools::cli::formatters::RenderMode;
use streamctl_tools::cli::pretty_printer::NoPrettyPrinter;
use streamctl_tools::cli::pretty_printer::PrettyPrinter;
use streamctl_tools::cli::pretty_printer::PrettyStyle;
use streamctl_tools::cli::render;
use streamctl_tools::core::classifier;
use streamctl_tools::core::consumer_group::map_consumer_groups_to_rows;
use streamctl_tools::core::consumer_group::map_consumers_to_rows;
use streamctl_tools::core::consumer_group::ConsumerGroupList;

/// Records what it was asked to format and echoes it back on one line
#[derive(Default)]
struct RecordingPrinter {
    calls: RefCell<Vec<(Vec<u8>, PrettyStyle)>>,
}

impl PrettyPrinter for RecordingPrinter {
    fn is_available(&self) -> bool {
        true
    }

    fn format(&self, body: &[u8], style: PrettyStyle) -> Result<Vec<u8>, RenderError> {
        self.calls.borrow_mut().push((body.to_vec(), style));
        let mut out = body.to_vec();
        out.push(b'\n');
        Ok(out)
    }
}

#[test]
fn empty_payload_is_a_no_op() {
    let printer = RecordingPrinter::default();
    for mode in [RenderMode::Default, RenderMode::Json, RenderMode::Yaml] {
        let mut out = Vec::new();
        render::render_bytes(&mut out, b"", mode, &printer).unwrap();
        assert!(out.is_empty());
    }
    assert!(printer.calls.borrow().is_empty());
}

#[test]
fn pretty_path_hands_original_bytes_to_printer() {
    let body = br#"{"zeta":1,"alpha":{"b":2,"a":3}}"#;
    let printer = RecordingPrinter::default();

    let mut out = Vec::new();
    render::simple(&mut out, body, &printer).unwrap();

    let calls = printer.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, body.to_vec());
    assert_eq!(calls[0].1, PrettyStyle::Condensed);
    assert_eq!(out, [body.as_slice(), b"\n".as_slice()].concat());
}

#[test]
fn pretty_path_without_printer_keeps_order_at_every_level() {
    let body = br#"{"zeta":1,"alpha":{"b":2,"a":[{"y":1,"x":2}]}}"#;
    let mut out = Vec::new();
    render::pretty(&mut out, body, &NoPrettyPrinter).unwrap();

    let expected = r#"{
  "zeta": 1,
  "alpha": {
    "b": 2,
    "a": [
      {
        "y": 1,
        "x": 2
      }
    ]
  }
}
"#;
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn non_object_documents_are_written_raw() {
    let bodies: [&[u8]; 3] = [b"[1,2,3]", b"gateway timeout", b"{\"unterminated\":"];
    for body in bodies {
        let mut out = Vec::new();
        render::pretty(&mut out, body, &NoPrettyPrinter).unwrap();
        assert_eq!(out, [body, b"\n".as_slice()].concat());
    }
}

#[test]
fn list_and_describe_agree_on_lag() {
    let body = br#"{"items":[{"groupId":"g","consumers":[
        {"groupId":"g","topic":"t","partition":0,"offset":10,"logEndOffset":15,"lag":99,"memberId":"a"},
        {"groupId":"g","topic":"t","partition":1,"offset":20,"logEndOffset":20,"lag":0,"memberId":"a"},
        {"groupId":"g","topic":"t","partition":2,"offset":30,"logEndOffset":25,"lag":0,"memberId":"b"}
    ]}],"count":1}"#;
    let list: ConsumerGroupList = serde_json::from_slice(body).unwrap();
    let group = &list.items[0];

    let summary = map_consumer_groups_to_rows(&list.items);
    let members = map_consumers_to_rows(&group.consumers);

    let lagging = members.iter().filter(|row| row.offset_lag > 0).count();
    assert_eq!(summary[0].active_members, 3);
    assert_eq!(summary[0].partitions_with_lag, lagging);
    assert_eq!(members[0].offset_lag, 5);
    assert_eq!(members[2].offset_lag, 0);
}

#[test]
fn every_handled_status_is_classified() {
    let context = ErrorContext::new("list").with_resource_name("my-kafka");
    let cases = [
        (401, ErrorCategory::Unauthorized),
        (403, ErrorCategory::Forbidden),
        (500, ErrorCategory::InternalServer),
        (503, ErrorCategory::Unavailable),
        (404, ErrorCategory::Unknown),
        (502, ErrorCategory::Unknown),
    ];
    for (status, category) in cases {
        let err = classifier::classify(Some(TransportError::with_status(status, format!("status {status}"))), &context)
            .unwrap();
        assert_eq!(err.category(), category, "status {status}");
        assert_eq!(err.transport_error().status(), Some(status));
    }

    assert!(classifier::classify(None, &context).is_none());
    let err = classifier::classify(Some(TransportError::from_message("connection reset")), &context).unwrap();
    assert_eq!(err.category(), ErrorCategory::TransportUnavailable);
    assert_eq!(err.to_string(), "connection reset");
}
