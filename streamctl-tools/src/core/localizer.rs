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

//! Message localization
//!
//! Commands never format user-facing text directly; they look it up by id
//! through a [`Localizer`]. Templates use `{Key}` placeholders.

use std::collections::HashMap;

use streamctl_error::StreamctlError;
use streamctl_error::TemplateData;

#[cfg_attr(test, mockall::automock)]
pub trait Localizer {
    fn localize(&self, message_id: &str, data: &TemplateData) -> String;
}

const EN_MESSAGES: &[(&str, &str)] = &[
    ("common.error.unauthorized", "you are unauthorized to {Operation} this resource"),
    ("common.error.forbidden", "you are forbidden to {Operation} this resource"),
    ("common.error.internalServerError", "internal server error"),
    ("common.error.unableToConnectToKafka", "unable to connect to Kafka instance \"{Name}\""),
    (
        "consumerGroup.list.log.info.noConsumerGroups",
        "Kafka instance \"{InstanceName}\" has no consumer groups",
    ),
    ("consumerGroup.describe.output.id", "Consumer group ID: {ID}"),
    ("consumerGroup.describe.output.activeMembers", "Active members: {ActiveMembers}"),
    (
        "consumerGroup.describe.output.partitionsWithLag",
        "Partitions with lag: {LaggingPartitions}",
    ),
    ("status.log.info.noStatusesAreUsed", "No services are currently in use"),
];

/// Built-in message catalog
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<&'static str, &'static str>,
}

impl MessageCatalog {
    pub fn english() -> Self {
        Self {
            messages: EN_MESSAGES.iter().copied().collect(),
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for MessageCatalog {
    /// Unknown ids render as the id itself
    fn localize(&self, message_id: &str, data: &TemplateData) -> String {
        let template = self.messages.get(message_id).copied().unwrap_or(message_id);
        fill_template(template, data)
    }
}

/// Replace each `{Key}` found in `template` once; substituted values are not rescanned
fn fill_template(template: &str, data: &TemplateData) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match data.get(key) {
                    Some(value) => text.push_str(value),
                    None => text.push_str(&rest[open..open + close + 2]),
                }
                rest = &after[close + 1..];
            }
            None => {
                text.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);
    text
}

/// Text shown to the user for an error
///
/// Classified API errors are localized from their template; internal server
/// and unavailable errors are followed by the original transport error.
pub fn localize_error(localizer: &dyn Localizer, err: &StreamctlError) -> String {
    let StreamctlError::Api(api) = err else {
        return err.to_string();
    };
    let Some(message_id) = api.message_id() else {
        return api.to_string();
    };
    let text = localizer.localize(message_id, &api.template_data());
    if api.appends_cause() {
        format!("{text}: {}", api.transport_error())
    } else {
        text
    }
}
