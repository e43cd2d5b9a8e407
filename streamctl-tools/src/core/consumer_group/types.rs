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

//! Consumer group types as returned by the Kafka admin API

use serde::Deserialize;
use serde::Serialize;

/// Paged list of consumer groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerGroupList {
    pub items: Vec<ConsumerGroup>,
    pub count: i32,
    pub limit: i32,
    pub offset: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerGroup {
    pub group_id: String,
    pub consumers: Vec<Consumer>,
}

/// One consumer's position on one partition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consumer {
    pub group_id: String,
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub log_end_offset: i64,
    pub lag: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl ConsumerGroupList {
    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.items.is_empty()
    }
}

impl ConsumerGroup {
    /// Number of consumers attached to the group
    pub fn active_members(&self) -> usize {
        self.consumers.len()
    }
}
