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

//! Kafka instance as described by the control plane

use serde::Deserialize;
use serde::Serialize;
use tabled::Tabled;

use crate::core::table_rows::TableRows;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaInstance {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_server_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl KafkaInstance {
    /// Name shown to the user, falling back to the id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Row of the `status` table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct KafkaInstanceRow {
    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "Status")]
    pub status: String,

    #[tabled(rename = "Bootstrap URL")]
    pub bootstrap_server_host: String,
}

impl TableRows for KafkaInstance {
    type Row = KafkaInstanceRow;

    fn rows(&self) -> Vec<Self::Row> {
        vec![KafkaInstanceRow {
            name: self.name.clone(),
            id: self.id.clone(),
            status: self.status.clone(),
            bootstrap_server_host: self.bootstrap_server_host.clone().unwrap_or_default(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_instance() {
        let body = r#"{
            "id": "c5hv7iru4an1g84pogp0",
            "kind": "Kafka",
            "name": "my-kafka",
            "status": "ready",
            "bootstrap_server_host": "my-kafka.kafka.example.com:443",
            "unknown_field": 42
        }"#;
        let instance: KafkaInstance = serde_json::from_str(body).unwrap();
        assert_eq!(instance.display_name(), "my-kafka");
        assert_eq!(
            instance.bootstrap_server_host.as_deref(),
            Some("my-kafka.kafka.example.com:443")
        );
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let instance = KafkaInstance {
            id: "c5hv7iru4an1g84pogp0".to_string(),
            ..Default::default()
        };
        assert_eq!(instance.display_name(), "c5hv7iru4an1g84pogp0");
    }

    #[test]
    fn test_status_row() {
        let instance = KafkaInstance {
            id: "abc".to_string(),
            name: "my-kafka".to_string(),
            status: "ready".to_string(),
            ..Default::default()
        };
        let rows = instance.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bootstrap_server_host, "");
        assert_eq!(rows[0].status, "ready");
    }
}
