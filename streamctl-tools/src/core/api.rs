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

//! Remote API seams
//!
//! Commands talk to the control plane and to a Kafka instance's admin API
//! only through these traits. The HTTP implementations live in
//! [`crate::core::http_client`]; tests use mocks.

use serde::Serialize;
use streamctl_error::TransportError;

use crate::core::consumer_group::ConsumerGroup;
use crate::core::consumer_group::ConsumerGroupList;
use crate::core::kafka::KafkaInstance;

/// A successful response: status, the body exactly as received, and its decode
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub body: Vec<u8>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a response whose body is the JSON encoding of `data`
    pub fn from_data(data: T) -> serde_json::Result<Self> {
        let body = serde_json::to_vec(&data)?;
        Ok(Self { status: 200, body, data })
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, TransportError>;

/// Control plane calls
#[cfg_attr(test, mockall::automock)]
pub trait ControlPlaneApi {
    fn get_kafka_by_id(&self, id: &str) -> ApiResult<KafkaInstance>;
}

/// Admin calls against one Kafka instance
#[cfg_attr(test, mockall::automock)]
pub trait KafkaAdminApi {
    fn get_consumer_group_list(&self, limit: i32) -> ApiResult<ConsumerGroupList>;

    fn get_consumer_group_by_id(&self, id: &str) -> ApiResult<ConsumerGroup>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_encodes_body() {
        let group = ConsumerGroup {
            group_id: "orders".to_string(),
            consumers: vec![],
        };
        let response = ApiResponse::from_data(group).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"groupId":"orders","consumers":[]}"#.to_vec());
    }
}
