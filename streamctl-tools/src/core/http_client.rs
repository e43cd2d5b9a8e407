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

//! Blocking HTTP clients for the control plane and Kafka admin APIs

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use streamctl_error::TransportError;
use tracing::debug;
use url::Url;

use crate::core::api::ApiResponse;
use crate::core::api::ApiResult;
use crate::core::api::ControlPlaneApi;
use crate::core::api::KafkaAdminApi;
use crate::core::consumer_group::ConsumerGroup;
use crate::core::consumer_group::ConsumerGroupList;
use crate::core::kafka::KafkaInstance;
use crate::core::StreamctlResult;
use crate::core::ToolsError;

pub struct HttpTinyClient {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl HttpTinyClient {
    pub fn new(base_url: &str, access_token: Option<String>, timeout: Duration) -> StreamctlResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ToolsError::invalid_configuration("api_url", format!("'{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ToolsError::invalid_configuration("api_url", format!("'{base_url}' cannot be a base URL")).into());
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("streamctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolsError::invalid_configuration("http_client", e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a JSON resource
    ///
    /// Non-success statuses become a [`TransportError`] carrying the status and
    /// body; failures before a response carry no status.
    pub fn http_get<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, String)]) -> ApiResult<T> {
        let url = self.url(segments);
        debug!(%url, "GET");

        let mut request = self.client.get(url).query(query);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(TransportError::no_response)?;
        let status = response.status();
        let body = response.bytes().map_err(TransportError::no_response)?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        Self::process_response(status, body.to_vec())
    }

    fn process_response<T: DeserializeOwned>(status: StatusCode, body: Vec<u8>) -> ApiResult<T> {
        if !status.is_success() {
            let message = match status.canonical_reason() {
                Some(reason) => format!("{} {reason}", status.as_u16()),
                None => status.as_u16().to_string(),
            };
            return Err(TransportError::with_status(status.as_u16(), message).body(String::from_utf8_lossy(&body)));
        }

        let data = serde_json::from_slice(&body).map_err(|e| {
            TransportError::with_status(status.as_u16(), format!("failed to decode response: {e}")).source_error(e)
        })?;
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
            data,
        })
    }
}

/// Control plane client: Kafka instance management
pub struct ControlPlaneClient {
    http: HttpTinyClient,
}

impl ControlPlaneClient {
    pub fn new(http: HttpTinyClient) -> Self {
        Self { http }
    }
}

impl ControlPlaneApi for ControlPlaneClient {
    fn get_kafka_by_id(&self, id: &str) -> ApiResult<KafkaInstance> {
        self.http.http_get(&["api", "kafkas_mgmt", "v1", "kafkas", id], &[])
    }
}

/// Admin API client of one Kafka instance
pub struct KafkaAdminClient {
    http: HttpTinyClient,
}

impl KafkaAdminClient {
    pub fn new(http: HttpTinyClient) -> Self {
        Self { http }
    }
}

impl KafkaAdminApi for KafkaAdminClient {
    fn get_consumer_group_list(&self, limit: i32) -> ApiResult<ConsumerGroupList> {
        self.http.http_get(&["consumer-groups"], &[("limit", limit.to_string())])
    }

    fn get_consumer_group_by_id(&self, id: &str) -> ApiResult<ConsumerGroup> {
        self.http.http_get(&["consumer-groups", id], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpTinyClient {
        HttpTinyClient::new(base, None, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpTinyClient::new("not a url", None, Duration::from_secs(1)).is_err());
        assert!(HttpTinyClient::new("mailto:someone@example.com", None, Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_url_joins_and_encodes_segments() {
        let http = client("https://api.example.com/");
        assert_eq!(
            http.url(&["api", "kafkas_mgmt", "v1", "kafkas", "abc"]).as_str(),
            "https://api.example.com/api/kafkas_mgmt/v1/kafkas/abc"
        );

        let http = client("https://admin-server-my-kafka.example.com/rest");
        assert_eq!(
            http.url(&["consumer-groups", "a group/1"]).as_str(),
            "https://admin-server-my-kafka.example.com/rest/consumer-groups/a%20group%2F1"
        );
    }

    #[test]
    fn test_error_status_keeps_status_and_body() {
        let err = HttpTinyClient::process_response::<ConsumerGroup>(StatusCode::SERVICE_UNAVAILABLE, b"down".to_vec())
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.message(), "503 Service Unavailable");
        assert_eq!(err.response_body(), Some("down"));
    }

    #[test]
    fn test_success_keeps_raw_body() {
        let body = br#"{"consumers":[],"groupId":"orders"}"#.to_vec();
        let response = HttpTinyClient::process_response::<ConsumerGroup>(StatusCode::OK, body.clone()).unwrap();
        assert_eq!(response.body, body);
        assert_eq!(response.data.group_id, "orders");
    }

    #[test]
    fn test_undecodable_success_is_an_error_with_status() {
        let err = HttpTinyClient::process_response::<ConsumerGroup>(StatusCode::OK, b"<html>".to_vec()).unwrap_err();
        assert_eq!(err.status(), Some(200));
        assert!(err.message().starts_with("failed to decode response"));
    }
}
