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

//! Consumer group operations - Core business logic

use streamctl_error::ErrorContext;

use super::types::ConsumerGroup;
use super::types::ConsumerGroupList;
use crate::core::api::ApiResponse;
use crate::core::api::KafkaAdminApi;
use crate::core::classifier;
use crate::core::StreamctlResult;

/// Consumer group operations service
pub struct ConsumerGroupService;

impl ConsumerGroupService {
    /// List consumer groups of one Kafka instance
    ///
    /// # Arguments
    /// * `api` - Admin API of the instance
    /// * `instance_name` - Display name used in error messages
    /// * `limit` - Maximum number of groups to return
    pub fn list(
        api: &dyn KafkaAdminApi,
        instance_name: &str,
        limit: i32,
    ) -> StreamctlResult<ApiResponse<ConsumerGroupList>> {
        let context = ErrorContext::new("list").with_resource_name(instance_name);
        let response = classifier::check(api.get_consumer_group_list(limit), &context)?;
        Ok(response)
    }

    /// Fetch a single consumer group with its members
    pub fn describe(
        api: &dyn KafkaAdminApi,
        instance_name: &str,
        group_id: &str,
    ) -> StreamctlResult<ApiResponse<ConsumerGroup>> {
        let context = ErrorContext::new("view").with_resource_name(instance_name);
        let response = classifier::check(api.get_consumer_group_by_id(group_id), &context)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use streamctl_error::ErrorCategory;
    use streamctl_error::TransportError;

    use super::*;
    use crate::core::api::MockKafkaAdminApi;

    #[test]
    fn test_list_passes_limit() {
        let mut api = MockKafkaAdminApi::new();
        api.expect_get_consumer_group_list()
            .withf(|limit| *limit == 25)
            .times(1)
            .returning(|_| Ok(ApiResponse::from_data(ConsumerGroupList::default()).unwrap()));

        let response = ConsumerGroupService::list(&api, "my-kafka", 25).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_list_unauthorized_uses_list_operation() {
        let mut api = MockKafkaAdminApi::new();
        api.expect_get_consumer_group_list()
            .returning(|_| Err(TransportError::with_status(401, "401 Unauthorized")));

        let err = ConsumerGroupService::list(&api, "my-kafka", 10).unwrap_err();
        assert_eq!(err.api_category(), Some(ErrorCategory::Unauthorized));
        assert_eq!(err.to_string(), "you are unauthorized to list this resource");
    }

    #[test]
    fn test_describe_forbidden_uses_view_operation() {
        let mut api = MockKafkaAdminApi::new();
        api.expect_get_consumer_group_by_id()
            .withf(|id| id == "orders")
            .returning(|_| Err(TransportError::with_status(403, "403 Forbidden")));

        let err = ConsumerGroupService::describe(&api, "my-kafka", "orders").unwrap_err();
        assert_eq!(err.api_category(), Some(ErrorCategory::Forbidden));
        assert_eq!(err.to_string(), "you are forbidden to view this resource");
    }

    #[test]
    fn test_describe_unavailable_names_instance() {
        let mut api = MockKafkaAdminApi::new();
        api.expect_get_consumer_group_by_id()
            .returning(|_| Err(TransportError::with_status(503, "503 Service Unavailable")));

        let err = ConsumerGroupService::describe(&api, "my-kafka", "orders").unwrap_err();
        assert!(err.to_string().contains("\"my-kafka\""));
    }
}
