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

//! Kafka instance operations - Core business logic

use streamctl_error::ErrorContext;

use super::types::KafkaInstance;
use crate::core::api::ApiResponse;
use crate::core::api::ControlPlaneApi;
use crate::core::classifier;
use crate::core::StreamctlResult;

/// Kafka instance operations service
pub struct KafkaService;

impl KafkaService {
    /// Fetch one Kafka instance by id
    ///
    /// Failures are classified with the `view` operation and the instance id
    /// as resource name, since the display name is not known yet.
    pub fn get_instance(api: &dyn ControlPlaneApi, id: &str) -> StreamctlResult<ApiResponse<KafkaInstance>> {
        let context = ErrorContext::new("view").with_resource_name(id);
        let response = classifier::check(api.get_kafka_by_id(id), &context)?;
        Ok(response)
    }
}
