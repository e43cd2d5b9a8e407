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

//! Helpers shared by commands

use crate::commands::CommandContext;
use crate::core::kafka::KafkaInstance;
use crate::core::kafka::KafkaService;
use crate::core::StreamctlResult;

/// Look up the Kafka instance named by `--instance-id`, else the selected one
pub fn selected_instance(ctx: &CommandContext, instance_id: Option<&str>) -> StreamctlResult<KafkaInstance> {
    let id = ctx.connection().config().kafka_id(instance_id)?;
    let control_plane = ctx.connection().control_plane()?;
    Ok(KafkaService::get_instance(&control_plane, &id)?.data)
}
