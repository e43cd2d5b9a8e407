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

//! Consumer group operations and table rows

mod operations;
mod rows;
mod types;

pub use operations::ConsumerGroupService;
pub use rows::map_consumer_groups_to_rows;
pub use rows::map_consumers_to_rows;
pub use rows::offset_lag;
pub use rows::partitions_with_lag;
pub use rows::ConsumerGroupRow;
pub use rows::ConsumerRow;
pub use types::Consumer;
pub use types::ConsumerGroup;
pub use types::ConsumerGroupList;
