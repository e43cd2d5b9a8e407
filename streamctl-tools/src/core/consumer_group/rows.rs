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

//! Row mapping for consumer group tables
//!
//! List and describe share one lag definition, so the partitions-with-lag
//! count of a group is the same in both views.

use tabled::Tabled;

use super::types::Consumer;
use super::types::ConsumerGroup;
use super::types::ConsumerGroupList;
use crate::core::table_rows::TableRows;

/// Summary row of the `consumer-group list` table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ConsumerGroupRow {
    #[tabled(rename = "Consumer group ID")]
    pub consumer_group_id: String,

    #[tabled(rename = "Active members")]
    pub active_members: usize,

    #[tabled(rename = "Partitions with lag")]
    pub partitions_with_lag: usize,
}

/// Member row of the `consumer-group describe` table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ConsumerRow {
    #[tabled(rename = "Member ID")]
    pub member_id: String,

    #[tabled(rename = "Partition")]
    pub partition: i32,

    #[tabled(rename = "Log end offset")]
    pub log_end_offset: i64,

    #[tabled(rename = "Current offset")]
    pub current_offset: i64,

    #[tabled(rename = "Offset lag")]
    pub offset_lag: i64,
}

/// Distance between the log end and the committed offset, never negative
#[inline]
pub fn offset_lag(log_end_offset: i64, offset: i64) -> i64 {
    log_end_offset.saturating_sub(offset).max(0)
}

impl Consumer {
    pub fn offset_lag(&self) -> i64 {
        offset_lag(self.log_end_offset, self.offset)
    }
}

/// Count of partitions whose lag is strictly positive
pub fn partitions_with_lag(consumers: &[Consumer]) -> usize {
    consumers.iter().filter(|c| c.offset_lag() > 0).count()
}

pub fn map_consumer_groups_to_rows(groups: &[ConsumerGroup]) -> Vec<ConsumerGroupRow> {
    groups
        .iter()
        .map(|group| ConsumerGroupRow {
            consumer_group_id: group.group_id.clone(),
            active_members: group.active_members(),
            partitions_with_lag: partitions_with_lag(&group.consumers),
        })
        .collect()
}

pub fn map_consumers_to_rows(consumers: &[Consumer]) -> Vec<ConsumerRow> {
    consumers
        .iter()
        .map(|consumer| ConsumerRow {
            member_id: consumer.member_id.clone().unwrap_or_default(),
            partition: consumer.partition,
            log_end_offset: consumer.log_end_offset,
            current_offset: consumer.offset,
            offset_lag: consumer.offset_lag(),
        })
        .collect()
}

impl TableRows for ConsumerGroupList {
    type Row = ConsumerGroupRow;

    fn rows(&self) -> Vec<Self::Row> {
        map_consumer_groups_to_rows(&self.items)
    }
}

impl TableRows for ConsumerGroup {
    type Row = ConsumerRow;

    fn rows(&self) -> Vec<Self::Row> {
        map_consumers_to_rows(&self.consumers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumer(member: &str, partition: i32, offset: i64, log_end_offset: i64) -> Consumer {
        Consumer {
            group_id: "orders".to_string(),
            topic: "payments".to_string(),
            partition,
            offset,
            log_end_offset,
            lag: log_end_offset - offset,
            member_id: Some(member.to_string()),
        }
    }

    #[test]
    fn test_offset_lag() {
        assert_eq!(offset_lag(10, 4), 6);
        assert_eq!(offset_lag(10, 10), 0);
        assert_eq!(offset_lag(0, 0), 0);
        // committed ahead of the log end after a truncation
        assert_eq!(offset_lag(3, 7), 0);
    }

    #[test]
    fn test_partitions_with_lag_counts_strictly_positive() {
        let consumers = vec![
            consumer("m-1", 0, 5, 9),
            consumer("m-1", 1, 9, 9),
            consumer("m-2", 2, 0, 1),
            consumer("m-2", 3, 8, 2),
        ];
        assert_eq!(partitions_with_lag(&consumers), 2);
        assert_eq!(partitions_with_lag(&[]), 0);
    }

    #[test]
    fn test_list_and_describe_agree_on_lag() {
        let group = ConsumerGroup {
            group_id: "orders".to_string(),
            consumers: vec![consumer("m-1", 0, 1, 4), consumer("m-2", 1, 4, 4)],
        };

        let summary = map_consumer_groups_to_rows(std::slice::from_ref(&group));
        let members = map_consumers_to_rows(&group.consumers);

        let lagging_in_describe = members.iter().filter(|row| row.offset_lag > 0).count();
        assert_eq!(summary[0].partitions_with_lag, lagging_in_describe);
        assert_eq!(summary[0].active_members, 2);
    }

    #[test]
    fn test_map_consumers_to_rows() {
        let mut anonymous = consumer("", 4, 2, 12);
        anonymous.member_id = None;

        let rows = map_consumers_to_rows(&[consumer("m-1", 0, 5, 9), anonymous]);
        assert_eq!(
            rows[0],
            ConsumerRow {
                member_id: "m-1".to_string(),
                partition: 0,
                log_end_offset: 9,
                current_offset: 5,
                offset_lag: 4,
            }
        );
        assert_eq!(rows[1].member_id, "");
        assert_eq!(rows[1].offset_lag, 10);
    }

    #[test]
    fn test_table_rows_for_list() {
        let list = ConsumerGroupList {
            items: vec![
                ConsumerGroup {
                    group_id: "a".to_string(),
                    consumers: vec![consumer("m-1", 0, 0, 3)],
                },
                ConsumerGroup {
                    group_id: "b".to_string(),
                    consumers: vec![],
                },
            ],
            count: 2,
            limit: 1000,
            offset: 0,
        };
        let rows = list.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].partitions_with_lag, 1);
        assert_eq!(rows[1].active_members, 0);
    }
}
