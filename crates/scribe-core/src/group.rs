// Copyright 2025 eraflo
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


//! Report groups: named, ranked buckets hooks are laid out in.

/// Id of the group pre-seeded in every registry at rank 0.
pub const DEFAULT_GROUP: &str = "default";
/// Display label of the default group.
pub const DEFAULT_GROUP_LABEL: &str = "General";

/// A registered report group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Unique identifier hooks refer to.
    pub id: String,
    /// Header printed above the group's lines in the report.
    pub label: String,
    /// Position of the group in the report; assigned in registration order.
    pub rank: u32,
}

impl Group {
    /// Creates a group record.
    pub fn new(id: impl Into<String>, label: impl Into<String>, rank: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            rank,
        }
    }

    /// The default group, at rank 0.
    pub fn default_group() -> Self {
        Self::new(DEFAULT_GROUP, DEFAULT_GROUP_LABEL, 0)
    }
}
