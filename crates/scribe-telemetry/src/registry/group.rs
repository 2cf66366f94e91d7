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


//! Registry of report groups.

use scribe_core::{Group, ScribeError, ScribeResult};
use std::collections::HashMap;

/// Ordered mapping from group id to its label and rank.
///
/// The default group is pre-seeded at rank 0. Every registration takes the
/// next rank, so ranks follow registration order.
#[derive(Debug, Clone)]
pub struct GroupRegistry {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
    next_rank: u32,
}

impl GroupRegistry {
    /// Creates a registry holding only the default group.
    pub fn new() -> Self {
        let default_group = Group::default_group();
        let mut index = HashMap::new();
        index.insert(default_group.id.clone(), 0);
        Self {
            groups: vec![default_group],
            index,
            next_rank: 1,
        }
    }

    /// Registers a group and returns its rank.
    ///
    /// Re-registering an existing id fails with [`ScribeError::DuplicateGroup`]
    /// and leaves the registry unchanged.
    pub fn register_group(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> ScribeResult<u32> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(ScribeError::DuplicateGroup(id));
        }

        let rank = self.next_rank;
        self.next_rank += 1;

        let group = Group::new(id, label, rank);
        log::info!(
            "GroupRegistry: Registered group '{}' ({:?}, rank={})",
            group.id,
            group.label,
            rank
        );
        self.index.insert(group.id.clone(), self.groups.len());
        self.groups.push(group);
        Ok(rank)
    }

    /// Looks up a group by id.
    pub fn get_group(&self, id: &str) -> ScribeResult<&Group> {
        self.index
            .get(id)
            .map(|&i| &self.groups[i])
            .ok_or_else(|| ScribeError::UnknownGroup(id.to_string()))
    }

    /// Returns `true` if a group with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over all groups in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Number of registered groups, the default group included.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always `false`: the default group is always present.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}
