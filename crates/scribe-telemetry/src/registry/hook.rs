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


//! Registry of hook descriptors, sorted by group.

use super::group::GroupRegistry;
use scribe_core::{Group, HookDescriptor, RenderContext, ScribeError, ScribeResult};

/// A registered descriptor with the group it resolved to.
struct HookEntry {
    descriptor: HookDescriptor,
    group: Group,
    sequence: usize,
}

/// Catalog of every known hook, kept in report order.
///
/// Hooks are ordered by ascending group rank; within a group they keep the
/// order they were registered in.
///
/// # Example
///
/// ```rust
/// use scribe_core::{Hook, HookDescriptor, RenderContext, ReportValue};
/// use scribe_telemetry::HookRegistry;
///
/// #[derive(Default)]
/// struct Fps;
///
/// impl Hook for Fps {
///     fn produce(&mut self, ctx: &RenderContext) -> ReportValue {
///         format!("{}fps", ctx.render.fps).into()
///     }
/// }
///
/// let mut registry = HookRegistry::new();
/// registry.register_hook(HookDescriptor::new::<Fps>("fps", "Frame Rate")).unwrap();
///
/// let ids: Vec<&str> = registry.get_hooks().map(|h| h.id()).collect();
/// assert_eq!(ids, ["fps"]);
/// ```
#[derive(Default)]
pub struct HookRegistry {
    groups: GroupRegistry,
    entries: Vec<HookEntry>,
    next_sequence: usize,
}

impl HookRegistry {
    /// Creates a registry with only the default group and no hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a report group. See [`GroupRegistry::register_group`].
    pub fn register_group(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> ScribeResult<u32> {
        self.groups.register_group(id, label)
    }

    /// Looks up a group by id.
    pub fn get_group(&self, id: &str) -> ScribeResult<&Group> {
        self.groups.get_group(id)
    }

    /// The group registry backing this catalog.
    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// Adds a hook to the catalog.
    ///
    /// The hook's group must already be registered, otherwise this fails with
    /// [`ScribeError::UnknownGroup`]. Hook ids must be unique
    /// ([`ScribeError::DuplicateHook`]). On error the catalog is unchanged.
    pub fn register_hook(&mut self, descriptor: HookDescriptor) -> ScribeResult<()> {
        if self.get_hook(descriptor.id()).is_some() {
            return Err(ScribeError::DuplicateHook(descriptor.id().to_string()));
        }
        let group = self.groups.get_group(descriptor.group())?.clone();

        log::debug!(
            "HookRegistry: Registered hook '{}' in group '{}' (rank={})",
            descriptor.id(),
            group.id,
            group.rank
        );

        self.entries.push(HookEntry {
            descriptor,
            group,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.entries
            .sort_by_key(|entry| (entry.group.rank, entry.sequence));
        Ok(())
    }

    /// Iterates over the catalog in report order.
    pub fn get_hooks(&self) -> impl ExactSizeIterator<Item = &HookDescriptor> + '_ {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    /// Looks up a hook by id.
    pub fn get_hook(&self, id: &str) -> Option<&HookDescriptor> {
        self.entries
            .iter()
            .map(|entry| &entry.descriptor)
            .find(|descriptor| descriptor.id() == id)
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no hook is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups the hooks applicable to `ctx` for the host's settings panel.
    ///
    /// Groups appear in rank order and only when at least one of their hooks
    /// applies; hooks keep catalog order within a group.
    pub fn toggle_layout(&self, ctx: &RenderContext) -> Vec<ToggleGroup<'_>> {
        let mut layout: Vec<ToggleGroup<'_>> = Vec::new();
        for (descriptor, group) in self.resolved() {
            if !descriptor.applies(ctx) {
                continue;
            }
            match layout.last_mut() {
                Some(current) if current.group.id == group.id => current.hooks.push(descriptor),
                _ => layout.push(ToggleGroup {
                    group,
                    hooks: vec![descriptor],
                }),
            }
        }
        layout
    }

    /// Iterates over the catalog together with each hook's resolved group.
    pub(crate) fn resolved(&self) -> impl Iterator<Item = (&HookDescriptor, &Group)> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.descriptor, &entry.group))
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("groups", &self.groups)
            .field(
                "hooks",
                &self.get_hooks().map(HookDescriptor::id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// One section of the settings panel: a group and its applicable hooks.
#[derive(Debug)]
pub struct ToggleGroup<'a> {
    /// The group heading the section.
    pub group: &'a Group,
    /// The hooks whose toggles appear under it.
    pub hooks: Vec<&'a HookDescriptor>,
}
