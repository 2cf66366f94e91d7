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


//! Static description of a hook type.

use std::fmt;
use std::sync::Arc;

use super::Hook;
use crate::context::RenderContext;
use crate::group::DEFAULT_GROUP;

/// Predicate deciding whether a hook is relevant to a render context.
pub type Applicability = Arc<dyn Fn(&RenderContext) -> bool + Send + Sync>;

/// Builds a fresh hook instance for a new job.
pub type HookFactory = Arc<dyn Fn() -> Box<dyn Hook> + Send + Sync>;

/// Describes a hook type: its identity, where it appears in the report, when
/// it applies, and how to instantiate it.
///
/// # Example
///
/// ```rust
/// use scribe_core::{Hook, HookDescriptor, RenderContext, ReportValue};
///
/// #[derive(Default)]
/// struct SeedHook;
///
/// impl Hook for SeedHook {
///     fn produce(&mut self, ctx: &RenderContext) -> ReportValue {
///         ctx.cycles.seed.into()
///     }
/// }
///
/// let descriptor = HookDescriptor::new::<SeedHook>("seed", "Seed")
///     .in_group("seed")
///     .with_description("Cycles sampling seed.")
///     .for_engines(&["CYCLES"]);
///
/// assert!(descriptor.applies(&RenderContext::new("CYCLES")));
/// assert!(!descriptor.applies(&RenderContext::new("OTHER_ENGINE")));
/// ```
#[derive(Clone)]
pub struct HookDescriptor {
    id: String,
    label: String,
    group: String,
    description: String,
    applicability: Applicability,
    factory: HookFactory,
}

impl HookDescriptor {
    /// Describes a hook type built with its `Default` constructor.
    ///
    /// The hook lands in the default group and applies to every context until
    /// told otherwise.
    pub fn new<H>(id: impl Into<String>, label: impl Into<String>) -> Self
    where
        H: Hook + Default + 'static,
    {
        Self::from_factory(id, label, || Box::new(H::default()))
    }

    /// Describes a hook built by a custom factory.
    pub fn from_factory(
        id: impl Into<String>,
        label: impl Into<String>,
        factory: impl Fn() -> Box<dyn Hook> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            group: DEFAULT_GROUP.to_string(),
            description: String::new(),
            applicability: Arc::new(|_| true),
            factory: Arc::new(factory),
        }
    }

    /// Places the hook in the group with the given id.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the tooltip text shown next to the hook's toggle.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Restricts the hook to contexts accepted by `predicate`.
    pub fn with_applicability(
        mut self,
        predicate: impl Fn(&RenderContext) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.applicability = Arc::new(predicate);
        self
    }

    /// Restricts the hook to jobs rendered with one of `engines`.
    pub fn for_engines(self, engines: &[&str]) -> Self {
        let engines: Vec<String> = engines.iter().map(|e| (*e).to_string()).collect();
        self.with_applicability(move |ctx| engines.iter().any(|e| ctx.uses_engine(e)))
    }

    /// Unique identifier, also the key of the hook's enablement toggle.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Label printed in the report.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Id of the group the hook belongs to.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Tooltip text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluates the applicability predicate against `ctx`.
    pub fn applies(&self, ctx: &RenderContext) -> bool {
        (self.applicability)(ctx)
    }

    /// Creates a new instance with fresh per-job state.
    pub fn instantiate(&self) -> Box<dyn Hook> {
        (self.factory)()
    }
}

impl fmt::Debug for HookDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("group", &self.group)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
