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


//! Built-in hook implementations.

pub mod cycles;
pub mod general;

use scribe_core::{Hook, HookDescriptor, RenderContext, ReportValue};

/// Reads a value from the render context.
pub type SettingReader = fn(&RenderContext) -> ReportValue;

/// A stateless hook that reports one setting read from the context.
#[derive(Clone, Copy)]
pub struct SettingHook {
    read: SettingReader,
}

impl SettingHook {
    /// Creates a hook reporting whatever `read` returns.
    pub fn new(read: SettingReader) -> Self {
        Self { read }
    }
}

impl Hook for SettingHook {
    fn produce(&mut self, ctx: &RenderContext) -> ReportValue {
        (self.read)(ctx)
    }
}

/// Describes a [`SettingHook`].
pub(crate) fn setting(id: &str, label: &str, read: SettingReader) -> HookDescriptor {
    HookDescriptor::from_factory(id, label, move || Box::new(SettingHook::new(read)))
}
