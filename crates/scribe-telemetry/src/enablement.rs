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


//! Per-hook enablement queries answered by the host.

use scribe_core::RenderContext;
use std::collections::HashMap;

/// Decides whether the user enabled a hook for the current job.
///
/// This is the host's side of the per-hook toggles: the report engine never
/// inspects host settings directly, it only asks this question by hook id.
pub trait HookEnablement {
    /// Returns `true` if the hook with `hook_id` should run for this job.
    fn is_enabled(&self, ctx: &RenderContext, hook_id: &str) -> bool;
}

/// Enables every hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllHooks;

impl HookEnablement for AllHooks {
    fn is_enabled(&self, _ctx: &RenderContext, _hook_id: &str) -> bool {
        true
    }
}

/// Explicit toggles; hooks without an entry are enabled.
impl HookEnablement for HashMap<String, bool> {
    fn is_enabled(&self, _ctx: &RenderContext, hook_id: &str) -> bool {
        self.get(hook_id).copied().unwrap_or(true)
    }
}

impl<F> HookEnablement for F
where
    F: Fn(&RenderContext, &str) -> bool,
{
    fn is_enabled(&self, ctx: &RenderContext, hook_id: &str) -> bool {
        self(ctx, hook_id)
    }
}
