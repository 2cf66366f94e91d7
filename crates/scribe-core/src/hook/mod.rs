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


//! The hook contract: one probe measuring or reporting one fact about a job.
//!
//! A hook type is described once by a [`HookDescriptor`] and instantiated
//! afresh for every job that selects it, so all per-job state lives in plain
//! struct fields and never outlives the job.

mod descriptor;

pub use self::descriptor::{Applicability, HookDescriptor, HookFactory};

use crate::context::RenderContext;
use crate::value::ReportValue;

/// A live probe bound to a single render job.
///
/// Every lifecycle method except [`produce`](Hook::produce) has a no-op
/// default. The report engine calls them in a fixed order, on one thread:
///
/// 1. `pre_job` once, when the job starts.
/// 2. `pre_iteration` / `post_iteration` around each frame, zero or more times.
/// 3. `produce` once, only if the report is actually written.
pub trait Hook: Send {
    /// Captures baseline state before any iteration runs.
    fn pre_job(&mut self, _ctx: &RenderContext) {}

    /// Called before each iteration (one animation frame).
    fn pre_iteration(&mut self, _ctx: &RenderContext) {}

    /// Called after each iteration; used for running aggregates.
    fn post_iteration(&mut self, _ctx: &RenderContext) {}

    /// Produces the value printed next to the hook's label in the report.
    fn produce(&mut self, ctx: &RenderContext) -> ReportValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FrameCounter {
        frames: u32,
    }

    impl Hook for FrameCounter {
        fn post_iteration(&mut self, _ctx: &RenderContext) {
            self.frames += 1;
        }

        fn produce(&mut self, _ctx: &RenderContext) -> ReportValue {
            self.frames.into()
        }
    }

    #[test]
    fn test_default_callbacks_are_noops() {
        let ctx = RenderContext::default();
        let mut hook = FrameCounter::default();

        hook.pre_job(&ctx);
        hook.pre_iteration(&ctx);
        hook.post_iteration(&ctx);
        hook.pre_iteration(&ctx);
        hook.post_iteration(&ctx);

        assert_eq!(hook.produce(&ctx), ReportValue::Integer(2));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let ctx = RenderContext::default();
        let descriptor = HookDescriptor::new::<FrameCounter>("frames", "Frames");

        let mut first = descriptor.instantiate();
        first.post_iteration(&ctx);
        first.post_iteration(&ctx);

        let mut second = descriptor.instantiate();
        assert_eq!(second.produce(&ctx), ReportValue::Integer(0));
        assert_eq!(first.produce(&ctx), ReportValue::Integer(2));
    }
}
