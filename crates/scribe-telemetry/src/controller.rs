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


//! Host-facing driver tracking the one render job in flight.

use crate::config::ScribeConfig;
use crate::engine::{JobOutcome, ReportEngine};
use crate::registry::HookRegistry;
use scribe_core::{RenderContext, ScribeError, ScribeResult};
use std::path::PathBuf;

/// Receives the host's render lifecycle events and owns the current job.
///
/// The controller holds at most one [`ReportEngine`]. Whatever way a job
/// ends, finished, failed to write or cancelled, the controller is idle
/// afterwards, so no hook state survives into the next render.
///
/// Events that arrive while no job is tracked (for example because reports
/// are disabled in the configuration) are ignored.
#[derive(Debug)]
pub struct JobController {
    registry: HookRegistry,
    config: ScribeConfig,
    job: Option<ReportEngine>,
}

impl JobController {
    /// Creates an idle controller over a fully populated registry.
    pub fn new(registry: HookRegistry, config: ScribeConfig) -> Self {
        Self {
            registry,
            config,
            job: None,
        }
    }

    /// The hook catalog.
    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// The current settings.
    pub fn config(&self) -> &ScribeConfig {
        &self.config
    }

    /// Mutable access to the settings; changes apply from the next job on.
    pub fn config_mut(&mut self) -> &mut ScribeConfig {
        &mut self.config
    }

    /// Returns `true` while a job is tracked.
    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }

    /// The job in flight, if any.
    pub fn current_job(&self) -> Option<&ReportEngine> {
        self.job.as_ref()
    }

    /// A render job starts; frames will be written into `output_dir`.
    ///
    /// Fails with [`ScribeError::JobAlreadyActive`] if a job is already
    /// tracked, leaving that job untouched.
    pub fn job_start(
        &mut self,
        ctx: &RenderContext,
        output_dir: impl Into<PathBuf>,
    ) -> ScribeResult<()> {
        if self.job.is_some() {
            return Err(ScribeError::JobAlreadyActive);
        }
        if !self.config.enable {
            log::trace!("JobController: Reports disabled, not tracking job");
            return Ok(());
        }

        let target = self.config.output_target(output_dir);
        self.job = Some(ReportEngine::start(
            &self.registry,
            ctx,
            &self.config,
            target,
        ));
        Ok(())
    }

    /// The render wrote an output file.
    pub fn output_written(&mut self) {
        match self.job.as_mut() {
            Some(job) => job.mark_output_written(),
            None => log::trace!("JobController: Output written with no job tracked"),
        }
    }

    /// A frame is about to render.
    pub fn iteration_start(&mut self, ctx: &RenderContext) {
        match self.job.as_mut() {
            Some(job) => job.begin_iteration(ctx),
            None => log::trace!("JobController: Iteration start with no job tracked"),
        }
    }

    /// A frame finished rendering.
    pub fn iteration_end(&mut self, ctx: &RenderContext) {
        match self.job.as_mut() {
            Some(job) => job.end_iteration(ctx),
            None => log::trace!("JobController: Iteration end with no job tracked"),
        }
    }

    /// The render completed.
    ///
    /// Returns `Ok(None)` if no job was tracked. A report write failure is
    /// logged and returned; the controller is idle either way.
    pub fn job_finish(&mut self, ctx: &RenderContext) -> ScribeResult<Option<JobOutcome>> {
        let Some(job) = self.job.take() else {
            log::trace!("JobController: Job finished with no job tracked");
            return Ok(None);
        };

        match job.finish(ctx) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) => {
                log::error!("JobController: Render succeeded but its report was lost: {e}");
                Err(e)
            }
        }
    }

    /// The render was cancelled. Nothing is written.
    pub fn job_cancel(&mut self) {
        if let Some(job) = self.job.take() {
            job.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiscardReason;
    use scribe_core::{Hook, HookDescriptor, ReportValue};

    #[derive(Default)]
    struct Frames(u32);

    impl Hook for Frames {
        fn post_iteration(&mut self, _ctx: &RenderContext) {
            self.0 += 1;
        }

        fn produce(&mut self, _ctx: &RenderContext) -> ReportValue {
            self.0.into()
        }
    }

    fn controller(config: ScribeConfig) -> JobController {
        let mut registry = HookRegistry::new();
        registry
            .register_hook(HookDescriptor::new::<Frames>("frames", "Frames"))
            .unwrap();
        JobController::new(registry, config)
    }

    #[test]
    fn test_job_state_is_cleared_after_finish() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RenderContext::default();
        let mut controller = controller(ScribeConfig::default());

        controller.job_start(&ctx, dir.path()).unwrap();
        assert!(controller.is_active());
        controller.iteration_start(&ctx);
        controller.iteration_end(&ctx);
        controller.output_written();

        let outcome = controller.job_finish(&ctx).unwrap();

        assert!(matches!(outcome, Some(JobOutcome::Written { .. })));
        assert!(!controller.is_active());
        let text = std::fs::read_to_string(dir.path().join("render_settings.txt")).unwrap();
        assert!(text.ends_with("Frames : 1\n"));
    }

    #[test]
    fn test_second_start_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RenderContext::default();
        let mut controller = controller(ScribeConfig::default());

        controller.job_start(&ctx, dir.path()).unwrap();
        controller.iteration_end(&ctx);

        assert!(matches!(
            controller.job_start(&ctx, dir.path()),
            Err(ScribeError::JobAlreadyActive)
        ));
        assert_eq!(controller.current_job().unwrap().iterations(), 1);
    }

    #[test]
    fn test_cancel_clears_job_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RenderContext::default();
        let mut controller = controller(ScribeConfig::default());

        controller.job_start(&ctx, dir.path()).unwrap();
        controller.output_written();
        controller.job_cancel();

        assert!(!controller.is_active());
        assert!(controller.job_finish(&ctx).unwrap().is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_finish_without_output_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RenderContext::default();
        let mut controller = controller(ScribeConfig::default());

        controller.job_start(&ctx, dir.path()).unwrap();

        assert!(matches!(
            controller.job_finish(&ctx).unwrap(),
            Some(JobOutcome::Discarded(DiscardReason::NoOutputWritten))
        ));
        assert!(!controller.is_active());
    }

    #[test]
    fn test_disabled_config_tracks_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RenderContext::default();
        let mut controller = controller(ScribeConfig {
            enable: false,
            ..ScribeConfig::default()
        });

        controller.job_start(&ctx, dir.path()).unwrap();
        controller.output_written();
        controller.iteration_start(&ctx);
        controller.iteration_end(&ctx);

        assert!(!controller.is_active());
        assert!(controller.job_finish(&ctx).unwrap().is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_failure_still_clears_job() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RenderContext::default();
        let mut controller = controller(ScribeConfig::default());

        controller
            .job_start(&ctx, dir.path().join("missing"))
            .unwrap();
        controller.output_written();

        assert!(matches!(
            controller.job_finish(&ctx),
            Err(ScribeError::ReportWrite { .. })
        ));
        assert!(!controller.is_active());
    }
}
