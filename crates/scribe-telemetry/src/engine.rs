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


//! The report engine: one render job's active hooks and their lifecycle.

use crate::config::OutputTarget;
use crate::enablement::HookEnablement;
use crate::registry::HookRegistry;
use crate::report::{Report, ReportLine};
use scribe_core::{Hook, RenderContext, ScribeError, ScribeResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A hook instance selected for the current job.
struct ActiveHook {
    id: String,
    label: String,
    group: String,
    group_label: String,
    hook: Box<dyn Hook>,
}

/// Why a job ended without a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The render never wrote an output file (preview or aborted run).
    NoOutputWritten,
    /// The render was cancelled.
    Cancelled,
}

/// How a job ended.
#[derive(Debug)]
pub enum JobOutcome {
    /// The report was written to `path`.
    Written {
        /// Where the report was written.
        path: PathBuf,
        /// The report text.
        report: Report,
    },
    /// No report was written.
    Discarded(DiscardReason),
}

/// Drives the active hooks of one render job and writes its report.
///
/// Constructing the engine starts the job. The engine then accepts any
/// number of iteration events, and ends with exactly one of
/// [`finish`](Self::finish) or [`cancel`](Self::cancel). Both consume the
/// engine, so no hook can be called once the job is over.
pub struct ReportEngine {
    active: Vec<ActiveHook>,
    target: OutputTarget,
    can_render: bool,
    iterations: usize,
}

impl ReportEngine {
    /// Starts a job.
    ///
    /// Walks the registry in report order and keeps each hook that the user
    /// enabled and that applies to `ctx`. The survivors are instantiated and
    /// their `pre_job` callbacks run in that same order.
    pub fn start(
        registry: &HookRegistry,
        ctx: &RenderContext,
        enablement: &dyn HookEnablement,
        target: OutputTarget,
    ) -> Self {
        let mut active = Vec::new();
        for (descriptor, group) in registry.resolved() {
            if !enablement.is_enabled(ctx, descriptor.id()) {
                log::trace!("ReportEngine: Hook '{}' disabled", descriptor.id());
                continue;
            }
            if !descriptor.applies(ctx) {
                log::trace!(
                    "ReportEngine: Hook '{}' does not apply to engine '{}'",
                    descriptor.id(),
                    ctx.engine
                );
                continue;
            }
            active.push(ActiveHook {
                id: descriptor.id().to_string(),
                label: descriptor.label().to_string(),
                group: group.id.clone(),
                group_label: group.label.clone(),
                hook: descriptor.instantiate(),
            });
        }

        for entry in &mut active {
            entry.hook.pre_job(ctx);
        }

        log::debug!(
            "ReportEngine: Job started with {} of {} hooks",
            active.len(),
            registry.len()
        );

        Self {
            active,
            target,
            can_render: false,
            iterations: 0,
        }
    }

    /// Forwards the start of an iteration to every active hook.
    pub fn begin_iteration(&mut self, ctx: &RenderContext) {
        for entry in &mut self.active {
            entry.hook.pre_iteration(ctx);
        }
    }

    /// Forwards the end of an iteration to every active hook.
    pub fn end_iteration(&mut self, ctx: &RenderContext) {
        for entry in &mut self.active {
            entry.hook.post_iteration(ctx);
        }
        self.iterations += 1;
    }

    /// Records that the render produced at least one real output file.
    ///
    /// Without this signal [`finish`](Self::finish) writes nothing.
    pub fn mark_output_written(&mut self) {
        self.can_render = true;
    }

    /// Returns `true` once an output file was reported.
    pub fn can_render(&self) -> bool {
        self.can_render
    }

    /// Ids of the active hooks, in report order.
    pub fn active_hook_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.active.iter().map(|entry| entry.id.as_str())
    }

    /// Number of completed iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Where the report will be written.
    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Ends the job and writes the report.
    ///
    /// If no output file was reported the job is discarded and no file is
    /// touched. Otherwise every active hook produces its value, the report
    /// is composed, and it is written in one piece, replacing any previous
    /// file. A failed write leaves no partial file behind.
    pub fn finish(mut self, ctx: &RenderContext) -> ScribeResult<JobOutcome> {
        if !self.can_render {
            log::debug!("ReportEngine: No output was written, skipping report");
            return Ok(JobOutcome::Discarded(DiscardReason::NoOutputWritten));
        }

        let values: Vec<_> = self
            .active
            .iter_mut()
            .map(|entry| entry.hook.produce(ctx))
            .collect();
        let lines: Vec<ReportLine<'_>> = self
            .active
            .iter()
            .zip(values)
            .map(|(entry, value)| ReportLine {
                group: &entry.group,
                group_label: &entry.group_label,
                label: &entry.label,
                value,
            })
            .collect();
        let report = Report::compose(&lines);
        log::debug!("ReportEngine: Composed report:\n{report}");

        let path = self.target.path();
        write_report(&path, &report)?;
        log::info!("ReportEngine: Report written to {}", path.display());

        Ok(JobOutcome::Written { path, report })
    }

    /// Ends the job without writing anything.
    pub fn cancel(self) {
        log::debug!(
            "ReportEngine: Job cancelled after {} iterations",
            self.iterations
        );
    }
}

impl std::fmt::Debug for ReportEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportEngine")
            .field("active", &self.active_hook_ids().collect::<Vec<_>>())
            .field("target", &self.target)
            .field("can_render", &self.can_render)
            .field("iterations", &self.iterations)
            .finish()
    }
}

/// Writes `report` to a temporary file next to `path`, then moves it into place.
fn write_report(path: &Path, report: &Report) -> ScribeResult<()> {
    let to_error = |source: std::io::Error| ScribeError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory).map_err(to_error)?;
    file.write_all(report.as_str().as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    file.persist(path).map_err(|e| to_error(e.error))?;
    Ok(())
}
