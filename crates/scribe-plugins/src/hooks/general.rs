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


//! Engine independent hooks: timing, frame range and output resolution.

use scribe_core::{
    Hook, HookDescriptor, PeakTracker, RenderContext, ReportValue, ScribeResult, Stopwatch,
};
use scribe_telemetry::HookRegistry;

use super::setting;

/// Total job time, plus the slowest frame and when it was rendered.
#[derive(Debug, Default)]
pub struct TimeHook {
    job: Option<Stopwatch>,
    frame: Option<Stopwatch>,
    peaks: PeakTracker,
}

impl TimeHook {
    /// Formats the report value from a total duration in seconds.
    fn format(&self, total_secs: f64) -> String {
        let (peak_secs, peak_frame) = self
            .peaks
            .peak()
            .map_or((0.0, 0), |peak| (peak.value, peak.frame));
        format!("{total_secs:.2}s(Peak: {peak_secs:.2}s on frame {peak_frame})")
    }
}

impl Hook for TimeHook {
    fn pre_job(&mut self, _ctx: &RenderContext) {
        self.job = Some(Stopwatch::start());
    }

    fn pre_iteration(&mut self, _ctx: &RenderContext) {
        self.frame = Some(Stopwatch::start());
    }

    fn post_iteration(&mut self, ctx: &RenderContext) {
        if let Some(frame) = self.frame.take() {
            let secs = frame.elapsed_secs_f64();
            if self.peaks.observe(secs, ctx.frame_current) {
                log::trace!("TimeHook: New peak {secs:.3}s on frame {}", ctx.frame_current);
            }
        }
    }

    fn produce(&mut self, _ctx: &RenderContext) -> ReportValue {
        let total = self.job.as_ref().map_or(0.0, Stopwatch::elapsed_secs_f64);
        self.format(total).into()
    }
}

fn frame_rate(ctx: &RenderContext) -> ReportValue {
    format!("{}fps", ctx.render.fps).into()
}

fn frame_range(ctx: &RenderContext) -> ReportValue {
    format!(
        "{} - {}(Total Frames: {})",
        ctx.frame_start,
        ctx.frame_end,
        ctx.frame_count()
    )
    .into()
}

fn resolution(ctx: &RenderContext) -> ReportValue {
    format!("{}x{}px", ctx.render.resolution_x, ctx.render.resolution_y).into()
}

fn true_resolution(ctx: &RenderContext) -> ReportValue {
    let (x, y) = ctx.render.scaled_resolution();
    format!("{}x{}px", ReportValue::Float(x), ReportValue::Float(y)).into()
}

/// Registers the general hooks and the output resolution group.
pub fn register(registry: &mut HookRegistry) -> ScribeResult<()> {
    registry.register_hook(
        HookDescriptor::new::<TimeHook>("time", "Time").with_description("Total render time."),
    )?;
    registry.register_hook(
        setting("fps", "Frame Rate", frame_rate)
            .with_description("Frame rate of the rendered animation."),
    )?;
    registry.register_hook(
        setting("framerange", "Frame Range", frame_range)
            .with_description("The output frame range."),
    )?;

    registry.register_group("resolution", "Output Resolution")?;
    registry.register_hook(
        setting("resolution", "Resolution", resolution)
            .in_group("resolution")
            .with_description("Target resolution."),
    )?;
    registry.register_hook(
        setting("trueres", "True resolution", true_resolution)
            .in_group("resolution")
            .with_description("Actual output resolution."),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn produce(id: &str, ctx: &RenderContext) -> ReportValue {
        let mut registry = HookRegistry::new();
        register(&mut registry).unwrap();
        registry.get_hook(id).unwrap().instantiate().produce(ctx)
    }

    #[test]
    fn test_frame_and_resolution_formats() {
        let mut ctx = RenderContext::default();
        ctx.frame_start = 10;
        ctx.frame_end = 20;
        ctx.render.fps = 25;
        ctx.render.resolution_x = 1920;
        ctx.render.resolution_y = 1080;
        ctx.render.resolution_percentage = 50;

        assert_eq!(produce("fps", &ctx).to_string(), "25fps");
        assert_eq!(
            produce("framerange", &ctx).to_string(),
            "10 - 20(Total Frames: 11)"
        );
        assert_eq!(produce("resolution", &ctx).to_string(), "1920x1080px");
        assert_eq!(produce("trueres", &ctx).to_string(), "960.0x540.0px");
    }

    #[test]
    fn test_true_resolution_keeps_fractions() {
        let mut ctx = RenderContext::default();
        ctx.render.resolution_x = 1001;
        ctx.render.resolution_y = 501;
        ctx.render.resolution_percentage = 50;

        assert_eq!(produce("trueres", &ctx).to_string(), "500.5x250.5px");
    }

    #[test]
    fn test_time_without_iterations_reports_zero_peak() {
        let ctx = RenderContext::default();
        let mut hook = TimeHook::default();
        hook.pre_job(&ctx);

        let value = hook.produce(&ctx).to_string();
        assert!(value.ends_with("s(Peak: 0.00s on frame 0)"), "got {value}");
    }

    #[test]
    fn test_time_peak_tracks_slowest_frame() {
        let mut ctx = RenderContext::default();
        let mut hook = TimeHook::default();
        hook.pre_job(&ctx);

        for (frame, pause_ms) in [(1, 0), (2, 60), (3, 0)] {
            ctx.frame_current = frame;
            hook.pre_iteration(&ctx);
            thread::sleep(Duration::from_millis(pause_ms));
            hook.post_iteration(&ctx);
        }

        let value = hook.produce(&ctx).to_string();
        assert!(value.ends_with("on frame 2)"), "got {value}");
        assert_eq!(hook.peaks.iterations(), 3);
    }

    #[test]
    fn test_general_hooks_are_registered_in_order() {
        let mut registry = HookRegistry::new();
        register(&mut registry).unwrap();

        let ids: Vec<&str> = registry.get_hooks().map(|h| h.id()).collect();
        assert_eq!(
            ids,
            vec!["time", "fps", "framerange", "resolution", "trueres"]
        );
        assert!(registry
            .get_hooks()
            .all(|h| h.applies(&RenderContext::new("OTHER_ENGINE"))));
    }
}
