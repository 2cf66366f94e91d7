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


use scribe_core::{Hook, HookDescriptor, RenderContext, ReportValue};
use scribe_telemetry::{
    AllHooks, DiscardReason, HookRegistry, JobOutcome, OutputTarget, ReportEngine, ScribeConfig,
};

// --- HOOKS FOR THIS TEST ---
#[derive(Default)]
struct TimeHook;
impl Hook for TimeHook {
    fn produce(&mut self, _ctx: &RenderContext) -> ReportValue {
        ReportValue::from("1.00s")
    }
}

#[derive(Default)]
struct ResolutionHook;
impl Hook for ResolutionHook {
    fn produce(&mut self, ctx: &RenderContext) -> ReportValue {
        format!("{}x{}px", ctx.render.resolution_x, ctx.render.resolution_y).into()
    }
}

#[derive(Default)]
struct SeedHook;
impl Hook for SeedHook {
    fn produce(&mut self, ctx: &RenderContext) -> ReportValue {
        ctx.cycles.seed.into()
    }
}

fn registry() -> HookRegistry {
    let mut registry = HookRegistry::new();
    registry.register_group("seed", "Seed").unwrap();
    registry
        .register_hook(HookDescriptor::new::<TimeHook>("time", "Time"))
        .unwrap();
    registry
        .register_hook(HookDescriptor::new::<ResolutionHook>("resolution", "Resolution"))
        .unwrap();
    registry
        .register_hook(
            HookDescriptor::new::<SeedHook>("seed", "Seed")
                .in_group("seed")
                .for_engines(&["CYCLES"]),
        )
        .unwrap();
    registry
}

fn config_without_resolution() -> ScribeConfig {
    let mut config = ScribeConfig {
        advanced_settings: true,
        ..ScribeConfig::default()
    };
    config.set_hook_enabled("time", true);
    config.set_hook_enabled("seed", true);
    config.set_hook_enabled("resolution", false);
    config
}

#[test]
fn test_cycles_job_reports_enabled_applicable_hooks() {
    // --- 1. ARRANGE ---
    let registry = registry();
    let config = config_without_resolution();
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = RenderContext::new("CYCLES");
    ctx.cycles.seed = 42;

    // --- 2. ACT ---
    let mut engine = ReportEngine::start(&registry, &ctx, &config, config.output_target(dir.path()));
    assert_eq!(engine.active_hook_ids().collect::<Vec<_>>(), vec!["time", "seed"]);

    engine.begin_iteration(&ctx);
    engine.end_iteration(&ctx);
    engine.mark_output_written();
    let outcome = engine.finish(&ctx).expect("report should be written");

    // --- 3. ASSERT ---
    let path = dir.path().join("render_settings.txt");
    let written = std::fs::read_to_string(&path).unwrap();
    let rule = "=".repeat(50);
    assert_eq!(
        written,
        format!("General:\n{rule}\n\nTime : 1.00s\n\nSeed:\n{rule}\n\nSeed : 42\n")
    );
    assert!(!written.contains("Resolution"));

    match outcome {
        JobOutcome::Written { path: written_to, report } => {
            assert_eq!(written_to, path);
            assert_eq!(report.as_str(), written);
        }
        JobOutcome::Discarded(reason) => panic!("job discarded: {reason:?}"),
    }
}

#[test]
fn test_other_engine_skips_cycles_hooks() {
    let registry = registry();
    let config = config_without_resolution();
    let dir = tempfile::tempdir().unwrap();
    let ctx = RenderContext::new("OTHER_ENGINE");

    let engine = ReportEngine::start(&registry, &ctx, &config, config.output_target(dir.path()));

    assert_eq!(engine.active_hook_ids().collect::<Vec<_>>(), vec!["time"]);
}

#[test]
fn test_report_is_byte_identical_across_runs() {
    let registry = registry();
    let ctx = RenderContext::new("CYCLES");
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();

    let mut reports = Vec::new();
    for dir in [&first_dir, &second_dir] {
        let mut engine = ReportEngine::start(
            &registry,
            &ctx,
            &AllHooks,
            OutputTarget::new(dir.path(), "report.txt"),
        );
        engine.mark_output_written();
        engine.finish(&ctx).unwrap();
        reports.push(std::fs::read(dir.path().join("report.txt")).unwrap());
    }

    assert_eq!(reports[0], reports[1]);
}

#[test]
fn test_finish_replaces_previous_report() {
    let registry = registry();
    let ctx = RenderContext::new("CYCLES");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    std::fs::write(&path, "stale report from an older render").unwrap();

    let mut engine = ReportEngine::start(
        &registry,
        &ctx,
        &AllHooks,
        OutputTarget::new(dir.path(), "report.txt"),
    );
    engine.mark_output_written();
    engine.finish(&ctx).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("General:\n"));
    assert!(!written.contains("stale"));
}

#[test]
fn test_no_file_without_output_or_after_cancel() {
    let registry = registry();
    let ctx = RenderContext::new("CYCLES");
    let dir = tempfile::tempdir().unwrap();
    let target = OutputTarget::new(dir.path(), "report.txt");

    // A preview render: the job completes but writes no frames.
    let mut preview = ReportEngine::start(&registry, &ctx, &AllHooks, target.clone());
    preview.begin_iteration(&ctx);
    preview.end_iteration(&ctx);
    assert!(matches!(
        preview.finish(&ctx).unwrap(),
        JobOutcome::Discarded(DiscardReason::NoOutputWritten)
    ));

    // A cancelled render, even after frames were written.
    let mut cancelled = ReportEngine::start(&registry, &ctx, &AllHooks, target);
    cancelled.mark_output_written();
    cancelled.cancel();

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_registration_order_is_stable_within_groups() {
    let mut registry = HookRegistry::new();
    let groups = ["g1", "g2", "g3"];
    for group in groups {
        registry.register_group(group, group.to_uppercase()).unwrap();
    }

    // Interleave registrations across groups in a scrambled order.
    let plan = [
        ("g3", "c1"),
        ("g1", "a1"),
        ("default", "d1"),
        ("g2", "b1"),
        ("g1", "a2"),
        ("g3", "c2"),
        ("default", "d2"),
        ("g1", "a3"),
    ];
    for (group, id) in plan {
        registry
            .register_hook(HookDescriptor::new::<TimeHook>(id, id).in_group(group))
            .unwrap();
    }

    let order: Vec<&str> = registry.get_hooks().map(|h| h.id()).collect();
    assert_eq!(order, vec!["d1", "d2", "a1", "a2", "a3", "b1", "c1", "c2"]);

    let ranks: Vec<u32> = registry
        .get_hooks()
        .map(|h| registry.get_group(h.group()).unwrap().rank)
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
}
