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


// Scribe Sandbox
// Simulates a render job and writes its settings report

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use scribe_core::RenderContext;
use scribe_telemetry::{HookRegistry, JobController, JobOutcome, ScribeConfig};

/// Runs a simulated render through the report engine.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the add-on preferences. Defaults are used when absent.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// JSON file describing the scene's render settings.
    #[arg(long, short)]
    scene: Option<PathBuf>,

    /// Directory the simulated frames are written to.
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,

    /// Simulated render time per frame, in milliseconds.
    #[arg(long, default_value = "10")]
    frame_ms: u64,

    /// Cancel the render after the first frame.
    #[arg(long)]
    cancel: bool,

    /// Render a preview: frames are rendered but never written.
    #[arg(long)]
    preview: bool,

    /// Print the hook toggles available for the scene and exit.
    #[arg(long)]
    list: bool,

    /// Save the preferences, with a toggle for every hook, back to the config file.
    #[arg(long, requires = "config")]
    save_config: bool,
}

fn load_scene(path: Option<&PathBuf>) -> Result<RenderContext> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading scene {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("parsing scene {}", path.display()))
        }
        None => Ok(RenderContext::default()),
    }
}

fn print_toggles(registry: &HookRegistry, config: &ScribeConfig, ctx: &RenderContext) {
    for section in registry.toggle_layout(ctx) {
        println!("{}:", section.group.label);
        for hook in section.hooks {
            let mark = if config.is_hook_enabled(hook.id()) { "x" } else { " " };
            println!("  [{mark}] {:<24} {}", hook.label(), hook.description());
        }
    }
}

fn run(cli: &Cli, controller: &mut JobController, mut ctx: RenderContext) -> Result<()> {
    controller.job_start(&ctx, &cli.output_dir)?;

    for frame in ctx.frame_start..=ctx.frame_end {
        ctx.frame_current = frame;
        controller.iteration_start(&ctx);
        thread::sleep(Duration::from_millis(cli.frame_ms));
        if !cli.preview {
            controller.output_written();
        }
        controller.iteration_end(&ctx);
        log::debug!("Sandbox: Rendered frame {frame}");

        if cli.cancel {
            log::info!("Sandbox: Render cancelled on frame {frame}");
            controller.job_cancel();
            return Ok(());
        }
    }

    match controller.job_finish(&ctx)? {
        Some(JobOutcome::Written { path, report }) => {
            println!("{report}");
            log::info!("Sandbox: Report saved to {}", path.display());
        }
        Some(JobOutcome::Discarded(reason)) => log::info!("Sandbox: No report ({reason:?})"),
        None => log::info!("Sandbox: Reports are disabled"),
    }
    Ok(())
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut registry = HookRegistry::new();
    scribe_plugins::register(&mut registry)?;

    let mut config = match &cli.config {
        Some(path) if path.exists() => ScribeConfig::from_file(path)?,
        _ => ScribeConfig::default(),
    };
    let added = config.sync_toggles(&registry);
    if added > 0 {
        log::debug!("Sandbox: Added {added} hook toggles to the config");
    }
    if cli.save_config {
        if let Some(path) = &cli.config {
            config.to_file(path)?;
            log::info!("Sandbox: Config saved to {}", path.display());
        }
    }

    let ctx = load_scene(cli.scene.as_ref())?;
    if cli.list {
        print_toggles(&registry, &config, &ctx);
        return Ok(());
    }

    let mut controller = JobController::new(registry, config);
    run(&cli, &mut controller, ctx)
}
