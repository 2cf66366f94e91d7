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


//! Hooks reading Cycles render settings.
//!
//! Most of these only apply to jobs rendered with Cycles. The performance
//! group also applies to the internal Blender renderer, which shares the tile
//! and thread settings.

use scribe_core::context::{ENGINE_BLENDER_RENDER, ENGINE_CYCLES};
use scribe_core::{HookDescriptor, RenderContext, ReportValue, ScribeResult};
use scribe_telemetry::HookRegistry;

use super::{setting, SettingReader};

const CYCLES_ONLY: &[&str] = &[ENGINE_CYCLES];
const TILED_ENGINES: &[&str] = &[ENGINE_CYCLES, ENGINE_BLENDER_RENDER];

/// Display labels for the Cycles tile order identifiers.
const TILE_ORDERS: &[(&str, &str)] = &[
    ("CENTER", "Center"),
    ("RIGHT_TO_LEFT", "Right to Left"),
    ("LEFT_TO_RIGHT", "Left to Right"),
    ("TOP_TO_BOTTOM", "Top to Bottom"),
    ("BOTTOM_TO_TOP", "Bottom to Top"),
    ("HILBERT_SPIRAL", "Hilbert Spiral"),
];

/// Returns the label of a tile order, or the identifier itself when unknown.
pub fn tile_order_label(order: &str) -> &str {
    TILE_ORDERS
        .iter()
        .find(|(id, _)| *id == order)
        .map_or(order, |&(_, label)| label)
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

struct Setting {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    read: SettingReader,
}

struct SettingGroup {
    id: &'static str,
    label: &'static str,
    engines: &'static [&'static str],
    settings: &'static [Setting],
}

const GROUPS: &[SettingGroup] = &[
    SettingGroup {
        id: "seed",
        label: "Seed",
        engines: CYCLES_ONLY,
        settings: &[
            Setting {
                id: "seed",
                label: "Seed",
                description: "Cycles sampling seed.",
                read: |ctx| ctx.cycles.seed.into(),
            },
            Setting {
                id: "animated_seed",
                label: "Seed is Animated",
                description: "Whether or not the seed is animated from frame to frame.",
                read: |ctx| ctx.cycles.use_animated_seed.into(),
            },
        ],
    },
    SettingGroup {
        id: "vol_sample",
        label: "Volume Sampling",
        engines: CYCLES_ONLY,
        settings: &[
            Setting {
                id: "step_size",
                label: "Step Size",
                description: "Cycles volume step size.",
                read: |ctx| ctx.cycles.volume_step_size.into(),
            },
            Setting {
                id: "step_max_size",
                label: "Max Steps",
                description: "Maximum number of cycles volume steps.",
                read: |ctx| ctx.cycles.volume_max_steps.into(),
            },
        ],
    },
    SettingGroup {
        id: "perf",
        label: "Performance",
        engines: TILED_ENGINES,
        settings: &[
            Setting {
                id: "tile_size",
                label: "Tile Size",
                description: "Tile size.",
                read: |ctx| format!("{}x{}", ctx.render.tile_x, ctx.render.tile_y).into(),
            },
            Setting {
                id: "tile_order",
                label: "Tile Order",
                description: "Cycles tile order.",
                read: |ctx| tile_order_label(&ctx.cycles.tile_order).into(),
            },
            Setting {
                id: "threads_mode",
                label: "Threads Mode",
                description: "Which scheme is used to determine the number of threads.",
                read: |ctx| capitalize(&ctx.render.threads_mode).into(),
            },
            Setting {
                id: "threads",
                label: "Threads",
                description: "How many threads are being used to render.",
                read: |ctx| ctx.render.threads.into(),
            },
        ],
    },
    SettingGroup {
        id: "light_bounces",
        label: "Bounces",
        engines: CYCLES_ONLY,
        settings: &[
            Setting {
                id: "lb_bounds",
                label: "Total Bounds",
                description: "Bounds of the number of reflection bounces.",
                read: |ctx| {
                    format!(
                        "min: {}, max: {}",
                        ctx.cycles.min_bounces, ctx.cycles.max_bounces
                    )
                    .into()
                },
            },
            Setting {
                id: "lb_diffuse",
                label: "Diffuse",
                description: "Maximum number of diffuse reflection bounces.",
                read: |ctx| ctx.cycles.diffuse_bounces.into(),
            },
            Setting {
                id: "lb_glossy",
                label: "Glossy",
                description: "Maximum number of glossy reflection bounces.",
                read: |ctx| ctx.cycles.glossy_bounces.into(),
            },
            Setting {
                id: "lb_trans",
                label: "Transmission",
                description: "Maximum number of transmission reflection bounces.",
                read: |ctx| ctx.cycles.transmission_bounces.into(),
            },
            Setting {
                id: "lb_volume",
                label: "Volume",
                description: "Maximum number of volume reflection bounces.",
                read: |ctx| ctx.cycles.volume_bounces.into(),
            },
        ],
    },
    SettingGroup {
        id: "light_paths",
        label: "Light Paths",
        engines: CYCLES_ONLY,
        settings: &[
            Setting {
                id: "lp_shadows",
                label: "Shadows",
                description: "Use transparency of surfaces for rendering shadows.",
                read: |ctx| ctx.cycles.use_transparent_shadows.into(),
            },
            Setting {
                id: "lp_caustics_reflective",
                label: "Reflective Caustics",
                description: "Using reflective caustics.",
                read: |ctx| ctx.cycles.caustics_reflective.into(),
            },
            Setting {
                id: "lp_caustics_refractive",
                label: "Refractive Caustics",
                description: "Using refractive caustics.",
                read: |ctx| ctx.cycles.caustics_refractive.into(),
            },
            Setting {
                id: "lp_filter_glossy",
                label: "Filter Glossy",
                description: "Cycles filter glossy threshold.",
                read: |ctx| ctx.cycles.blur_glossy.into(),
            },
        ],
    },
    SettingGroup {
        id: "sampling",
        label: "Sampling",
        engines: CYCLES_ONLY,
        settings: &[
            Setting {
                id: "sm_samples",
                label: "Samples",
                description: "Number of cycles samples used, accounting for square samples.",
                read: samples,
            },
            Setting {
                id: "sm_clamp_direct",
                label: "Clamp Direct",
                description: "How much we are clamping direct light.",
                read: |ctx| ctx.cycles.sample_clamp_direct.into(),
            },
            Setting {
                id: "sm_clamp_indirect",
                label: "Clamp Indirect",
                description: "How much we are clamping indirect light.",
                read: |ctx| ctx.cycles.sample_clamp_indirect.into(),
            },
        ],
    },
];

fn samples(ctx: &RenderContext) -> ReportValue {
    let samples = i64::from(ctx.cycles.samples);
    if ctx.cycles.use_square_samples {
        ReportValue::Integer(samples * samples)
    } else {
        ReportValue::Integer(samples)
    }
}

impl Setting {
    fn describe(&self, group: &SettingGroup) -> HookDescriptor {
        setting(self.id, self.label, self.read)
            .in_group(group.id)
            .with_description(self.description)
            .for_engines(group.engines)
    }
}

/// Registers the Cycles groups and their hooks.
pub fn register(registry: &mut HookRegistry) -> ScribeResult<()> {
    for group in GROUPS {
        registry.register_group(group.id, group.label)?;
        for entry in group.settings {
            registry.register_hook(entry.describe(group))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> HookRegistry {
        let mut registry = HookRegistry::new();
        register(&mut registry).unwrap();
        registry
    }

    fn produce(registry: &HookRegistry, id: &str, ctx: &RenderContext) -> String {
        registry
            .get_hook(id)
            .unwrap()
            .instantiate()
            .produce(ctx)
            .to_string()
    }

    #[test]
    fn test_tile_order_labels() {
        assert_eq!(tile_order_label("HILBERT_SPIRAL"), "Hilbert Spiral");
        assert_eq!(tile_order_label("RIGHT_TO_LEFT"), "Right to Left");
        assert_eq!(tile_order_label("SOMETHING_NEW"), "SOMETHING_NEW");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("AUTO"), "Auto");
        assert_eq!(capitalize("fixed"), "Fixed");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_setting_values() {
        let registry = registry();
        let mut ctx = RenderContext::new(ENGINE_CYCLES);
        ctx.cycles.seed = 7;
        ctx.cycles.use_animated_seed = true;
        ctx.cycles.volume_step_size = 0.1;
        ctx.cycles.min_bounces = 3;
        ctx.cycles.max_bounces = 12;
        ctx.cycles.blur_glossy = 1.0;
        ctx.render.tile_x = 32;
        ctx.render.tile_y = 16;
        ctx.render.threads_mode = "FIXED".to_string();

        assert_eq!(produce(&registry, "seed", &ctx), "7");
        assert_eq!(produce(&registry, "animated_seed", &ctx), "True");
        assert_eq!(produce(&registry, "step_size", &ctx), "0.1");
        assert_eq!(produce(&registry, "tile_size", &ctx), "32x16");
        assert_eq!(produce(&registry, "threads_mode", &ctx), "Fixed");
        assert_eq!(produce(&registry, "lb_bounds", &ctx), "min: 3, max: 12");
        assert_eq!(produce(&registry, "lp_filter_glossy", &ctx), "1.0");
    }

    #[test]
    fn test_square_samples() {
        let registry = registry();
        let mut ctx = RenderContext::new(ENGINE_CYCLES);
        ctx.cycles.samples = 12;

        assert_eq!(produce(&registry, "sm_samples", &ctx), "12");
        ctx.cycles.use_square_samples = true;
        assert_eq!(produce(&registry, "sm_samples", &ctx), "144");
    }

    #[test]
    fn test_engine_applicability() {
        let registry = registry();
        let internal = RenderContext::new(ENGINE_BLENDER_RENDER);
        let other = RenderContext::new("OTHER_ENGINE");

        let internal_groups: Vec<&str> = registry
            .get_hooks()
            .filter(|h| h.applies(&internal))
            .map(|h| h.group())
            .collect();
        assert!(!internal_groups.is_empty());
        assert!(internal_groups.iter().all(|g| *g == "perf"));

        assert!(registry.get_hooks().all(|h| !h.applies(&other)));
        assert!(registry
            .get_hooks()
            .all(|h| h.applies(&RenderContext::new(ENGINE_CYCLES))));
    }

    #[test]
    fn test_every_hook_has_a_description() {
        assert!(registry().get_hooks().all(|h| !h.description().is_empty()));
    }
}
