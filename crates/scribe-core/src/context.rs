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


//! The render-time facts hooks probe.
//!
//! The host application owns the real scene. It copies the settings hooks
//! care about into a [`RenderContext`] when a job starts, and keeps
//! `frame_current` up to date before each iteration callback.

use serde::{Deserialize, Serialize};

/// Identifier of the Cycles path tracer.
pub const ENGINE_CYCLES: &str = "CYCLES";
/// Identifier of the internal scanline renderer.
pub const ENGINE_BLENDER_RENDER: &str = "BLENDER_RENDER";

/// Snapshot of the host scene handed to every hook lifecycle call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    /// The active render engine (e.g. `"CYCLES"`).
    pub engine: String,
    /// The frame currently being rendered.
    pub frame_current: i32,
    /// First frame of the output range.
    pub frame_start: i32,
    /// Last frame of the output range, inclusive.
    pub frame_end: i32,
    /// Output settings shared by every engine.
    pub render: RenderSettings,
    /// Cycles sampling and light path settings.
    pub cycles: CyclesSettings,
}

impl RenderContext {
    /// Creates a context for the given render engine with default scene settings.
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the job is rendered with `engine`.
    pub fn uses_engine(&self, engine: &str) -> bool {
        self.engine == engine
    }

    /// Number of frames in the output range.
    pub fn frame_count(&self) -> i32 {
        self.frame_end - (self.frame_start - 1)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            engine: ENGINE_CYCLES.to_string(),
            frame_current: 1,
            frame_start: 1,
            frame_end: 250,
            render: RenderSettings::default(),
            cycles: CyclesSettings::default(),
        }
    }
}

/// Output and performance settings common to all render engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Playback frame rate of the animation.
    pub fps: u32,
    /// Horizontal target resolution in pixels.
    pub resolution_x: u32,
    /// Vertical target resolution in pixels.
    pub resolution_y: u32,
    /// Scale applied to the target resolution, in percent.
    pub resolution_percentage: u32,
    /// Tile width in pixels.
    pub tile_x: u32,
    /// Tile height in pixels.
    pub tile_y: u32,
    /// How the thread count is chosen (`"AUTO"` or `"FIXED"`).
    pub threads_mode: String,
    /// Number of render threads.
    pub threads: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fps: 24,
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 50,
            tile_x: 64,
            tile_y: 64,
            threads_mode: "AUTO".to_string(),
            threads: 4,
        }
    }
}

impl RenderSettings {
    /// The resolution actually written, after the percentage scale is applied.
    pub fn scaled_resolution(&self) -> (f64, f64) {
        let factor = f64::from(self.resolution_percentage) / 100.0;
        (
            f64::from(self.resolution_x) * factor,
            f64::from(self.resolution_y) * factor,
        )
    }
}

/// Settings specific to the Cycles path tracer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclesSettings {
    /// Sampling seed.
    pub seed: i32,
    /// Whether the seed changes from frame to frame.
    pub use_animated_seed: bool,
    /// Distance between volume shading samples.
    pub volume_step_size: f64,
    /// Maximum number of volume steps.
    pub volume_max_steps: u32,
    /// Tile traversal order identifier (e.g. `"HILBERT_SPIRAL"`).
    pub tile_order: String,
    /// Minimum number of light bounces.
    pub min_bounces: u32,
    /// Maximum number of light bounces.
    pub max_bounces: u32,
    /// Maximum number of diffuse bounces.
    pub diffuse_bounces: u32,
    /// Maximum number of glossy bounces.
    pub glossy_bounces: u32,
    /// Maximum number of transmission bounces.
    pub transmission_bounces: u32,
    /// Maximum number of volume bounces.
    pub volume_bounces: u32,
    /// Whether surface transparency is used for shadows.
    pub use_transparent_shadows: bool,
    /// Whether reflective caustics are traced.
    pub caustics_reflective: bool,
    /// Whether refractive caustics are traced.
    pub caustics_refractive: bool,
    /// Glossy filter threshold.
    pub blur_glossy: f64,
    /// Samples per pixel.
    pub samples: u32,
    /// Whether `samples` is squared.
    pub use_square_samples: bool,
    /// Clamp applied to direct light samples (0 disables).
    pub sample_clamp_direct: f64,
    /// Clamp applied to indirect light samples (0 disables).
    pub sample_clamp_indirect: f64,
}

impl Default for CyclesSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            use_animated_seed: false,
            volume_step_size: 0.1,
            volume_max_steps: 1024,
            tile_order: "HILBERT_SPIRAL".to_string(),
            min_bounces: 3,
            max_bounces: 12,
            diffuse_bounces: 4,
            glossy_bounces: 4,
            transmission_bounces: 12,
            volume_bounces: 0,
            use_transparent_shadows: true,
            caustics_reflective: true,
            caustics_refractive: true,
            blur_glossy: 0.0,
            samples: 128,
            use_square_samples: false,
            sample_clamp_direct: 0.0,
            sample_clamp_indirect: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_is_inclusive() {
        let mut ctx = RenderContext::new(ENGINE_CYCLES);
        ctx.frame_start = 10;
        ctx.frame_end = 20;
        assert_eq!(ctx.frame_count(), 11);
    }

    #[test]
    fn test_scaled_resolution() {
        let settings = RenderSettings {
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 50,
            ..RenderSettings::default()
        };
        assert_eq!(settings.scaled_resolution(), (960.0, 540.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let ctx: RenderContext =
            serde_json::from_str(r#"{ "engine": "BLENDER_RENDER", "render": { "fps": 30 } }"#)
                .unwrap();

        assert!(ctx.uses_engine(ENGINE_BLENDER_RENDER));
        assert!(!ctx.uses_engine(ENGINE_CYCLES));
        assert_eq!(ctx.render.fps, 30);
        assert_eq!(ctx.render.resolution_x, 1920);
        assert_eq!(ctx.cycles.samples, 128);
    }
}
