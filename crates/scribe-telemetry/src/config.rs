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


//! User-facing settings and the resolved report location.

use crate::enablement::HookEnablement;
use crate::registry::HookRegistry;
use scribe_core::{RenderContext, ScribeError, ScribeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the report file unless configured otherwise.
pub const DEFAULT_REPORT_FILENAME: &str = "render_settings.txt";

/// Settings the user edits in the host's render properties.
///
/// ```json
/// {
///   "enable": true,
///   "filename": "render_settings.txt",
///   "advanced_settings": true,
///   "hooks": { "resolution": false }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribeConfig {
    /// Whether reports are written at all.
    pub enable: bool,
    /// Name of the report file, written next to the rendered frames.
    pub filename: String,
    /// When `false` every applicable hook runs; when `true` the per-hook toggles decide.
    pub advanced_settings: bool,
    /// Per-hook toggles keyed by hook id. Missing entries count as enabled.
    pub hooks: BTreeMap<String, bool>,
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            enable: true,
            filename: DEFAULT_REPORT_FILENAME.to_string(),
            advanced_settings: false,
            hooks: BTreeMap::new(),
        }
    }
}

impl ScribeConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> ScribeResult<Self> {
        serde_json::from_str(json).map_err(|e| ScribeError::Config(e.to_string()))
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ScribeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScribeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> ScribeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ScribeError::Config(e.to_string()))
    }

    /// Saves the configuration to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> ScribeResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)
            .map_err(|e| ScribeError::Config(format!("{}: {e}", path.display())))
    }

    /// The toggle state of a hook, regardless of `advanced_settings`.
    pub fn is_hook_enabled(&self, hook_id: &str) -> bool {
        self.hooks.get(hook_id).copied().unwrap_or(true)
    }

    /// Sets the toggle of a hook.
    pub fn set_hook_enabled(&mut self, hook_id: impl Into<String>, enabled: bool) {
        self.hooks.insert(hook_id.into(), enabled);
    }

    /// Adds an enabled toggle for every registered hook that has none yet.
    ///
    /// Returns the number of toggles added. Existing toggles are kept, as are
    /// toggles for hooks the registry does not know.
    pub fn sync_toggles(&mut self, registry: &HookRegistry) -> usize {
        let before = self.hooks.len();
        for descriptor in registry.get_hooks() {
            self.hooks.entry(descriptor.id().to_string()).or_insert(true);
        }
        self.hooks.len() - before
    }

    /// Where the report goes when frames are rendered into `directory`.
    pub fn output_target(&self, directory: impl Into<PathBuf>) -> OutputTarget {
        OutputTarget::new(directory, self.filename.clone())
    }
}

impl HookEnablement for ScribeConfig {
    fn is_enabled(&self, _ctx: &RenderContext, hook_id: &str) -> bool {
        !self.advanced_settings || self.is_hook_enabled(hook_id)
    }
}

/// A resolved output directory and report file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Directory the render writes its frames to.
    pub directory: PathBuf,
    /// Report file name inside `directory`.
    pub filename: String,
}

impl OutputTarget {
    /// Creates a target.
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// Full path of the report file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}
