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


//! # Scribe Plugins
//!
//! The hooks shipped with Scribe, ready to be installed into a
//! [`HookRegistry`].
//!
//! ```rust
//! use scribe_telemetry::HookRegistry;
//!
//! let mut registry = HookRegistry::new();
//! scribe_plugins::register(&mut registry).unwrap();
//! assert!(registry.get_hook("time").is_some());
//! ```

#![warn(missing_docs)]

pub mod hooks;

use scribe_core::ScribeResult;
use scribe_telemetry::HookRegistry;

/// Registers every built-in group and hook, general ones first.
pub fn register(registry: &mut HookRegistry) -> ScribeResult<()> {
    hooks::general::register(registry)?;
    hooks::cycles::register(registry)?;
    log::info!(
        "Scribe plugins registered: {} hooks in {} groups",
        registry.len(),
        registry.groups().len()
    );
    Ok(())
}
