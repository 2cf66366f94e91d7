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


//! # Scribe Core
//!
//! Foundational crate containing the hook contract, the render context handed
//! to hooks, and the value types hooks report.
//!
//! This crate defines the abstract "what" of render reporting. The
//! `scribe-telemetry` crate owns the registries and the report engine, and
//! `scribe-plugins` ships the packaged hooks.

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod group;
pub mod hook;
pub mod utils;
pub mod value;

pub use context::{CyclesSettings, RenderContext, RenderSettings};
pub use error::{ScribeError, ScribeResult};
pub use group::{Group, DEFAULT_GROUP, DEFAULT_GROUP_LABEL};
pub use hook::{Hook, HookDescriptor};
pub use utils::peak::{Peak, PeakTracker};
pub use utils::timer::Stopwatch;
pub use value::{ReportValue, ValueKind};
