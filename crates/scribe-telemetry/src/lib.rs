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


//! # Scribe Telemetry
//!
//! Collects render settings and performance facts during a render job and
//! writes them to a human-readable report once the job completes.
//!
//! The moving parts, leaf-first:
//!
//! - [`GroupRegistry`] and [`HookRegistry`]: the catalog of known hooks,
//!   kept sorted by group rank.
//! - [`ReportEngine`]: one job's active hooks, driven through the render
//!   lifecycle and composed into a [`Report`].
//! - [`JobController`]: the host-facing driver holding at most one job.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod enablement;
pub mod engine;
pub mod registry;
pub mod report;

pub use config::{OutputTarget, ScribeConfig, DEFAULT_REPORT_FILENAME};
pub use controller::JobController;
pub use enablement::{AllHooks, HookEnablement};
pub use engine::{DiscardReason, JobOutcome, ReportEngine};
pub use registry::{GroupRegistry, HookRegistry, ToggleGroup};
pub use report::{Report, ReportLine};
