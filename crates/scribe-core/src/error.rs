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


//! Error taxonomy shared by every Scribe crate.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for Scribe operations.
pub type ScribeResult<T> = Result<T, ScribeError>;

/// An error raised by the registries, the report engine, or the job controller.
///
/// Registration errors are programming errors in the code that wires hooks
/// together and should abort start-up. [`ScribeError::ReportWrite`] is the only
/// runtime failure: the render itself succeeded, only its report was lost.
#[derive(Debug, Error)]
pub enum ScribeError {
    /// A group with this id was already registered.
    #[error("group '{0}' is already registered")]
    DuplicateGroup(String),
    /// A group id was referenced before being registered.
    #[error("group '{0}' has not been registered")]
    UnknownGroup(String),
    /// A hook with this id was already registered.
    #[error("hook '{0}' is already registered")]
    DuplicateHook(String),
    /// A job was started while another one is still being tracked.
    #[error("a render job is already being tracked")]
    JobAlreadyActive,
    /// The report could not be written to disk.
    #[error("failed to write report to '{}': {source}", path.display())]
    ReportWrite {
        /// The path the report was destined for.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
