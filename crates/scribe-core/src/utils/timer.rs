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


//! Wall-clock stopwatch used by timing hooks.

use std::time::{Duration, Instant};

/// Measures wall-clock time since it was started or last restarted.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    /// Creates a stopwatch running from now.
    #[inline]
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Resets the starting point to now.
    #[inline]
    pub fn restart(&mut self) {
        self.started_at = Instant::now();
    }

    /// Time elapsed since the stopwatch was started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Time elapsed since the stopwatch was started, in seconds.
    #[inline]
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
