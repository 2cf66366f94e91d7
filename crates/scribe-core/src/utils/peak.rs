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


//! Running maximum over per-iteration samples.

/// The largest sample seen so far and where it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// The sample value.
    pub value: f64,
    /// 0-based index of the iteration that produced it.
    pub iteration: usize,
    /// Host frame number current when it was recorded.
    pub frame: i32,
}

/// Tracks the peak of a series of per-iteration samples.
///
/// A sample replaces the current peak only when it is strictly greater, so
/// ties keep the earliest iteration. NaN samples are counted but never peak.
#[derive(Debug, Clone, Default)]
pub struct PeakTracker {
    iterations: usize,
    peak: Option<Peak>,
}

impl PeakTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the sample of the next iteration. Returns `true` if it became the new peak.
    pub fn observe(&mut self, value: f64, frame: i32) -> bool {
        let iteration = self.iterations;
        self.iterations += 1;

        if value.is_nan() {
            return false;
        }
        let is_new_peak = self.peak.map_or(true, |peak| value > peak.value);
        if is_new_peak {
            self.peak = Some(Peak {
                value,
                iteration,
                frame,
            });
        }
        is_new_peak
    }

    /// The current peak, if any sample was recorded.
    pub fn peak(&self) -> Option<Peak> {
        self.peak
    }

    /// Number of samples observed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
