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


//! Composition of hook outputs into the report text.

use scribe_core::ReportValue;
use std::fmt::{self, Write as _};

/// Width of the `=` rule printed under each group header.
pub const SEPARATOR_WIDTH: usize = 50;

/// One hook's contribution to a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine<'a> {
    /// Id of the hook's group; a change of id starts a new section.
    pub group: &'a str,
    /// Header printed for the group.
    pub group_label: &'a str,
    /// Label of the hook.
    pub label: &'a str,
    /// Value the hook produced.
    pub value: ReportValue,
}

/// The finished, immutable report text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    text: String,
}

impl Report {
    /// Lays out `lines` in the given order.
    ///
    /// Labels are padded to the longest label plus one. Each time the group
    /// changes, a section header is emitted: a blank line, `"{label}:"`, a rule
    /// of `=` and another blank line. The report never starts with a blank line.
    ///
    /// ```text
    /// General:
    /// ==================================================
    ///
    /// Time       : 12.31s(Peak: 0.52s on frame 3)
    /// Frame Rate : 24fps
    ///
    /// Seed:
    /// ==================================================
    ///
    /// Seed       : 0
    /// ```
    pub fn compose(lines: &[ReportLine<'_>]) -> Self {
        let width = lines
            .iter()
            .map(|line| line.label.chars().count())
            .max()
            .unwrap_or(0)
            + 1;

        let mut text = String::new();
        let mut current_group: Option<&str> = None;
        for line in lines {
            if current_group != Some(line.group) {
                if !text.is_empty() {
                    text.push('\n');
                }
                let _ = writeln!(text, "{}:", line.group_label);
                let _ = writeln!(text, "{}", "=".repeat(SEPARATOR_WIDTH));
                text.push('\n');
                current_group = Some(line.group);
            }
            let _ = writeln!(text, "{:<width$}: {}", line.label, line.value);
        }
        Self { text }
    }

    /// The report text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the report and returns its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns `true` if no hook contributed a line.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
