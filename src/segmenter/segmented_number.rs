// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::rules::DisplayOptions;

use super::helper_constants::PLUS_SIGN;

/// A successfully segmented number.
///
/// Owns all of its data; the display options are a copy of the country's,
/// so the value outlives the registry it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedNumber {
    pub(super) country_code: String,
    pub(super) trunk_present: bool,
    pub(super) trunk_format: bool,
    pub(super) ndc: String,
    pub(super) local_groups: Vec<String>,
    pub(super) planned_local_length: usize,
    pub(super) display: DisplayOptions,
}

impl SegmentedNumber {
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Whether the input carried the country's trunk prefix.
    pub fn trunk_present(&self) -> bool {
        self.trunk_present
    }

    /// Whether national output should show the trunk prefix again.
    /// Always `false` for countries without a trunk.
    pub fn trunk_format(&self) -> bool {
        self.trunk_format
    }

    /// National destination code, possibly empty.
    pub fn ndc(&self) -> &str {
        &self.ndc
    }

    pub fn local_groups(&self) -> &[String] {
        &self.local_groups
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// NDC followed by the local number, without any separator.
    pub fn national_number(&self) -> String {
        let mut national = String::with_capacity(self.ndc.len() + self.local_len());
        national.push_str(&self.ndc);
        for group in &self.local_groups {
            national.push_str(group);
        }
        national
    }

    /// `+` country code, national number.
    pub fn e164(&self) -> String {
        let national = self.national_number();
        fast_cat::concat_str!(PLUS_SIGN, &self.country_code, &national)
    }

    /// Country code, NDC (when not empty) and the local groups.
    pub fn parts(&self) -> Vec<&str> {
        let mut parts = Vec::with_capacity(self.local_groups.len() + 2);
        parts.push(self.country_code.as_str());
        if !self.ndc.is_empty() {
            parts.push(self.ndc.as_str());
        }
        parts.extend(self.local_groups.iter().map(String::as_str));
        parts
    }

    /// The local number has exactly as many digits as the grouping selected
    /// for it: nothing was missing and nothing had to be absorbed.
    pub fn is_complete(&self) -> bool {
        self.local_len() == self.planned_local_length
    }

    fn local_len(&self) -> usize {
        self.local_groups.iter().map(String::len).sum()
    }
}
