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

use crate::rules::SplitSpec;

/// Picks the group lengths `spec` prescribes for `local`.
pub(super) fn select_lengths<'s>(spec: &'s SplitSpec, local: &str) -> &'s [usize] {
    match spec {
        SplitSpec::FixedGroups(lengths) => lengths.as_slice(),
        SplitSpec::MatchedSplit { rules, fallback } => rules
            .iter()
            .find(|(pattern, _)| pattern.is_match(local))
            .map_or(fallback.as_slice(), |(_, lengths)| lengths.as_slice()),
    }
}

/// Cuts `local` into groups of `lengths`, left to right.
///
/// Digits left after the last length go into the last group. A short
/// number yields fewer or shorter groups; empty groups are never emitted.
pub(super) fn split_into_groups(lengths: &[usize], local: &str) -> Vec<String> {
    let mut groups = Vec::with_capacity(lengths.len());
    let mut rest = local;
    for (i, &len) in lengths.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        let (group, tail) = if i + 1 == lengths.len() {
            (rest, "")
        } else {
            split_at_chars(rest, len)
        };
        groups.push(group.to_owned());
        rest = tail;
    }
    groups
}

fn split_at_chars(s: &str, count: usize) -> (&str, &str) {
    let at = s.char_indices().nth(count).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}
