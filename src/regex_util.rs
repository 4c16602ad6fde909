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

use std::{fmt, sync::{Arc, LazyLock}};

use regex::{Captures, Regex};

use crate::regexp_cache::{InvalidRegexError, RegexCache};

static PATTERN_CACHE: LazyLock<RegexCache> = LazyLock::new(|| {
    RegexCache::with_capacity(128)
});

/// How a [`Pattern`] is tied to the string it is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchoring {
    /// The match has to begin at the first character.
    Prefix,
    /// The match has to cover the whole string.
    Full,
}

/// A regular expression together with the way it is anchored.
///
/// Anchoring is baked into the compiled regex (`^(?:src)` or `^(?:src)$`)
/// instead of checking match offsets afterwards: a leftmost-first search
/// may report a shorter alternative and miss a full match that exists.
/// The non-capturing wrapper keeps the group numbering of `src` intact.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    anchoring: Anchoring,
    regex: Arc<Regex>,
}

impl Pattern {
    pub fn prefix(source: &str) -> Result<Self, InvalidRegexError> {
        Self::compile(source, Anchoring::Prefix)
    }

    pub fn full(source: &str) -> Result<Self, InvalidRegexError> {
        Self::compile(source, Anchoring::Full)
    }

    fn compile(source: &str, anchoring: Anchoring) -> Result<Self, InvalidRegexError> {
        let regex = PATTERN_CACHE.anchored(source, anchoring)?;
        Ok(Self { source: source.to_owned(), anchoring, regex })
    }

    /// The pattern as it was declared, without anchors.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    /// Number of capture groups, the implicit whole-match group included.
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    pub fn captures<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        self.regex.captures(s)
    }

    /// Length in bytes of the matched text, if any.
    pub fn match_len(&self, s: &str) -> Option<usize> {
        self.regex.find(s).map(|found| found.end())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("anchoring", &self.anchoring)
            .finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.anchoring == other.anchoring && self.source == other.source
    }
}
