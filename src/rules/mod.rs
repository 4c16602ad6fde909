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

//! In-memory rule model: one [`CountryRule`] per country calling code.
//!
//! The types here are plain data. The only behavior they carry is
//! [`CountryRule::validate`], which the registry runs once while it is
//! being built.

pub mod declarations;
pub mod errors;

use std::collections::BTreeSet;

use strum::IntoStaticStr;

use crate::{
    regex_util::Pattern,
    segmenter::helper_constants::MAX_LENGTH_COUNTRY_CODE,
};
use errors::RuleTableError;

/// Everything the engine knows about one country calling code.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRule {
    /// Country calling code, 1 to 3 ASCII digits.
    pub code: String,
    pub trunk: Option<TrunkSpec>,
    /// Tried strictly in declaration order, first accepted alternative wins.
    pub ndc_cascade: Vec<NdcAlternative>,
    /// Full-match veto applied to every candidate NDC.
    pub invalid_ndcs: Option<Pattern>,
    pub display: DisplayOptions,
}

/// Domestic access ("trunk") prefix of a country, like the `0` in `044 364 35 33`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrunkSpec {
    pub prefix: TrunkPrefix,
    /// Strip the detected trunk before the NDC cascade runs. When `false`
    /// the trunk digits stay in the stream and usually end up in the NDC.
    pub normalize: bool,
    /// Whether a renderer should put the trunk back in national output.
    pub format: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrunkPrefix {
    Literal(String),
    Pattern(Pattern),
}

impl TrunkPrefix {
    /// Length in bytes of the trunk at the start of `digits`.
    /// A zero-length hit counts as no trunk.
    pub(crate) fn match_len(&self, digits: &str) -> Option<usize> {
        let len = match self {
            TrunkPrefix::Literal(literal) => {
                digits.starts_with(literal.as_str()).then_some(literal.len())
            }
            TrunkPrefix::Pattern(pattern) => pattern.match_len(digits),
        }?;
        (len > 0).then_some(len)
    }
}

/// One link of the NDC cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct NdcAlternative {
    pub matcher: NdcMatcher,
    /// Grouping of the local number when this alternative wins.
    pub split: SplitSpec,
}

impl NdcAlternative {
    pub fn new(matcher: NdcMatcher, split: SplitSpec) -> Self {
        Self { matcher, split }
    }
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NdcMatcher {
    /// Empty NDC, always succeeds.
    None,
    OneOf(OneOf),
    /// `pattern` is prefix anchored; the NDC is the text of capture `group`.
    Match { pattern: Pattern, group: usize },
    /// Exactly `length` leading digits.
    Fixed { length: usize, zero_allowed: bool },
}

impl NdcMatcher {
    pub fn one_of<I, S>(literals: I, max_length: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NdcMatcher::OneOf(OneOf::new(literals, max_length))
    }

    pub fn fixed(length: usize) -> Self {
        NdcMatcher::Fixed { length, zero_allowed: true }
    }

    pub fn fixed_without_zero(length: usize) -> Self {
        NdcMatcher::Fixed { length, zero_allowed: false }
    }

    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// Literal NDC set.
///
/// Candidate prefixes are tried longest first, restricted to the lengths
/// that actually occur among the literals and do not exceed `max_length`.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    literals: BTreeSet<String>,
    max_length: Option<usize>,
    lengths: Vec<usize>,
}

impl OneOf {
    pub fn new<I, S>(literals: I, max_length: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let literals: BTreeSet<String> = literals.into_iter().map(Into::into).collect();
        let mut lengths: Vec<usize> = literals
            .iter()
            .map(String::len)
            .filter(|len| max_length.is_none_or(|max| *len <= max))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        lengths.reverse();
        Self { literals, max_length, lengths }
    }

    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(String::as_str)
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Candidate prefix lengths, longest first.
    pub(crate) fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub(crate) fn contains(&self, candidate: &str) -> bool {
        self.literals.contains(candidate)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitSpec {
    FixedGroups(Vec<usize>),
    /// Rules are full-match patterns against the local number, first hit wins.
    MatchedSplit {
        rules: Vec<(Pattern, Vec<usize>)>,
        fallback: Vec<usize>,
    },
}

impl SplitSpec {
    pub fn groups(lengths: &[usize]) -> Self {
        SplitSpec::FixedGroups(lengths.to_vec())
    }
}

/// Options only a renderer cares about. Copied into every result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub parentheses: bool,
    pub local_space: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { parentheses: false, local_space: " ".to_owned() }
    }
}

impl CountryRule {
    pub fn new(code: impl Into<String>, ndc_cascade: Vec<NdcAlternative>) -> Self {
        Self {
            code: code.into(),
            trunk: None,
            ndc_cascade,
            invalid_ndcs: None,
            display: DisplayOptions::default(),
        }
    }

    /// Structural checks on a single rule. Prefix-freedom across rules is
    /// checked by the registry.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        let code = &self.code;
        if code.is_empty()
            || code.len() > MAX_LENGTH_COUNTRY_CODE
            || !code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(RuleTableError::InvalidCountryCode(code.clone()));
        }
        if let Some(TrunkSpec { prefix: TrunkPrefix::Literal(literal), .. }) = &self.trunk {
            if literal.is_empty() {
                return Err(RuleTableError::EmptyTrunkPrefix(code.clone()));
            }
        }
        if self.ndc_cascade.is_empty() {
            return Err(RuleTableError::EmptyCascade(code.clone()));
        }
        for alternative in &self.ndc_cascade {
            validate_matcher(code, &alternative.matcher)?;
            validate_split(code, &alternative.split)?;
        }
        Ok(())
    }
}

fn validate_matcher(code: &str, matcher: &NdcMatcher) -> Result<(), RuleTableError> {
    match matcher {
        NdcMatcher::None | NdcMatcher::Fixed { .. } => Ok(()),
        NdcMatcher::OneOf(one_of) => {
            if one_of.lengths().is_empty() {
                return Err(RuleTableError::EmptyOneOf(code.to_owned()));
            }
            match one_of
                .literals()
                .find(|literal| literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()))
            {
                Some(literal) => Err(RuleTableError::InvalidNdcLiteral {
                    code: code.to_owned(),
                    literal: literal.to_owned(),
                }),
                None => Ok(()),
            }
        }
        NdcMatcher::Match { pattern, group } => {
            if *group >= pattern.captures_len() {
                return Err(RuleTableError::MissingCaptureGroup {
                    code: code.to_owned(),
                    pattern: pattern.source().to_owned(),
                    group: *group,
                });
            }
            Ok(())
        }
    }
}

fn validate_split(code: &str, split: &SplitSpec) -> Result<(), RuleTableError> {
    match split {
        SplitSpec::FixedGroups(lengths) => validate_lengths(code, lengths),
        SplitSpec::MatchedSplit { rules, fallback } => {
            for (_, lengths) in rules {
                validate_lengths(code, lengths)?;
            }
            if fallback.is_empty() {
                return Err(RuleTableError::MissingSplitFallback(code.to_owned()));
            }
            validate_lengths(code, fallback)
        }
    }
}

fn validate_lengths(code: &str, lengths: &[usize]) -> Result<(), RuleTableError> {
    if lengths.is_empty() || lengths.contains(&0) {
        return Err(RuleTableError::InvalidGroupLengths {
            code: code.to_owned(),
            lengths: lengths.to_vec(),
        });
    }
    Ok(())
}
