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

//! JSON form of a rule table.
//!
//! ```json
//! [{
//!   "code": "41",
//!   "trunk": { "prefix": { "literal": "0" } },
//!   "ndcs": [
//!     { "matcher": { "kind": "one_of", "literals": ["800", "840"] },
//!       "split": { "kind": "groups", "lengths": [3, 3] } },
//!     { "matcher": { "kind": "fixed", "length": 2 },
//!       "split": { "kind": "groups", "lengths": [3, 2, 2] } }
//!   ]
//! }]
//! ```

use log::{error, trace};
use serde::Deserialize;

use super::{
    CountryRule, DisplayOptions, NdcAlternative, NdcMatcher, SplitSpec, TrunkPrefix, TrunkSpec,
    errors::RuleLoadError,
};
use crate::{
    regex_util::Pattern,
    registry::CountryRegistry,
    regexp_cache::InvalidRegexError,
    segmenter::helper_constants::BUILTIN_RULES,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountryDecl {
    code: String,
    #[serde(default)]
    trunk: Option<TrunkDecl>,
    ndcs: Vec<AlternativeDecl>,
    #[serde(default)]
    invalid_ndcs: Option<String>,
    #[serde(default)]
    parentheses: bool,
    #[serde(default = "default_local_space")]
    local_space: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TrunkDecl {
    prefix: TrunkPrefixDecl,
    #[serde(default = "default_true")]
    normalize: bool,
    #[serde(default = "default_true")]
    format: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TrunkPrefixDecl {
    Literal(String),
    Pattern(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlternativeDecl {
    matcher: MatcherDecl,
    split: SplitDecl,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum MatcherDecl {
    None,
    OneOf {
        literals: Vec<String>,
        #[serde(default)]
        max_length: Option<usize>,
    },
    Match {
        pattern: String,
        #[serde(default = "default_group")]
        group: usize,
    },
    Fixed {
        length: usize,
        #[serde(default = "default_true")]
        zero_allowed: bool,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum SplitDecl {
    Groups {
        lengths: Vec<usize>,
    },
    Matched {
        rules: Vec<SplitRuleDecl>,
        #[serde(default)]
        fallback: Vec<usize>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SplitRuleDecl {
    pattern: String,
    lengths: Vec<usize>,
}

fn default_true() -> bool {
    true
}

fn default_group() -> usize {
    1
}

fn default_local_space() -> String {
    DisplayOptions::default().local_space
}

/// Parses declarations into rules. Patterns are compiled here; structural
/// checks are left to [`CountryRegistry::new`].
pub fn parse_rules(json: &str) -> Result<Vec<CountryRule>, RuleLoadError> {
    let declarations: Vec<CountryDecl> = serde_json::from_str(json)?;
    trace!("Parsed {} country declarations", declarations.len());
    declarations.into_iter().map(CountryDecl::into_rule).collect()
}

/// Parses declarations and builds a registry, rejecting tables that are
/// not prefix-free.
pub fn load_registry(json: &str) -> Result<CountryRegistry, RuleLoadError> {
    let rules = parse_rules(json)?;
    Ok(CountryRegistry::new(rules)?)
}

/// Loads the table compiled into the crate.
pub fn load_builtin_rules() -> Result<CountryRegistry, RuleLoadError> {
    load_registry(BUILTIN_RULES).inspect_err(|err| {
        error!("Could not load compiled-in rule table: {}", err);
    })
}

impl CountryDecl {
    fn into_rule(self) -> Result<CountryRule, RuleLoadError> {
        let code = self.code;
        let regex_err = |source: InvalidRegexError| RuleLoadError::InvalidRegex {
            code: code.clone(),
            source,
        };

        let trunk = match self.trunk {
            Some(decl) => Some(TrunkSpec {
                prefix: match decl.prefix {
                    TrunkPrefixDecl::Literal(literal) => TrunkPrefix::Literal(literal),
                    TrunkPrefixDecl::Pattern(source) => {
                        TrunkPrefix::Pattern(Pattern::prefix(&source).map_err(regex_err)?)
                    }
                },
                normalize: decl.normalize,
                format: decl.format,
            }),
            None => None,
        };

        let invalid_ndcs = match self.invalid_ndcs {
            Some(source) => Some(Pattern::full(&source).map_err(regex_err)?),
            None => None,
        };

        let mut ndc_cascade = Vec::with_capacity(self.ndcs.len());
        for alternative in self.ndcs {
            let matcher = match alternative.matcher {
                MatcherDecl::None => NdcMatcher::None,
                MatcherDecl::OneOf { literals, max_length } => {
                    NdcMatcher::one_of(literals, max_length)
                }
                MatcherDecl::Match { pattern, group } => NdcMatcher::Match {
                    pattern: Pattern::prefix(&pattern).map_err(regex_err)?,
                    group,
                },
                MatcherDecl::Fixed { length, zero_allowed } => {
                    NdcMatcher::Fixed { length, zero_allowed }
                }
            };
            let split = match alternative.split {
                SplitDecl::Groups { lengths } => SplitSpec::FixedGroups(lengths),
                SplitDecl::Matched { rules, fallback } => SplitSpec::MatchedSplit {
                    rules: rules
                        .into_iter()
                        .map(|rule| Ok((Pattern::full(&rule.pattern).map_err(regex_err)?, rule.lengths)))
                        .collect::<Result<Vec<_>, RuleLoadError>>()?,
                    fallback,
                },
            };
            ndc_cascade.push(NdcAlternative::new(matcher, split));
        }

        Ok(CountryRule {
            trunk,
            ndc_cascade,
            invalid_ndcs,
            display: DisplayOptions {
                parentheses: self.parentheses,
                local_space: self.local_space,
            },
            code,
        })
    }
}
