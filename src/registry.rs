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

use log::trace;

use crate::{
    rules::{CountryRule, errors::RuleTableError},
    segmenter::helper_constants::MAX_LENGTH_COUNTRY_CODE,
};

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<usize>; 10],
    /// Index into `CountryRegistry::rules` when a country code ends here.
    country: Option<usize>,
}

/// All country rules, indexed by calling code in a digit trie.
///
/// The set of codes is prefix-free, so walking the input one digit at a time
/// and stopping at the first terminal node finds the only possible country.
#[derive(Debug)]
pub struct CountryRegistry {
    rules: Vec<CountryRule>,
    nodes: Vec<TrieNode>,
}

impl CountryRegistry {
    /// Validates every rule and indexes it. Any failure here is a broken
    /// table, not something to recover from per call.
    pub fn new(rules: Vec<CountryRule>) -> Result<Self, RuleTableError> {
        let mut registry = Self {
            nodes: vec![TrieNode::default()],
            rules: Vec::with_capacity(rules.len()),
        };
        for rule in rules {
            rule.validate()?;
            registry.insert(rule)?;
        }
        trace!("Country registry built with {} countries", registry.rules.len());
        Ok(registry)
    }

    fn insert(&mut self, rule: CountryRule) -> Result<(), RuleTableError> {
        let mut node = ROOT;
        for digit in digit_values(&rule.code) {
            if let Some(existing) = self.nodes[node].country {
                return Err(RuleTableError::AmbiguousCountryCodes {
                    shorter: self.rules[existing].code.clone(),
                    longer: rule.code.clone(),
                });
            }
            let next = self.nodes[node].children[digit];
            node = match next {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children[digit] = Some(child);
                    child
                }
            };
        }

        if let Some(existing) = self.nodes[node].country {
            return Err(RuleTableError::DuplicateCountryCode(self.rules[existing].code.clone()));
        }
        if let Some(longer) = self.first_country_below(node) {
            return Err(RuleTableError::AmbiguousCountryCodes {
                shorter: rule.code,
                longer: self.rules[longer].code.clone(),
            });
        }
        self.nodes[node].country = Some(self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    fn first_country_below(&self, node: usize) -> Option<usize> {
        self.nodes[node].children.iter().flatten().find_map(|&child| {
            self.nodes[child].country.or_else(|| self.first_country_below(child))
        })
    }

    /// Finds the country whose code starts `digits` and returns it together
    /// with the digits that follow the code.
    pub fn lookup<'a>(&self, digits: &'a str) -> Option<(&CountryRule, &'a str)> {
        let mut node = ROOT;
        for (consumed, byte) in digits.bytes().take(MAX_LENGTH_COUNTRY_CODE).enumerate() {
            if !byte.is_ascii_digit() {
                return None;
            }
            node = self.nodes[node].children[usize::from(byte - b'0')]?;
            if let Some(country) = self.nodes[node].country {
                return Some((&self.rules[country], &digits[consumed + 1..]));
            }
        }
        None
    }

    pub fn get(&self, code: &str) -> Option<&CountryRule> {
        self.lookup(code)
            .and_then(|(rule, rest)| rest.is_empty().then_some(rule))
    }

    pub fn countries(&self) -> impl Iterator<Item = &CountryRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Caller guarantees `code` is ascii digits (see `CountryRule::validate`).
fn digit_values(code: &str) -> impl Iterator<Item = usize> + '_ {
    code.bytes().map(|b| usize::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::CountryRegistry;
    use crate::rules::{CountryRule, NdcAlternative, NdcMatcher, SplitSpec, errors::RuleTableError};

    fn rule(code: &str) -> CountryRule {
        CountryRule::new(
            code,
            vec![NdcAlternative::new(NdcMatcher::None, SplitSpec::groups(&[4]))],
        )
    }

    fn registry(codes: &[&str]) -> Result<CountryRegistry, RuleTableError> {
        CountryRegistry::new(codes.iter().map(|code| rule(code)).collect())
    }

    #[test]
    fn lookup_returns_rule_and_remainder() {
        let registry = registry(&["1", "34", "378", "41"]).unwrap();
        assert_eq!(registry.len(), 4);

        let (rule, rest) = registry.lookup("12125551234").unwrap();
        assert_eq!(rule.code, "1");
        assert_eq!(rest, "2125551234");

        let (rule, rest) = registry.lookup("378123456").unwrap();
        assert_eq!(rule.code, "378");
        assert_eq!(rest, "123456");

        let (rule, rest) = registry.lookup("34").unwrap();
        assert_eq!(rule.code, "34");
        assert_eq!(rest, "");
    }

    #[test]
    fn lookup_fails_for_unknown_or_short_input() {
        let registry = registry(&["1", "378"]).unwrap();
        assert!(registry.lookup("").is_none());
        assert!(registry.lookup("37").is_none());
        assert!(registry.lookup("3791234").is_none());
        assert!(registry.lookup("2125551234").is_none());
        assert!(registry.lookup("+1212").is_none());
    }

    #[test]
    fn get_requires_exact_code() {
        let registry = registry(&["41", "378"]).unwrap();
        assert_eq!(registry.get("41").unwrap().code, "41");
        assert!(registry.get("4").is_none());
        assert!(registry.get("411").is_none());
    }

    #[test]
    fn shorter_code_declared_first_blocks_longer_one() {
        assert_eq!(
            registry(&["3", "34"]).unwrap_err(),
            RuleTableError::AmbiguousCountryCodes { shorter: "3".to_owned(), longer: "34".to_owned() }
        );
    }

    #[test]
    fn longer_code_declared_first_blocks_shorter_one() {
        assert_eq!(
            registry(&["378", "37"]).unwrap_err(),
            RuleTableError::AmbiguousCountryCodes { shorter: "37".to_owned(), longer: "378".to_owned() }
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        assert_eq!(
            registry(&["41", "41"]).unwrap_err(),
            RuleTableError::DuplicateCountryCode("41".to_owned())
        );
    }

    #[test]
    fn invalid_rules_are_rejected() {
        assert_eq!(
            registry(&["4444"]).unwrap_err(),
            RuleTableError::InvalidCountryCode("4444".to_owned())
        );
    }
}
