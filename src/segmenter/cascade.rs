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

use crate::rules::{CountryRule, NdcMatcher, OneOf, SplitSpec};

/// The alternative that won the cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CascadeMatch<'r, 'd> {
    pub ndc: &'d str,
    pub split: &'r SplitSpec,
    /// Digits after the first `ndc.len()` digits.
    pub rest: &'d str,
}

/// Walks `rule.ndc_cascade` in declaration order and returns the first
/// alternative whose matcher succeeds and whose NDC is not vetoed by
/// `rule.invalid_ndcs`. `None` means the cascade is exhausted.
pub(super) fn evaluate<'r, 'd>(
    rule: &'r CountryRule,
    digits: &'d str,
) -> Option<CascadeMatch<'r, 'd>> {
    for (position, alternative) in rule.ndc_cascade.iter().enumerate() {
        let Some(ndc) = match_ndc(&alternative.matcher, digits) else {
            continue;
        };
        if let Some(invalid) = &rule.invalid_ndcs {
            if invalid.is_match(ndc) {
                trace!(
                    "Country {}: ndc '{}' from alternative #{} vetoed by '{}'",
                    rule.code, ndc, position, invalid.source()
                );
                continue;
            }
        }
        trace!(
            "Country {}: alternative #{} ({}) accepted ndc '{}'",
            rule.code, position, alternative.matcher.kind(), ndc
        );
        return Some(CascadeMatch {
            ndc,
            split: &alternative.split,
            rest: digits.get(ndc.len()..).unwrap_or_default(),
        });
    }
    None
}

/// Structural match of a single matcher. Returns the candidate NDC.
pub(super) fn match_ndc<'d>(matcher: &NdcMatcher, digits: &'d str) -> Option<&'d str> {
    match matcher {
        NdcMatcher::None => Some(""),
        NdcMatcher::OneOf(one_of) => match_one_of(one_of, digits),
        // The NDC has to lead the digits, otherwise the rest would
        // repeat part of it and drop whatever came before it.
        NdcMatcher::Match { pattern, group } => {
            let captures = pattern.captures(digits)?;
            captures
                .get(*group)
                .filter(|ndc| ndc.start() == 0)
                .map(|ndc| ndc.as_str())
        }
        NdcMatcher::Fixed { length, zero_allowed } => {
            let ndc = digits.get(..*length)?;
            if !*zero_allowed && ndc.starts_with('0') {
                return None;
            }
            Some(ndc)
        }
    }
}

fn match_one_of<'d>(one_of: &OneOf, digits: &'d str) -> Option<&'d str> {
    one_of
        .lengths()
        .iter()
        .filter_map(|&len| digits.get(..len))
        .find(|candidate| one_of.contains(candidate))
}

#[cfg(test)]
mod tests {
    use super::{evaluate, match_ndc};
    use crate::{
        regex_util::Pattern,
        rules::{CountryRule, NdcAlternative, NdcMatcher, SplitSpec},
    };

    #[test]
    fn none_always_matches_empty() {
        assert_eq!(match_ndc(&NdcMatcher::None, "123"), Some(""));
        assert_eq!(match_ndc(&NdcMatcher::None, ""), Some(""));
    }

    #[test]
    fn fixed_needs_enough_digits() {
        assert_eq!(match_ndc(&NdcMatcher::fixed(3), "2125551234"), Some("212"));
        assert_eq!(match_ndc(&NdcMatcher::fixed(3), "21"), None);
        assert_eq!(match_ndc(&NdcMatcher::fixed(3), "212"), Some("212"));
    }

    #[test]
    fn fixed_without_zero_rejects_leading_zero() {
        assert_eq!(match_ndc(&NdcMatcher::fixed_without_zero(2), "0441234"), None);
        assert_eq!(match_ndc(&NdcMatcher::fixed(2), "0441234"), Some("04"));
        assert_eq!(match_ndc(&NdcMatcher::fixed_without_zero(2), "441234"), Some("44"));
    }

    #[test]
    fn one_of_prefers_longest_candidate() {
        let matcher = NdcMatcher::one_of(["9", "91", "912"], None);
        assert_eq!(match_ndc(&matcher, "9123456"), Some("912"));
        assert_eq!(match_ndc(&matcher, "9134567"), Some("91"));
        assert_eq!(match_ndc(&matcher, "9345678"), Some("9"));
        assert_eq!(match_ndc(&matcher, "8123456"), None);
    }

    #[test]
    fn one_of_max_length_keeps_shorter_literal_visible() {
        let matcher = NdcMatcher::one_of(["91", "912"], Some(2));
        assert_eq!(match_ndc(&matcher, "9123456"), Some("91"));
    }

    #[test]
    fn one_of_ignores_candidates_longer_than_input() {
        let matcher = NdcMatcher::one_of(["1", "800"], None);
        assert_eq!(match_ndc(&matcher, "18"), Some("1"));
        assert_eq!(match_ndc(&matcher, "80"), None);
    }

    #[test]
    fn match_takes_the_declared_group() {
        let matcher = NdcMatcher::Match {
            pattern: Pattern::prefix(r"([67]\d{2})\d{6}$").unwrap(),
            group: 1,
        };
        assert_eq!(match_ndc(&matcher, "612345678"), Some("612"));
        assert_eq!(match_ndc(&matcher, "61234567"), None);
        assert_eq!(match_ndc(&matcher, "912345678"), None);
    }

    #[test]
    fn match_with_unparticipating_group_fails() {
        let matcher = NdcMatcher::Match {
            pattern: Pattern::prefix(r"(1)?2").unwrap(),
            group: 1,
        };
        assert_eq!(match_ndc(&matcher, "12"), Some("1"));
        assert_eq!(match_ndc(&matcher, "23"), None);
    }

    fn rule(cascade: Vec<NdcAlternative>, invalid: Option<&str>) -> CountryRule {
        let mut rule = CountryRule::new("99", cascade);
        rule.invalid_ndcs = invalid.map(|source| Pattern::full(source).unwrap());
        rule
    }

    #[test]
    fn match_group_must_start_the_digits() {
        let matcher = NdcMatcher::Match {
            pattern: Pattern::prefix(r"9(\d{2})").unwrap(),
            group: 1,
        };
        assert_eq!(match_ndc(&matcher, "9441234"), None);

        let rule = rule(
            vec![
                NdcAlternative::new(matcher, SplitSpec::groups(&[3, 2])),
                NdcAlternative::new(NdcMatcher::fixed(1), SplitSpec::groups(&[3, 3])),
            ],
            None,
        );
        let found = evaluate(&rule, "9441234").unwrap();
        assert_eq!(found.ndc, "9");
        assert_eq!(found.rest, "441234");
    }

    #[test]
    fn first_declared_alternative_wins() {
        let rule = rule(
            vec![
                NdcAlternative::new(NdcMatcher::fixed(2), SplitSpec::groups(&[4])),
                NdcAlternative::new(NdcMatcher::one_of(["123"], None), SplitSpec::groups(&[2, 2])),
            ],
            None,
        );
        let found = evaluate(&rule, "1234567").unwrap();
        assert_eq!(found.ndc, "12");
        assert_eq!(found.rest, "34567");
        assert_eq!(found.split, &SplitSpec::groups(&[4]));
    }

    #[test]
    fn vetoed_ndc_falls_through() {
        let rule = rule(
            vec![
                NdcAlternative::new(NdcMatcher::fixed(3), SplitSpec::groups(&[3, 4])),
                NdcAlternative::new(NdcMatcher::fixed(2), SplitSpec::groups(&[4, 4])),
            ],
            Some(r"9\d1"),
        );
        let found = evaluate(&rule, "91112345678").unwrap();
        assert_eq!(found.ndc, "91");
        assert_eq!(found.rest, "112345678");
        assert_eq!(found.split, &SplitSpec::groups(&[4, 4]));
    }

    #[test]
    fn veto_is_a_full_match() {
        let rule = rule(
            vec![NdcAlternative::new(NdcMatcher::fixed(3), SplitSpec::groups(&[3, 4]))],
            Some("21"),
        );
        assert_eq!(evaluate(&rule, "2125551234").unwrap().ndc, "212");
    }

    #[test]
    fn exhausted_when_everything_is_vetoed() {
        let rule = rule(
            vec![
                NdcAlternative::new(NdcMatcher::fixed(3), SplitSpec::groups(&[3, 4])),
                NdcAlternative::new(NdcMatcher::None, SplitSpec::groups(&[7])),
            ],
            Some(r"\d{3}|"),
        );
        assert!(evaluate(&rule, "9111234567").is_none());
    }

    #[test]
    fn exhausted_without_implicit_empty_ndc() {
        let rule = rule(
            vec![NdcAlternative::new(NdcMatcher::one_of(["44"], None), SplitSpec::groups(&[3, 4]))],
            None,
        );
        assert!(evaluate(&rule, "3312345").is_none());
    }
}
