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

use log::{debug, trace};

use super::{
    cascade,
    errors::SegmentError,
    local_splitter::{select_lengths, split_into_groups},
    segmented_number::SegmentedNumber,
};
use crate::{
    registry::CountryRegistry,
    rules::{CountryRule, errors::RuleTableError},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Splits digit strings into country code, trunk, NDC and local groups
/// according to a rule table.
///
/// Holds only immutable data, so one instance can be shared by any number
/// of threads.
#[derive(Debug)]
pub struct Segmenter {
    registry: CountryRegistry,
}

impl Segmenter {
    pub fn new(registry: CountryRegistry) -> Self {
        Self { registry }
    }

    pub fn from_rules(rules: Vec<CountryRule>) -> std::result::Result<Self, RuleTableError> {
        Ok(Self::new(CountryRegistry::new(rules)?))
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Segments a digit-only string that starts with a country code.
    ///
    /// Stages run once each, in order: country lookup, trunk detection,
    /// NDC cascade, local split. A short local number is not an error, it
    /// just produces fewer groups (see [`SegmentedNumber::is_complete`]).
    pub fn segment(&self, digits: &str) -> Result<SegmentedNumber> {
        let Some((rule, remainder)) = self.registry.lookup(digits) else {
            debug!("No country code found for '{}'", digits);
            return Err(SegmentError::CountryNotFound);
        };
        trace!("Country {} found, remainder '{}'", rule.code, remainder);

        let (trunk_present, national) = strip_trunk(rule, remainder);

        let Some(found) = cascade::evaluate(rule, national) else {
            debug!("Country {}: no ndc alternative accepted '{}'", rule.code, national);
            return Err(SegmentError::NdcNotResolved { country_code: rule.code.clone() });
        };

        let lengths = select_lengths(found.split, found.rest);
        let local_groups = split_into_groups(lengths, found.rest);
        trace!("Country {}: local '{}' split into {:?}", rule.code, found.rest, local_groups);

        Ok(SegmentedNumber {
            country_code: rule.code.clone(),
            trunk_present,
            trunk_format: rule.trunk.as_ref().is_some_and(|trunk| trunk.format),
            ndc: found.ndc.to_owned(),
            local_groups,
            planned_local_length: lengths.iter().sum(),
            display: rule.display.clone(),
        })
    }

    /// Country code followed by the national number. A trunk the country
    /// normalizes away is dropped, one it keeps stays inside the NDC.
    pub fn normalize(&self, digits: &str) -> Result<String> {
        let segmented = self.segment(digits)?;
        let national = segmented.national_number();
        Ok(fast_cat::concat_str!(segmented.country_code(), &national))
    }

    /// Segmentation succeeds and the local number has exactly the length
    /// of its grouping. Says nothing about whether the number is in use.
    pub fn is_plausible(&self, digits: &str) -> bool {
        self.segment(digits)
            .is_ok_and(|segmented| segmented.is_complete())
    }
}

/// Detects the trunk prefix and removes it when the country normalizes it.
fn strip_trunk<'d>(rule: &CountryRule, remainder: &'d str) -> (bool, &'d str) {
    let Some(trunk) = &rule.trunk else {
        return (false, remainder);
    };
    match trunk.prefix.match_len(remainder) {
        Some(len) if trunk.normalize => {
            trace!("Country {}: trunk '{}' stripped", rule.code, &remainder[..len]);
            (true, &remainder[len..])
        }
        Some(_) => (true, remainder),
        None => (false, remainder),
    }
}
