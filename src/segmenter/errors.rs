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

use thiserror::Error;

/// Why a digit string could not be segmented. Both cases are a pure
/// function of the input and the rule table, so retrying is pointless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum SegmentError {
    /// No country code of the table starts the digit string.
    #[error("No known country code at the start of the number")]
    CountryNotFound,
    /// The country is known but none of its NDC alternatives was accepted.
    #[error("Country code {country_code} is known, but its area or service code is not")]
    NdcNotResolved { country_code: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unexpected character '{0}' in phone number")]
    UnexpectedCharacter(char),
    #[error("Phone number contains no digits")]
    NoDigits,
}
