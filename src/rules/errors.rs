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

use crate::regexp_cache::InvalidRegexError;

/// A rule table that must never reach the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("Country code '{0}' must consist of 1 to 3 ascii digits")]
    InvalidCountryCode(String),
    #[error("Country code '{0}' is declared more than once")]
    DuplicateCountryCode(String),
    /// Lookup walks the digits once and stops at the first code it meets,
    /// so `longer` could never be reached.
    #[error("Country code '{shorter}' is a prefix of country code '{longer}'")]
    AmbiguousCountryCodes { shorter: String, longer: String },
    #[error("Country '{0}' declares no ndc alternatives")]
    EmptyCascade(String),
    #[error("Country '{0}' declares an empty trunk prefix")]
    EmptyTrunkPrefix(String),
    #[error("Country '{0}' declares a one_of matcher without usable literals")]
    EmptyOneOf(String),
    #[error("Country '{code}' declares ndc literal '{literal}' which is not a digit string")]
    InvalidNdcLiteral { code: String, literal: String },
    #[error("Country '{code}': pattern '{pattern}' has no capture group {group}")]
    MissingCaptureGroup { code: String, pattern: String, group: usize },
    #[error("Country '{code}' declares invalid group lengths {lengths:?}")]
    InvalidGroupLengths { code: String, lengths: Vec<usize> },
    #[error("Country '{0}' declares a matched split without fallback")]
    MissingSplitFallback(String),
}

#[derive(Debug, Error)]
pub enum RuleLoadError {
    #[error("Could not parse rule declarations: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Country '{code}': {source}")]
    InvalidRegex {
        code: String,
        #[source]
        source: InvalidRegexError,
    },
    #[error("{0}")]
    Table(#[from] RuleTableError),
}
