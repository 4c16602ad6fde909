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

//! Turns what people type into the digit string the segmenter expects.

use log::trace;

use crate::segmenter::{
    InputError,
    helper_constants::{PLUS_CHARS, VALID_PUNCTUATION},
};

/// Keeps the digits of `input`, converting any Unicode decimal digit to
/// ascii. One leading plus sign and the usual grouping punctuation are
/// dropped; anything else (letters, `*`, `#`) is rejected.
pub fn digits_only(input: &str) -> Result<String, InputError> {
    let input = input.trim();
    let input = input
        .strip_prefix(|c: char| PLUS_CHARS.contains(c))
        .unwrap_or(input);
    let decimals = dec_from_char::normalize_decimals(input);

    let mut digits = String::with_capacity(decimals.len());
    for c in decimals.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !VALID_PUNCTUATION.contains(c) {
            return Err(InputError::UnexpectedCharacter(c));
        }
    }
    if digits.is_empty() {
        return Err(InputError::NoDigits);
    }
    trace!("Normalized '{}' to '{}'", input, digits);
    Ok(digits)
}
