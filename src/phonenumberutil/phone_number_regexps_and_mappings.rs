// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::Regex;

use crate::{
    phonenumberutil::{
        helper_constants::{
            DIGITS, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PLUS_CHARS,
            VALID_PUNCTUATION,
        },
        helper_functions::create_extn_pattern,
    },
    regexp_cache::RegexCache,
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Cache of metadata patterns that are not known until a region is
    /// resolved (national prefix rules).
    pub regexp_cache: RegexCache,

    /// Regular expression of viable phone numbers. This is location independent.
    /// Only digits separated by valid punctuation, with an optional leading
    /// plus sign. The digit count is bounded by the shortest national number
    /// and by the longest national number with the longest calling code.
    ///
    /// Corresponds to the following:
    /// `^[plus]?([punctuation]*[digits]){min,max}[punctuation]*$`
    pub valid_phone_number_pattern: Regex,

    /// A single valid punctuation character.
    pub valid_punctuation_pattern: Regex,

    /// Regexp of all known extension labels followed by 1 or more valid
    /// digits at the end of a number, for use when parsing.
    pub extn_pattern: Regex,

    /// The same labels anchored at the start, used to decide whether the
    /// text following a number in free text is its extension.
    pub extn_suffix_pattern: Regex,

    /// `$N` group references in national prefix transform rules.
    pub transform_rule_group_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        let extn_patterns_for_parsing = create_extn_pattern();
        // it'll be initialized only once, so we can use slow format!
        let valid_phone_number = format!(
            "^[{}]?(?:[{}]*[{}]){{{},{}}}[{}]*$",
            PLUS_CHARS,
            VALID_PUNCTUATION,
            DIGITS,
            MIN_LENGTH_FOR_NSN,
            MAX_LENGTH_FOR_NSN + MAX_LENGTH_COUNTRY_CODE,
            VALID_PUNCTUATION,
        );

        Self {
            regexp_cache: RegexCache::with_capacity(64),
            valid_phone_number_pattern: Regex::new(&valid_phone_number)
                .expect("Invalid constant pattern!"),
            valid_punctuation_pattern: Regex::new(&format!("[{}]", VALID_PUNCTUATION))
                .expect("Invalid constant pattern!"),
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", &extn_patterns_for_parsing))
                .expect("Invalid constant pattern!"),
            extn_suffix_pattern: Regex::new(&format!("(?i)^(?:{})", &extn_patterns_for_parsing))
                .expect("Invalid constant pattern!"),
            transform_rule_group_pattern: Regex::new("\\$(\\d)").expect("Invalid constant pattern!"),
        }
    }
}
