// Copyright (C) 2009 The Libphonenumber Authors
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

use log::{error, trace};

use crate::{
    interfaces::MatcherApi,
    metadata::PhoneNumberDesc,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(128),
        }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        // Patterns are anchored here rather than checked after the search:
        // with alternations the leftmost-first match is not necessarily the
        // longest one.
        let anchored = if allow_prefix_match {
            fast_cat::concat_str!("^(?:", number_pattern, ")")
        } else {
            fast_cat::concat_str!("^(?:", number_pattern, ")$")
        };
        let regexp = self.cache.get_regex(&anchored).inspect_err(|err| {
            error!("Metadata pattern '{}' is not a valid regex: {}", number_pattern, err.source)
        })?;
        Ok(regexp.is_match(phone_number))
    }
}

impl MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> Result<bool, InvalidRegexError> {
        let national_number_pattern = number_desc.national_number_pattern();
        // We don't want to consider it a match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            trace!("No national number pattern to match '{number}' against");
            return Ok(false);
        }
        self.match_number(number, national_number_pattern, false)
    }

    fn match_leading_digits(
        &self,
        number: &str,
        leading_digits_pattern: &str,
    ) -> Result<bool, InvalidRegexError> {
        if leading_digits_pattern.is_empty() {
            return Ok(false);
        }
        self.match_number(number, leading_digits_pattern, true)
    }
}
