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

use std::{borrow::Cow, sync::Arc};

use regex::Regex;

use crate::{
    metadata::PhoneMetadata,
    regex_util::RegexConsume,
    regexp_cache::{InvalidRegexError, RegexCache},
};

/// How the leading national prefix of a region's numbers is removed.
///
/// Built from metadata when a region is known; regions differ only in the
/// data they carry, never in code.
#[derive(Debug, Clone)]
pub(super) enum NationalPrefixRule {
    /// Delete whatever the pattern matched.
    Strip { pattern: Arc<Regex> },
    /// Replace the matched prefix with the expanded template, e.g. Mexican
    /// "044" + number becoming "1" + number.
    Transform { pattern: Arc<Regex>, template: String },
}

impl NationalPrefixRule {
    /// Returns `None` for regions without a national prefix.
    pub(super) fn for_metadata(
        metadata: &PhoneMetadata,
        cache: &RegexCache,
        group_reference_pattern: &Regex,
    ) -> Result<Option<Self>, InvalidRegexError> {
        let prefix_pattern = if metadata.has_national_prefix_for_parsing() {
            Cow::Borrowed(metadata.national_prefix_for_parsing())
        } else if metadata.has_national_prefix() {
            Cow::Owned(regex::escape(metadata.national_prefix()))
        } else {
            return Ok(None);
        };
        let pattern = cache.get_regex(&prefix_pattern)?;

        if !metadata.has_national_prefix_transform_rule() || pattern.captures_len() < 2 {
            return Ok(Some(Self::Strip { pattern }));
        }
        // "$1" followed by a digit would be read as "$10" by the regex
        // crate, so group references are braced.
        let template = group_reference_pattern
            .replace_all(metadata.national_prefix_transform_rule(), "$${${1}}")
            .into_owned();
        Ok(Some(Self::Transform { pattern, template }))
    }

    /// Returns the digits with the prefix removed or rewritten, or `None`
    /// when they do not start with the prefix.
    pub(super) fn apply(&self, digits: &str) -> Option<String> {
        match self {
            Self::Strip { pattern } => {
                let prefix = pattern.find_start(digits)?;
                Some(digits[prefix.end()..].to_owned())
            }
            Self::Transform { pattern, template } => {
                let captures = pattern.captures_start(digits)?;
                let prefix = captures.get(0)?;
                let rest = &digits[prefix.end()..];
                // Alternatives of the pattern without the capturing group
                // are plain prefixes to delete.
                let last_group_matched = captures.iter().last().flatten().is_some();
                if !last_group_matched {
                    return Some(rest.to_owned());
                }
                let mut transformed = String::with_capacity(digits.len());
                captures.expand(template, &mut transformed);
                transformed.push_str(rest);
                Some(transformed)
            }
        }
    }
}
