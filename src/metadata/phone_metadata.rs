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

/// Length and structure constraints of national significant numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    /// Pattern the whole national significant number must match.
    pub national_number_pattern: Option<String>,
    /// Digit counts of numbers dialable from anywhere in the region.
    pub possible_length: Vec<i32>,
    /// Digit counts of numbers only dialable within a local area.
    pub possible_length_local_only: Vec<i32>,
}

impl PhoneNumberDesc {
    pub fn new(national_number_pattern: impl Into<String>, possible_length: impl Into<Vec<i32>>) -> Self {
        let mut possible_length = possible_length.into();
        possible_length.sort_unstable();
        Self {
            national_number_pattern: Some(national_number_pattern.into()),
            possible_length,
            possible_length_local_only: Vec::new(),
        }
    }

    pub fn with_local_only_lengths(mut self, lengths: impl Into<Vec<i32>>) -> Self {
        self.possible_length_local_only = lengths.into();
        self.possible_length_local_only.sort_unstable();
        self
    }

    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or_default()
    }
}

/// Numbering rules of a single region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadata {
    /// Region code, e.g. "US".
    pub id: String,
    /// Country calling code; several regions may share one.
    pub country_code: i32,
    /// Whether this region comes first among the regions sharing its
    /// calling code.
    pub main_country_for_code: bool,
    pub national_prefix: Option<String>,
    /// Pattern matching the national prefix when it is not a plain literal.
    /// When it has capturing groups and a transform rule is present, the
    /// prefix is rewritten instead of removed.
    pub national_prefix_for_parsing: Option<String>,
    /// Replacement template (`$1`, `$2`, ...) for
    /// `national_prefix_for_parsing` matches.
    pub national_prefix_transform_rule: Option<String>,
    /// Pattern identifying numbers of this region among regions sharing a
    /// calling code.
    pub leading_digits: Option<String>,
    pub general_desc: PhoneNumberDesc,
}

impl PhoneMetadata {
    pub fn new(id: impl Into<String>, country_code: i32, general_desc: PhoneNumberDesc) -> Self {
        Self {
            id: id.into(),
            country_code,
            general_desc,
            ..Default::default()
        }
    }

    pub fn with_national_prefix(mut self, national_prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(national_prefix.into());
        self
    }

    pub fn with_national_prefix_for_parsing(
        mut self,
        pattern: impl Into<String>,
        transform_rule: Option<&str>,
    ) -> Self {
        self.national_prefix_for_parsing = Some(pattern.into());
        self.national_prefix_transform_rule = transform_rule.map(str::to_owned);
        self
    }

    pub fn with_leading_digits(mut self, leading_digits: impl Into<String>) -> Self {
        self.leading_digits = Some(leading_digits.into());
        self
    }

    pub fn main_country(mut self) -> Self {
        self.main_country_for_code = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix(&self) -> bool {
        !self.national_prefix().is_empty()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix_for_parsing(&self) -> bool {
        !self.national_prefix_for_parsing().is_empty()
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix_transform_rule(&self) -> bool {
        !self.national_prefix_transform_rule().is_empty()
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or_default()
    }

    pub fn has_leading_digits(&self) -> bool {
        !self.leading_digits().is_empty()
    }
}

/// The whole metadata table handed to `PhoneNumberUtil`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadataCollection {
    pub metadata: Vec<PhoneMetadata>,
}

impl PhoneMetadataCollection {
    pub fn new(metadata: Vec<PhoneMetadata>) -> Self {
        Self { metadata }
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }
}

impl FromIterator<PhoneMetadata> for PhoneMetadataCollection {
    fn from_iter<T: IntoIterator<Item = PhoneMetadata>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
