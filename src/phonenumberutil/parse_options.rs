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

use super::helper_constants::DEFAULT_MAX_EXTENSION_LENGTH;

/// Per-call parsing settings.
///
/// ```
/// use rlibphonescan::ParseOptions;
///
/// let options = ParseOptions::new().default_country("RU").extended(true);
/// assert_eq!(options.default_country.as_deref(), Some("RU"));
///
/// // A bare region code means "this country is required".
/// let required = ParseOptions::from("US");
/// assert_eq!(required.required_country.as_deref(), Some("US"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Country used for numbers written without a calling code. It does
    /// not override the calling code of a number in international form.
    pub required_country: Option<String>,
    /// Country used for numbers written without a calling code when no
    /// required country is given.
    pub default_country: Option<String>,
    /// Return possible-but-invalid numbers and failure reasons instead of
    /// an empty result.
    pub extended: bool,
    /// Longest extension (in digits) still recognized as one.
    pub max_extension_length: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required_country(mut self, region_code: impl Into<String>) -> Self {
        self.required_country = Some(region_code.into());
        self
    }

    pub fn default_country(mut self, region_code: impl Into<String>) -> Self {
        self.default_country = Some(region_code.into());
        self
    }

    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn max_extension_length(mut self, max_extension_length: usize) -> Self {
        self.max_extension_length = max_extension_length;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            required_country: None,
            default_country: None,
            extended: false,
            max_extension_length: DEFAULT_MAX_EXTENSION_LENGTH,
        }
    }
}

impl From<&str> for ParseOptions {
    fn from(region_code: &str) -> Self {
        Self::new().required_country(region_code)
    }
}
