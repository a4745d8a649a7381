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

use super::{enums::CountryCodeSource, parse_result::Span};

/// A phone-number-shaped piece of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct CandidateMatch {
    /// The matched characters of the original input.
    pub raw_text: String,
    pub span: Span,
}

/// Number and extension isolated from the input, before any country
/// specific processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ExtractedNumber {
    /// Digit-normalized number text, punctuation and a leading plus kept.
    pub number: String,
    pub extension: Option<String>,
    pub span: Span,
}

/// National digits together with the calling code and how it was found.
#[derive(Debug)]
pub(super) struct PhoneNumberWithCountryCodeSource<'a> {
    pub national_number: String,
    pub country_calling_code: i32,
    pub country_code_source: CountryCodeSource,
    /// Region the caller named, for numbers without a calling code.
    pub region_code: Option<&'a str>,
}
