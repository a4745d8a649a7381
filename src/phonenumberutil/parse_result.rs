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

use super::{
    enums::CountryCodeSource,
    errors::ValidationError,
    helper_constants::PLUS_SIGN,
    rfc3966::format_rfc3966,
};

/// Location of a recognized number in the original input.
///
/// Offsets count characters (Unicode scalar values), start inclusive and
/// end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Span {
    pub fn new(start_offset: usize, end_offset: usize) -> Self {
        debug_assert!(start_offset <= end_offset);
        Self {
            start_offset,
            end_offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The spanned characters of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let mut indices = text
            .char_indices()
            .map(|(index, _)| index)
            .chain(std::iter::once(text.len()));
        let Some(start) = indices.nth(self.start_offset) else {
            return "";
        };
        let end = if self.is_empty() {
            start
        } else {
            indices.nth(self.len() - 1).unwrap_or(text.len())
        };
        &text[start..end]
    }
}

/// Outcome of parsing one text.
///
/// `ParseResult::default()` is the empty result: nothing that looks like a
/// phone number was recognized. A result can have a calling code but no
/// country when several regions share the code and the number does not
/// tell them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Region code of the number, e.g. "RU".
    pub country: Option<String>,
    pub calling_code: Option<i32>,
    /// National significant number, digits only.
    pub national_number: Option<String>,
    pub extension: Option<String>,
    /// The national number matches its region's pattern.
    pub valid: Option<bool>,
    /// The national number has a possible length.
    pub possible: Option<bool>,
    pub span: Option<Span>,
    pub country_code_source: Option<CountryCodeSource>,
    /// Set by extended parsing when the number is not possible.
    pub failure: Option<ValidationError>,
}

impl ParseResult {
    pub(super) fn rejected(failure: ValidationError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    /// No number recognized.
    pub fn is_empty(&self) -> bool {
        self.calling_code.is_none() && self.country.is_none() && self.national_number.is_none()
    }

    pub fn is_valid(&self) -> bool {
        self.valid == Some(true)
    }

    pub fn is_possible(&self) -> bool {
        self.possible == Some(true)
    }

    pub fn start_offset(&self) -> Option<usize> {
        self.span.map(|span| span.start_offset)
    }

    pub fn end_offset(&self) -> Option<usize> {
        self.span.map(|span| span.end_offset)
    }

    /// The number in E.164 form, e.g. "+78005553535".
    pub fn e164(&self) -> Option<String> {
        let calling_code = self.calling_code?;
        let national_number = self.national_number.as_deref()?;
        let mut buf = itoa::Buffer::new();
        Some(fast_cat::concat_str!(
            PLUS_SIGN,
            buf.format(calling_code),
            national_number
        ))
    }

    /// The number as a `tel:` URI, or an empty string when there is no
    /// complete number.
    pub fn to_rfc3966(&self) -> String {
        self.e164()
            .and_then(|number| format_rfc3966(&number, self.extension.as_deref()).ok())
            .unwrap_or_default()
    }
}
