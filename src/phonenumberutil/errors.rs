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

use std::str::Utf8Error;

use strum::IntoStaticStr;
use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Misuse of the parsing API. Text that merely is not a phone number is
/// never an error, it yields an empty `ParseResult` instead.
#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("A phone number for parsing must be a string: {0}")]
    InvalidInputType(#[from] Utf8Error),
    #[error("Metadata is required")]
    MetadataRequired,
    #[error("Unknown country: {0}")]
    UnknownCountry(String),
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(#[from] InvalidRegexError),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("\"format_rfc3966()\" expects number \"{0}\" to be in E.164 format")]
    NotE164Format(String),
}

/// Why a parsed text did not end up as a possible number. Reported only
/// when extended diagnostics are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    #[error("\
    The number is longer than the shortest valid numbers for this region, \
    shorter than the longest valid numbers for this region, and does not \
    itself have a number length that matches valid numbers for this region\
    ")]
    InvalidLength,
    /// No country calling code could be matched, or no country was given
    /// for a number in national form.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The text does not contain anything shaped like a phone number.
    #[error("The text is not a phone number")]
    NotANumber,
}

impl ValidationError {
    /// Stable upper-case name, e.g. `TOO_SHORT`.
    pub fn code(self) -> &'static str {
        self.into()
    }
}
