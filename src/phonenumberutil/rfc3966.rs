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


//! `tel:` URIs (RFC 3966).

use super::{
    errors::FormatError,
    helper_constants::{
        PLUS_SIGN, RFC3966_EXTN_KEY, RFC3966_EXTN_PREFIX, RFC3966_NUMBER_KEY,
        RFC3966_PARAMETER_SEPARATOR, RFC3966_PHONE_CONTEXT_KEY, RFC3966_PREFIX,
    },
    parse_result::Span,
};

/// A number read from a `tel:` URI. The span always covers the whole URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rfc3966Number {
    pub number: String,
    pub extension: Option<String>,
    pub span: Span,
}

/// Splits a URI into its number and extension. Parameters other than the
/// number, the extension and a global (`+`) phone context are ignored.
pub(super) fn split_uri(text: &str) -> Option<(String, Option<String>)> {
    let mut number: Option<&str> = None;
    let mut extension: Option<&str> = None;
    let mut context: Option<&str> = None;

    for part in text.split(RFC3966_PARAMETER_SEPARATOR) {
        let Some((key, value)) = part.split_once(|c| c == ':' || c == '=') else {
            continue;
        };
        match key {
            RFC3966_NUMBER_KEY => number = Some(value),
            RFC3966_EXTN_KEY => extension = Some(value),
            // Domain contexts are not supported.
            RFC3966_PHONE_CONTEXT_KEY if value.starts_with(PLUS_SIGN) => context = Some(value),
            _ => {}
        }
    }

    let number = number?;
    let number = match context {
        Some(context) => fast_cat::concat_str!(context, number),
        None => number.to_owned(),
    };
    let extension = extension.filter(|ext| !ext.is_empty()).map(str::to_owned);
    Some((number, extension))
}

/// Composes a `tel:` URI from a number in E.164 form and an optional
/// extension.
///
/// An empty number gives an empty string.
pub fn format_rfc3966(number: &str, extension: Option<&str>) -> Result<String, FormatError> {
    if number.is_empty() {
        return Ok(String::new());
    }
    if !number.starts_with(PLUS_SIGN) {
        return Err(FormatError::NotE164Format(number.to_owned()));
    }
    Ok(match extension.filter(|ext| !ext.is_empty()) {
        Some(extension) => {
            fast_cat::concat_str!(RFC3966_PREFIX, number, RFC3966_EXTN_PREFIX, extension)
        }
        None => fast_cat::concat_str!(RFC3966_PREFIX, number),
    })
}
