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

// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Texts longer than this are not scanned for numbers at all.
pub const MAX_INPUT_STRING_LENGTH: usize = 250;
/// Extensions with more digits than this are not treated as extensions.
pub const DEFAULT_MAX_EXTENSION_LENGTH: usize = 9;

pub const PLUS_CHARS: &str = "+\u{FF0B}";
// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. Full-width variants are also present.
// Unlike libphonenumber the letter 'x' is not here: it only ever starts an
// extension.
pub const VALID_PUNCTUATION: &str = "\\-\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

/// Punctuation that may open a number, e.g. the area code in "(800) 555".
pub const OPENING_BRACKETS: [char; 4] = ['(', '[', '\u{FF08}', '\u{FF3B}'];

pub const PLUS_SIGN: &str = "+";
pub const RFC3966_EXTN_PREFIX: &str = ";ext=";
pub const RFC3966_PREFIX: &str = "tel:";
pub const RFC3966_NUMBER_KEY: &str = "tel";
pub const RFC3966_EXTN_KEY: &str = "ext";
pub const RFC3966_PHONE_CONTEXT_KEY: &str = "phone-context";
pub const RFC3966_PARAMETER_SEPARATOR: char = ';';

pub const DIGITS: &str = r"\p{Nd}";

// Separators allowed between the number and an extension label.
pub const POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL: &str = "[ \u{00A0}\\t,]*";
// Optional full stop (.) or colon, followed by zero or more
// spaces/tabs.
pub const POSSIBLE_CHARS_AFTER_EXT_LABEL: &str = "[:\\.\u{FF0E}]?[ \u{00A0}\\t]*";

