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

use crate::metadata::PhoneNumberDesc;

use super::{
    enums::NumberLengthType,
    errors::ValidationError,
    helper_constants::{
        DIGITS, POSSIBLE_CHARS_AFTER_EXT_LABEL, POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
    },
};

/// Replaces decimal digits of every script with ASCII digits and the
/// full-width plus with '+'.
///
/// Exactly one character is produced per input character, so character
/// offsets into the result address the same characters of the input.
pub(super) fn normalize_digits(text: &str) -> String {
    dec_from_char::normalize_decimals(text)
        .chars()
        .map(|c| if c == '\u{FF0B}' { '+' } else { c })
        .collect()
}

/// Helper initialiser method to create the regular-expression pattern to match
/// extensions. The only capturing group is around the extension digits.
///
/// Recognized labels are "ext", "ext." and the single characters "x" and
/// "#" (with their full-width forms), e.g. "ext. 123", "x123", "#123".
/// The length of the digits is checked by the caller, so that a too long
/// extension rejects the label instead of being cut.
pub(super) fn create_extn_pattern() -> String {
    let explicit_ext_labels = "ext\\.?";
    // One-character symbols that can be used to indicate an extension.
    let ambiguous_ext_labels = "[x\u{FF58}#\u{FF03}]";

    fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        "(?:",
        explicit_ext_labels,
        "|",
        ambiguous_ext_labels,
        ")",
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        "([",
        DIGITS,
        "]+)"
    )
}

/// Merges the possible lengths of several regions, used when the calling
/// code is known but the region is not.
pub(super) fn merge_possible_lengths<'a>(
    descs: impl IntoIterator<Item = &'a PhoneNumberDesc>,
) -> PhoneNumberDesc {
    let mut merged = PhoneNumberDesc::default();
    for desc in descs {
        merged.possible_length.extend_from_slice(&desc.possible_length);
        merged
            .possible_length_local_only
            .extend_from_slice(&desc.possible_length_local_only);
    }
    merged.possible_length.sort_unstable();
    merged.possible_length.dedup();
    merged.possible_length_local_only.sort_unstable();
    merged.possible_length_local_only.dedup();
    // A length can't be both general and local-only.
    let general = merged.possible_length.clone();
    merged
        .possible_length_local_only
        .retain(|length| !general.contains(length));
    merged
}

/// Helper method to check a number against possible lengths, and determine
/// whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    desc: &PhoneNumberDesc,
) -> Result<NumberLengthType, ValidationError> {
    let possible_lengths = &desc.possible_length;
    let local_lengths = &desc.possible_length_local_only;

    // A region without any length data has no possible numbers at all.
    // Lengths are a set, in no particular order.
    let (Some(&minimum_length), Some(&maximum_length)) =
        (possible_lengths.iter().min(), possible_lengths.iter().max())
    else {
        return Err(ValidationError::InvalidLength);
    };

    let actual_length = phone_number.len() as i32;
    // This is safe because there is never an overlap between the possible
    // lengths and the local-only lengths.
    if local_lengths.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    if minimum_length > actual_length {
        return Err(ValidationError::TooShort);
    } else if maximum_length < actual_length {
        return Err(ValidationError::TooLong);
    }
    if possible_lengths.contains(&actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(ValidationError::InvalidLength)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{create_extn_pattern, merge_possible_lengths, normalize_digits, test_number_length};
    use crate::{
        metadata::PhoneNumberDesc,
        phonenumberutil::{enums::NumberLengthType, errors::ValidationError},
    };

    #[test]
    fn normalizes_digits_one_to_one() {
        let input = "+\u{0661}\u{0662}\u{0661}\u{0662}";
        let normalized = normalize_digits(input);
        assert_eq!(normalized, "+1212");
        assert_eq!(normalized.chars().count(), input.chars().count());

        assert_eq!(normalize_digits("\u{FF0B}7 (800)"), "+7 (800)");
        assert_eq!(normalize_digits("call me"), "call me");
    }

    #[test]
    fn extension_pattern_captures_digits() {
        let pattern = Regex::new(&format!("(?i)(?:{})$", create_extn_pattern())).unwrap();
        for (input, extension) in [
            ("2134567890 ext 123", "123"),
            ("2134567890 EXT. 12345", "12345"),
            ("2134567890 x1234", "1234"),
            ("2134567890#1234", "1234"),
            ("2134567890 ext: 77", "77"),
        ] {
            let captures = pattern.captures(input).unwrap();
            assert_eq!(&captures[1], extension, "input: {input}");
        }
        assert!(pattern.captures("2134567890 extra 12").is_none());
    }

    #[test]
    fn number_length_tiers() {
        let desc = PhoneNumberDesc::new("\\d+", [9, 11]).with_local_only_lengths([7]);
        assert_eq!(test_number_length("123456789", &desc), Ok(NumberLengthType::IsPossible));
        assert_eq!(test_number_length("12345678901", &desc), Ok(NumberLengthType::IsPossible));
        assert_eq!(
            test_number_length("1234567", &desc),
            Ok(NumberLengthType::IsPossibleLocalOnly)
        );
        assert_eq!(test_number_length("12345678", &desc), Err(ValidationError::InvalidLength));
        assert_eq!(test_number_length("123", &desc), Err(ValidationError::TooShort));
        assert_eq!(test_number_length("123456789012", &desc), Err(ValidationError::TooLong));
        assert_eq!(
            test_number_length("123", &PhoneNumberDesc::default()),
            Err(ValidationError::InvalidLength)
        );
    }

    #[test]
    fn number_length_ignores_length_order() {
        let desc = PhoneNumberDesc {
            national_number_pattern: Some("\\d{10,11}".to_owned()),
            possible_length: vec![11, 10],
            possible_length_local_only: vec![8, 7],
        };
        assert_eq!(test_number_length("1234567890", &desc), Ok(NumberLengthType::IsPossible));
        assert_eq!(test_number_length("12345678901", &desc), Ok(NumberLengthType::IsPossible));
        assert_eq!(
            test_number_length("1234567", &desc),
            Ok(NumberLengthType::IsPossibleLocalOnly)
        );
        assert_eq!(test_number_length("123456789", &desc), Err(ValidationError::TooShort));
        assert_eq!(test_number_length("123456789012", &desc), Err(ValidationError::TooLong));
    }

    #[test]
    fn merged_lengths_are_sorted_and_disjoint() {
        let first = PhoneNumberDesc::new("", [10]).with_local_only_lengths([7]);
        let second = PhoneNumberDesc::new("", [7, 9]);
        let merged = merge_possible_lengths([&first, &second]);
        assert_eq!(merged.possible_length, vec![7, 9, 10]);
        assert!(merged.possible_length_local_only.is_empty());
    }
}
