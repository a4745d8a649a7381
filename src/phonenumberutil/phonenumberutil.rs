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


use std::{
    cmp::min,
    collections::{HashMap, HashSet, VecDeque},
};

use log::{trace, warn};

use super::{
    enums::{CountryCodeSource, NumberLengthType},
    errors::{FormatError, ParseError, ValidationError},
    helper_constants::{
        MAX_INPUT_STRING_LENGTH, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        OPENING_BRACKETS, PLUS_SIGN, RFC3966_PREFIX,
    },
    helper_functions::{merge_possible_lengths, normalize_digits, test_number_length},
    helper_types::{CandidateMatch, ExtractedNumber, PhoneNumberWithCountryCodeSource},
    national_prefix::NationalPrefixRule,
    parse_options::ParseOptions,
    parse_result::{ParseResult, Span},
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    rfc3966::{self, Rfc3966Number},
};
use crate::{
    interfaces::MatcherApi,
    metadata::{PhoneMetadata, PhoneMetadataCollection},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexFullMatch,
    regexp_cache::InvalidRegexError,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

pub struct PhoneNumberUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. Regions under
    /// NANPA share the country calling code 1 and Russia and Kazakhstan share
    /// the country calling code 7. The main country for a code is listed
    /// first. This is implemented as a sorted vector to achieve better
    /// performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,
}

impl PhoneNumberUtil {
    pub fn new_for_metadata(metadata_collection: PhoneMetadataCollection) -> Self {
        let mut instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            country_calling_code_to_region_code_map: Default::default(),
            region_to_metadata_map: Default::default(),
        };
        if metadata_collection.is_empty() {
            warn!("No metadata provided, every parse will fail");
        }
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        for metadata in metadata_collection.metadata {
            let region_code = metadata.id().to_owned();
            let country_calling_code = metadata.country_code();
            let main_country_for_code = metadata.main_country_for_code();

            instance
                .region_to_metadata_map
                .insert(region_code.clone(), metadata);

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if main_country_for_code {
                regions.push_front(region_code);
            } else {
                regions.push_back(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(k, v)| (k, Vec::from(v))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(a, _)| *a);
        instance
    }

    /// Returns all region codes of the metadata, sorted.
    pub fn get_supported_regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self
            .region_to_metadata_map
            .keys()
            .map(String::as_str)
            .collect();
        regions.sort_unstable();
        regions
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
            .collect()
    }

    /// Returns the region codes that match the specific country calling code,
    /// main country first. In the case of no region code being found, the
    /// list is empty.
    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<&str> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_country_code_for_region(&self, region_code: &str) -> Option<i32> {
        let metadata = self.region_to_metadata_map.get(region_code);
        if metadata.is_none() {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
        }
        metadata.map(PhoneMetadata::country_code)
    }

    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all: digits separated by valid punctuation, with an optional
    /// leading plus sign, and between 2 and 20 digits in total.
    pub fn is_viable_phone_number(&self, phone_number: &str) -> bool {
        self.reg_exps
            .valid_phone_number_pattern
            .full_match(phone_number)
    }

    /// Parses the number found in `text` without any country information, so
    /// only numbers in international form are recognized.
    pub fn parse(&self, text: &str) -> Result<ParseResult> {
        self.parse_with_options(text, &ParseOptions::default())
    }

    /// Parses the number found in `text`, assuming `region_code` for numbers
    /// in national form.
    pub fn parse_for_region(&self, text: &str, region_code: &str) -> Result<ParseResult> {
        self.parse_with_options(text, &ParseOptions::from(region_code))
    }

    /// Parses raw bytes, which must be UTF-8 text.
    pub fn parse_bytes(&self, bytes: &[u8], options: &ParseOptions) -> Result<ParseResult> {
        let text = std::str::from_utf8(bytes)?;
        self.parse_with_options(text, options)
    }

    /// Finds a phone number in `text` and resolves its country.
    ///
    /// Unless `options.extended` is set, anything but a valid number gives an
    /// empty result. Errors are reserved for caller mistakes: empty
    /// metadata, unknown region codes in `options` and invalid metadata
    /// patterns.
    pub fn parse_with_options(&self, text: &str, options: &ParseOptions) -> Result<ParseResult> {
        if self.region_to_metadata_map.is_empty() {
            return Err(ParseError::MetadataRequired);
        }
        let required_country = self.checked_region_code(options.required_country.as_deref())?;
        let default_country = self.checked_region_code(options.default_country.as_deref())?;

        let result = self.parse_helper(text, options, required_country, default_country)?;
        if options.extended || result.is_valid() {
            Ok(result)
        } else {
            trace!("No valid phone number in '{}'", text);
            Ok(ParseResult::default())
        }
    }

    /// Reads a `tel:` URI. Returns `None` when the URI carries no viable
    /// number.
    pub fn parse_rfc3966(&self, text: &str) -> Option<Rfc3966Number> {
        let (number, extension) = rfc3966::split_uri(text)?;
        if !self.is_viable_phone_number(&number) {
            trace!("Number '{}' of URI '{}' is not viable", number, text);
            return None;
        }
        Some(Rfc3966Number {
            number,
            extension,
            span: Span::new(0, text.chars().count()),
        })
    }

    /// Composes a `tel:` URI from a number in E.164 form and an optional
    /// extension.
    pub fn format_rfc3966(
        number: &str,
        extension: Option<&str>,
    ) -> std::result::Result<String, FormatError> {
        rfc3966::format_rfc3966(number, extension)
    }

    /// Region codes given by the caller must be known. The returned code is
    /// borrowed from the metadata.
    fn checked_region_code(&self, region_code: Option<&str>) -> Result<Option<&str>> {
        let Some(region_code) = region_code else {
            return Ok(None);
        };
        match self.region_to_metadata_map.get_key_value(region_code) {
            Some((known, _)) => Ok(Some(known.as_str())),
            None => {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                Err(ParseError::UnknownCountry(region_code.to_owned()))
            }
        }
    }

    fn parse_helper(
        &self,
        text: &str,
        options: &ParseOptions,
        required_country: Option<&str>,
        default_country: Option<&str>,
    ) -> Result<ParseResult> {
        let Some(extracted) = self.extract_number(text, options.max_extension_length) else {
            trace!("Nothing shaped like a phone number in '{}'", text);
            return Ok(ParseResult::rejected(ValidationError::NotANumber));
        };
        if !self.is_viable_phone_number(&extracted.number) {
            trace!("Number '{}' is not viable", extracted.number);
            return Ok(ParseResult::rejected(ValidationError::NotANumber));
        }

        let has_plus = extracted.number.starts_with(PLUS_SIGN);
        let digits: String = extracted
            .number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let phone_number =
            match self.extract_country_code(&digits, has_plus, required_country, default_country) {
                Ok(phone_number) => phone_number,
                Err(err) => {
                    trace!("No country calling code for '{}': {}", extracted.number, err);
                    return Ok(ParseResult::rejected(err));
                }
            };
        let PhoneNumberWithCountryCodeSource {
            national_number,
            country_calling_code,
            country_code_source,
            region_code,
        } = phone_number;

        if national_number.is_empty() {
            trace!("Only a calling code ({}) in '{}'", country_calling_code, text);
            return Ok(ParseResult {
                calling_code: Some(country_calling_code),
                country_code_source: Some(country_code_source),
                failure: Some(ValidationError::TooShort),
                ..Default::default()
            });
        }

        let (national_number, region_code) = match region_code {
            // Numbers in national form may start with a national prefix.
            Some(region_code) => {
                let metadata = &self.region_to_metadata_map[region_code];
                (
                    self.maybe_strip_national_prefix(national_number, metadata)?,
                    Some(region_code),
                )
            }
            None => {
                let region_code = self
                    .get_region_code_for_national_number(country_calling_code, &national_number)?;
                (national_number, region_code)
            }
        };

        let failure = self
            .test_possible_length(&national_number, country_calling_code, region_code)
            .err();
        let possible = failure.is_none();
        let valid = match region_code {
            Some(region_code) if possible => self.matcher_api.match_national_number(
                &national_number,
                &self.region_to_metadata_map[region_code].general_desc,
            )?,
            _ => false,
        };
        trace!(
            "Parsed '{}' as +{} {} (region {:?}, possible: {}, valid: {})",
            text, country_calling_code, national_number, region_code, possible, valid
        );

        Ok(ParseResult {
            country: region_code.map(str::to_owned),
            calling_code: Some(country_calling_code),
            national_number: Some(national_number),
            extension: extracted.extension,
            valid: Some(valid),
            possible: Some(possible),
            span: Some(extracted.span),
            country_code_source: Some(country_code_source),
            failure,
        })
    }

    /// Isolates the number and its extension, either from a whole `tel:` URI
    /// or from the best candidate in free text.
    fn extract_number(&self, text: &str, max_extension_length: usize) -> Option<ExtractedNumber> {
        if text.starts_with(RFC3966_PREFIX) {
            let uri = self.parse_rfc3966(text)?;
            // Same rules as for extensions found in free text.
            let extension = uri
                .extension
                .as_deref()
                .map(normalize_digits)
                .filter(|extension| {
                    let valid = extension.chars().all(|c| c.is_ascii_digit())
                        && extension.chars().count() <= max_extension_length;
                    if !valid {
                        trace!("Dropped extension '{}' of URI '{}'", extension, text);
                    }
                    valid
                });
            return Some(ExtractedNumber {
                number: normalize_digits(&uri.number),
                extension,
                span: uri.span,
            });
        }
        let candidate = self.find_candidate(text, max_extension_length)?;
        let normalized = normalize_digits(&candidate.raw_text);
        let (number, extension) = self.maybe_strip_extension(normalized, max_extension_length);
        Some(ExtractedNumber {
            number,
            extension,
            span: candidate.span,
        })
    }

    /// Picks the viable run with the most digits, the earliest one on ties,
    /// and extends it over a directly following extension.
    fn find_candidate(&self, text: &str, max_extension_length: usize) -> Option<CandidateMatch> {
        let original: Vec<char> = text.chars().collect();
        if original.len() > MAX_INPUT_STRING_LENGTH {
            trace!("Input of {} characters is too long to scan", original.len());
            return None;
        }
        // The same number of chars as the original, so indexes are shared.
        let chars: Vec<char> = normalize_digits(text).chars().collect();

        let mut best: Option<(Span, usize)> = None;
        let mut start = 0;
        while start < chars.len() {
            let Some((end, digit_count, stop)) = self.scan_run(&chars, start) else {
                start += 1;
                continue;
            };
            let run: String = chars[start..end].iter().collect();
            let is_better = best
                .as_ref()
                .is_none_or(|(_, best_count)| digit_count > *best_count);
            if is_better && self.is_viable_phone_number(&run) {
                best = Some((Span::new(start, end), digit_count));
            }
            start = stop.max(start + 1);
        }

        let (mut span, _) = best?;
        let rest: String = chars[span.end_offset..].iter().collect();
        if let Some(captures) = self.reg_exps.extn_suffix_pattern.captures(&rest) {
            let extension_len = captures.get(1).map_or(0, |ext| ext.as_str().chars().count());
            if extension_len <= max_extension_length {
                span.end_offset += captures
                    .get(0)
                    .map_or(0, |whole| rest[..whole.end()].chars().count());
            } else {
                trace!("Extension of {} digits is too long", extension_len);
            }
        }

        Some(CandidateMatch {
            raw_text: original[span.start_offset..span.end_offset].iter().collect(),
            span,
        })
    }

    /// Scans the run starting at `start`. Returns the end of the run after
    /// its last digit, the number of digits and the index where scanning
    /// stopped, or `None` if no run can start there.
    fn scan_run(&self, chars: &[char], start: usize) -> Option<(usize, usize, usize)> {
        let first = chars[start];
        if !(first.is_ascii_digit() || first == '+' || OPENING_BRACKETS.contains(&first)) {
            return None;
        }
        let mut digit_count = 0;
        let mut end = start;
        let mut index = start;
        while let Some(&c) = chars.get(index) {
            if c.is_ascii_digit() {
                digit_count += 1;
                end = index + 1;
            } else if !(index == start && c == '+')
                && !self.reg_exps.valid_punctuation_pattern.full_match_char(c)
            {
                break;
            }
            index += 1;
        }
        if digit_count == 0 {
            return None;
        }
        Some((end, digit_count, index))
    }

    /// Splits a trailing extension off the number. The extension is kept only
    /// if what precedes it is still a viable number and its digits fit in
    /// `max_extension_length`.
    fn maybe_strip_extension(
        &self,
        number: String,
        max_extension_length: usize,
    ) -> (String, Option<String>) {
        let Some(captures) = self.reg_exps.extn_pattern.captures(&number) else {
            return (number, None);
        };
        let (Some(whole), Some(extension)) = (captures.get(0), captures.get(1)) else {
            return (number, None);
        };
        let head = &number[..whole.start()];
        if extension.as_str().chars().count() > max_extension_length
            || !self.is_viable_phone_number(head)
        {
            return (number, None);
        }
        trace!("Stripped extension '{}' from '{}'", extension.as_str(), number);
        (head.to_owned(), Some(extension.as_str().to_owned()))
    }

    /// Finds the calling code of `digits`: the longest code present in
    /// metadata for numbers with a plus sign, otherwise the one of the
    /// required or default region.
    fn extract_country_code<'a>(
        &self,
        digits: &str,
        has_plus: bool,
        required_country: Option<&'a str>,
        default_country: Option<&'a str>,
    ) -> std::result::Result<PhoneNumberWithCountryCodeSource<'a>, ValidationError> {
        if !has_plus {
            let (region_code, country_code_source) = match (required_country, default_country) {
                (Some(region_code), _) => (region_code, CountryCodeSource::FromRequiredCountry),
                (None, Some(region_code)) => (region_code, CountryCodeSource::FromDefaultCountry),
                (None, None) => return Err(ValidationError::InvalidCountryCode),
            };
            return Ok(PhoneNumberWithCountryCodeSource {
                national_number: digits.to_owned(),
                country_calling_code: self.region_to_metadata_map[region_code].country_code(),
                country_code_source,
                region_code: Some(region_code),
            });
        }

        // Country codes do not begin with a '0'.
        if digits.starts_with('0') {
            return Err(ValidationError::InvalidCountryCode);
        }
        for length in (1..=min(MAX_LENGTH_COUNTRY_CODE, digits.len())).rev() {
            let Ok(country_calling_code) = digits[..length].parse::<i32>() else {
                continue;
            };
            if self
                .country_calling_code_to_region_code_map
                .binary_search_by_key(&country_calling_code, |(code, _)| *code)
                .is_ok()
            {
                return Ok(PhoneNumberWithCountryCodeSource {
                    national_number: digits[length..].to_owned(),
                    country_calling_code,
                    country_code_source: CountryCodeSource::FromNumberWithPlusSign,
                    region_code: None,
                });
            }
        }
        Err(ValidationError::InvalidCountryCode)
    }

    /// Strips or rewrites the national prefix of a number in national form.
    /// The original digits are kept when the result would be too short, of
    /// an invalid length, or would stop matching the national number
    /// pattern the original digits matched.
    fn maybe_strip_national_prefix(
        &self,
        national_number: String,
        metadata: &PhoneMetadata,
    ) -> std::result::Result<String, InvalidRegexError> {
        let Some(rule) = NationalPrefixRule::for_metadata(
            metadata,
            &self.reg_exps.regexp_cache,
            &self.reg_exps.transform_rule_group_pattern,
        )?
        else {
            return Ok(national_number);
        };
        let Some(stripped) = rule.apply(&national_number) else {
            return Ok(national_number);
        };

        let general_desc = &metadata.general_desc;
        if matches!(
            test_number_length(&stripped, general_desc),
            Err(ValidationError::TooShort | ValidationError::InvalidLength)
        ) {
            trace!(
                "Kept national prefix of '{}', '{}' has an impossible length",
                national_number, stripped
            );
            return Ok(national_number);
        }
        if self
            .matcher_api
            .match_national_number(&national_number, general_desc)?
            && !self.matcher_api.match_national_number(&stripped, general_desc)?
        {
            trace!(
                "Kept national prefix of '{}', '{}' doesn't match the national pattern",
                national_number, stripped
            );
            return Ok(national_number);
        }
        trace!("National number '{}' became '{}'", national_number, stripped);
        Ok(stripped)
    }

    /// Resolves the region of an international number among the regions
    /// sharing its calling code. Returns `None` when no single region can
    /// be told apart.
    fn get_region_code_for_national_number(
        &self,
        country_calling_code: i32,
        national_number: &str,
    ) -> std::result::Result<Option<&str>, InvalidRegexError> {
        let region_codes = self.get_region_codes_for_country_calling_code(country_calling_code);
        if let [region_code] = region_codes.as_slice() {
            return Ok(Some(*region_code));
        }

        let mut by_leading_digits = Vec::new();
        for region_code in &region_codes {
            // Metadata cannot be missing because the region codes come from
            // the country calling code map.
            let metadata = &self.region_to_metadata_map[*region_code];
            if metadata.has_leading_digits()
                && self
                    .matcher_api
                    .match_leading_digits(national_number, metadata.leading_digits())?
            {
                by_leading_digits.push(*region_code);
            }
        }
        match by_leading_digits.as_slice() {
            [region_code] => return Ok(Some(*region_code)),
            [] => {}
            ambiguous => {
                trace!("'{}' has the leading digits of {:?}", national_number, ambiguous);
                return Ok(None);
            }
        }

        let mut by_pattern = Vec::new();
        for region_code in &region_codes {
            let metadata = &self.region_to_metadata_map[*region_code];
            if !metadata.has_leading_digits()
                && self
                    .matcher_api
                    .match_national_number(national_number, &metadata.general_desc)?
            {
                by_pattern.push(*region_code);
            }
        }
        match by_pattern.as_slice() {
            [region_code] => Ok(Some(*region_code)),
            candidates => {
                trace!(
                    "Can't tell the region of '{}' for +{}, matching: {:?}",
                    national_number, country_calling_code, candidates
                );
                Ok(None)
            }
        }
    }

    /// Checks the length of a national number against its region, or against
    /// all regions of the calling code when the region is unknown.
    fn test_possible_length(
        &self,
        national_number: &str,
        country_calling_code: i32,
        region_code: Option<&str>,
    ) -> std::result::Result<NumberLengthType, ValidationError> {
        if national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ValidationError::TooShort);
        }
        if national_number.len() > MAX_LENGTH_FOR_NSN {
            return Err(ValidationError::TooLong);
        }
        match region_code {
            Some(region_code) => test_number_length(
                national_number,
                &self.region_to_metadata_map[region_code].general_desc,
            ),
            None => {
                let region_codes =
                    self.get_region_codes_for_country_calling_code(country_calling_code);
                let merged = merge_possible_lengths(
                    region_codes
                        .iter()
                        .map(|region_code| &self.region_to_metadata_map[*region_code].general_desc),
                );
                test_number_length(national_number, &merged)
            }
        }
    }
}
