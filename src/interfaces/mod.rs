use crate::{metadata::PhoneNumberDesc, regexp_cache::InvalidRegexError};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the national number pattern defined in the given
    /// PhoneNumberDesc message as a whole.
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> Result<bool, InvalidRegexError>;

    /// Returns whether the start of `number` matches a region's
    /// leading-digits pattern.
    fn match_leading_digits(
        &self,
        number: &str,
        leading_digits_pattern: &str,
    ) -> Result<bool, InvalidRegexError>;
}
