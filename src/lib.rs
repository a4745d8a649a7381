mod interfaces;
mod phonenumberutil;
mod regex_based_matcher;
mod regexp_cache;
pub mod metadata;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use metadata::{PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc};
pub use phonenumberutil::{
    CountryCodeSource, FormatError, NumberLengthType, ParseError, ParseOptions, ParseResult,
    PhoneNumberUtil, Rfc3966Number, Span, ValidationError, format_rfc3966,
};
pub use regexp_cache::InvalidRegexError;
