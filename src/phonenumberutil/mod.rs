mod helper_constants;
mod helper_functions;
mod helper_types;
mod national_prefix;
mod phone_number_regexps_and_mappings;
mod rfc3966;
pub mod enums;
pub mod errors;
pub mod parse_options;
pub mod parse_result;
pub mod phonenumberutil;

pub use enums::{CountryCodeSource, NumberLengthType};
pub use errors::{FormatError, ParseError, ValidationError};
pub use parse_options::ParseOptions;
pub use parse_result::{ParseResult, Span};
pub use phonenumberutil::PhoneNumberUtil;
pub use rfc3966::{Rfc3966Number, format_rfc3966};
