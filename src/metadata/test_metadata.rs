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

//! Small hand-written table covering the regions the tests need. Patterns
//! are trimmed down versions of the real ones.

use super::{PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc};

pub(crate) fn test_metadata() -> PhoneMetadataCollection {
    PhoneMetadataCollection::new(vec![
        PhoneMetadata::new(
            "US",
            1,
            PhoneNumberDesc::new(
                "(?:201|202|212|213|310|415|646|650|718|800|917)[2-9]\\d{6}",
                [10],
            )
            .with_local_only_lengths([7]),
        )
        .with_national_prefix("1")
        .main_country(),
        PhoneMetadata::new("BB", 1, PhoneNumberDesc::new("246\\d{7}", [10]))
            .with_national_prefix("1")
            .with_leading_digits("246"),
        PhoneMetadata::new(
            "CA",
            1,
            PhoneNumberDesc::new("(?:204|226|403|416|514|604|613|647|905)[2-9]\\d{6}", [10])
                .with_local_only_lengths([7]),
        )
        .with_national_prefix("1"),
        PhoneMetadata::new("RU", 7, PhoneNumberDesc::new("[347-9]\\d{9}", [10]))
            .with_national_prefix("8")
            .main_country(),
        PhoneMetadata::new("KZ", 7, PhoneNumberDesc::new("33\\d{8}|7\\d{9}", [10]))
            .with_national_prefix("8")
            .with_leading_digits("33|7"),
        PhoneMetadata::new("FR", 33, PhoneNumberDesc::new("[1-9]\\d{8}", [9]))
            .with_national_prefix("0")
            .main_country(),
        PhoneMetadata::new("CH", 41, PhoneNumberDesc::new("[2-9]\\d{8}", [9]))
            .with_national_prefix("0")
            .main_country(),
        PhoneMetadata::new("GB", 44, PhoneNumberDesc::new("[1-9]\\d{9}", [10]).with_local_only_lengths([6]))
            .with_national_prefix("0")
            .main_country(),
        PhoneMetadata::new(
            "JE",
            44,
            PhoneNumberDesc::new("1534\\d{6}|7(?:509|700|797|829|937)\\d{6}", [10]),
        )
        .with_national_prefix("0")
        .with_leading_digits("1534|7(?:509|7(?:00|97)|829|937)"),
        PhoneMetadata::new("MX", 52, PhoneNumberDesc::new("[2-9]\\d{9}|1\\d{10}", [10, 11]))
            .with_national_prefix("01")
            .with_national_prefix_for_parsing("0[12]|04[45](\\d{10})", Some("1$1"))
            .main_country(),
        PhoneMetadata::new(
            "BR",
            55,
            PhoneNumberDesc::new("[1-9][1-9](?:[2-5]\\d{7}|9\\d{8})", [10, 11]),
        )
        .with_national_prefix("0")
        .main_country(),
        PhoneMetadata::new(
            "CN",
            86,
            PhoneNumberDesc::new("(?:10|2\\d)\\d{8,9}|1[3-9]\\d{9}|[3-9]\\d{9}", [10, 11]),
        )
        .with_national_prefix("0")
        .main_country(),
        PhoneMetadata::new("MA", 212, PhoneNumberDesc::new("[5-8]\\d{8}", [9]))
            .with_national_prefix("0")
            .main_country(),
        PhoneMetadata::new("AC", 247, PhoneNumberDesc::new("6[2-467]\\d{3}|4\\d{4}", [5, 6]))
            .main_country(),
        PhoneMetadata::new("KG", 996, PhoneNumberDesc::new("[3-9]\\d{8}", [9]))
            .with_national_prefix("0")
            .main_country(),
    ])
}
