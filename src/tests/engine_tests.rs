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

use strum::IntoEnumIterator;

use crate::{
    LengthKind, LineType, MetadataError, ParseError, PhoneEngine, PhoneNumberFormat,
    PhoneNumberRecord,
};

use super::region_code::RegionCode;

const TEST_METADATA: &str = include_str!("../../testdata/metadata_for_testing.json");

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_engine() -> PhoneEngine {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });

    PhoneEngine::from_metadata_bytes(TEST_METADATA.as_bytes())
        .expect("test metadata should decode")
}

#[test]
fn parse_e164_input_resolves_main_territory() {
    let engine = get_engine();
    let record = engine
        .parse("+12125551234", RegionCode::zz(), false)
        .unwrap();

    assert_eq!(record.country_code(), 1);
    assert_eq!(record.region(), Some(RegionCode::us()));
    assert_eq!(record.national_number(), "2125551234");
    assert_eq!(record.national_number_value(), 2125551234);
    assert!(!record.has_leading_zero());
    assert_eq!(record.line_type(), LineType::FixedLineOrMobile);
    assert_eq!(record.raw_input(), "+12125551234");
}

#[test]
fn parse_gb_number_is_fixed_line() {
    let engine = get_engine();
    let record = engine
        .parse("+442079460958", RegionCode::zz(), false)
        .unwrap();

    assert_eq!(record.country_code(), 44);
    assert_eq!(record.region(), Some(RegionCode::gb()));
    assert_eq!(record.line_type(), LineType::FixedLine);
}

#[test]
fn parse_national_input_strips_the_national_prefix() {
    let engine = get_engine();
    let record = engine
        .parse("020 7946 0958", RegionCode::gb(), false)
        .unwrap();

    assert_eq!(record.country_code(), 44);
    assert_eq!(record.region(), Some(RegionCode::gb()));
    assert_eq!(record.national_number(), "2079460958");
    assert!(!record.has_leading_zero());
}

#[test]
fn parse_us_national_input_strips_the_leading_one() {
    let engine = get_engine();
    let record = engine.parse("12125551234", RegionCode::us(), false).unwrap();

    assert_eq!(record.national_number(), "2125551234");
    assert_eq!(record.region(), Some(RegionCode::us()));
}

#[test]
fn format_e164_round_trip() {
    let engine = get_engine();
    let record = engine
        .parse("020 7946 0958", RegionCode::gb(), false)
        .unwrap();

    assert_eq!(
        engine.format(&record, PhoneNumberFormat::E164, true),
        "+442079460958"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::E164, false),
        "2079460958"
    );
}

#[test]
fn format_national_reinstates_the_prefix() {
    let engine = get_engine();
    let record = engine.parse("2079460958", RegionCode::gb(), false).unwrap();

    assert_eq!(
        engine.format(&record, PhoneNumberFormat::National, true),
        "020 7946 0958"
    );
}

#[test]
fn format_international_and_rfc3966() {
    let engine = get_engine();
    let record = engine.parse("2079460958", RegionCode::gb(), false).unwrap();

    assert_eq!(
        engine.format(&record, PhoneNumberFormat::International, true),
        "+44 20 7946 0958"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::International, false),
        "20 7946 0958"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::RFC3966, true),
        "tel:+44-20-7946-0958"
    );
}

#[test]
fn gb_mobile_classification_and_formats() {
    let engine = get_engine();
    let record = engine.parse("07912345678", RegionCode::gb(), false).unwrap();

    assert_eq!(record.line_type(), LineType::Mobile);
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::National, true),
        "07912 345678"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::International, true),
        "+44 7912 345678"
    );
}

#[test]
fn us_display_formats() {
    let engine = get_engine();
    let record = engine
        .parse("(212) 555-1234", RegionCode::us(), false)
        .unwrap();

    assert_eq!(
        engine.format(&record, PhoneNumberFormat::National, true),
        "(212) 555-1234"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::International, true),
        "+1 212-555-1234"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::RFC3966, true),
        "tel:+1-212-555-1234"
    );
}

#[test]
fn too_short_input_is_an_error_not_a_partial_record() {
    let engine = get_engine();
    assert_eq!(
        engine.parse("123", RegionCode::us(), false),
        Err(ParseError::TooShort)
    );
}

#[test]
fn too_long_input_is_rejected() {
    let engine = get_engine();
    // Sixteen national digits trip the global bound.
    assert_eq!(
        engine.parse("+4420794609581111111", RegionCode::zz(), false),
        Err(ParseError::TooLong)
    );
    // Eleven digits are over everything the US plan declares.
    assert_eq!(
        engine.parse("21255512345", RegionCode::us(), false),
        Err(ParseError::TooLong)
    );
}

#[test]
fn inputs_without_digits_are_not_numbers() {
    let engine = get_engine();
    for input in ["", "+", "hello", "--..(x)"] {
        assert_eq!(
            engine.parse(input, RegionCode::us(), false),
            Err(ParseError::NotANumber),
            "input: {input:?}"
        );
    }
}

#[test]
fn unknown_calling_code_is_rejected() {
    let engine = get_engine();
    assert_eq!(
        engine.parse("+999123456", RegionCode::zz(), false),
        Err(ParseError::InvalidCountryCode)
    );
}

#[test]
fn national_input_needs_a_known_region_hint() {
    let engine = get_engine();
    assert_eq!(
        engine.parse("2125551234", RegionCode::zz(), false),
        Err(ParseError::InvalidRegion)
    );
}

#[test]
fn international_dialing_prefix_is_unwrapped() {
    let engine = get_engine();

    let from_us = engine
        .parse("011 44 2079460958", RegionCode::us(), false)
        .unwrap();
    assert_eq!(from_us.country_code(), 44);
    assert_eq!(from_us.region(), Some(RegionCode::gb()));

    let from_gb = engine
        .parse("00 44 2079460958", RegionCode::gb(), false)
        .unwrap();
    assert_eq!(from_gb.country_code(), 44);
    assert_eq!(from_gb.national_number(), "2079460958");
}

#[test]
fn italian_leading_zero_is_preserved() {
    let engine = get_engine();
    let record = engine.parse("0612345678", RegionCode::it(), false).unwrap();

    assert_eq!(record.country_code(), 39);
    assert!(record.has_leading_zero());
    assert_eq!(record.national_number(), "0612345678");
    assert_eq!(record.national_number_value(), 612345678);
    assert_eq!(record.line_type(), LineType::FixedLine);

    assert_eq!(
        engine.format(&record, PhoneNumberFormat::E164, true),
        "+390612345678"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::National, true),
        "06 1234 5678"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::International, true),
        "+39 06 1234 5678"
    );
}

#[test]
fn argentinian_transform_rule_rewrites_mobile_numbers() {
    let engine = get_engine();
    let record = engine
        .parse("0343 15 555 1212", RegionCode::ar(), false)
        .unwrap();

    assert_eq!(record.national_number(), "93435551212");
    assert_eq!(record.line_type(), LineType::Mobile);
    assert!(!record.has_leading_zero());
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::National, true),
        "9 343 5551212"
    );
}

#[test]
fn ignore_type_skips_classification_and_regional_lengths() {
    let engine = get_engine();

    let record = engine.parse("+12125551234", RegionCode::zz(), true).unwrap();
    assert_eq!(record.line_type(), LineType::Unknown);
    assert_eq!(record.region(), Some(RegionCode::us()));

    // Too short for the GB plan, but only the global bounds apply here.
    let record = engine.parse("123", RegionCode::gb(), true).unwrap();
    assert_eq!(record.national_number(), "123");
    assert_eq!(record.line_type(), LineType::Unknown);
}

#[test]
fn shared_calling_code_resolves_by_leading_digits() {
    let engine = get_engine();
    let record = engine
        .parse("+12423456789", RegionCode::zz(), false)
        .unwrap();

    assert_eq!(record.region(), Some(RegionCode::bs()));
    assert_eq!(record.line_type(), LineType::FixedLine);
    // Display rules for calling code 1 live on the main territory.
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::National, true),
        "(242) 345-6789"
    );
}

#[test]
fn unclaimed_shared_code_number_keeps_region_unresolved() {
    let engine = get_engine();
    let record = engine
        .parse("+11115551234", RegionCode::zz(), false)
        .unwrap();

    assert_eq!(record.country_code(), 1);
    assert_eq!(record.region(), None);
    assert_eq!(record.line_type(), LineType::Unknown);
}

#[test]
fn fullwidth_input_normalizes() {
    let engine = get_engine();
    let record = engine
        .parse("\u{FF0B}\u{FF14}\u{FF14}2079460958", RegionCode::zz(), false)
        .unwrap();

    assert_eq!(record.country_code(), 44);
    assert_eq!(record.national_number(), "2079460958");
}

#[test]
fn parse_many_isolates_failures() {
    let engine = get_engine();
    let inputs = ["+12125551234", "bogus", "+442079460958"];

    let records = engine.parse_many(inputs, RegionCode::zz(), false, false);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].region(), Some(RegionCode::us()));
    assert_eq!(records[1].region(), Some(RegionCode::gb()));

    let with_failures = engine.parse_many(inputs, RegionCode::zz(), false, true);
    assert_eq!(with_failures.len(), 3);
    assert!(with_failures[1].is_placeholder());
    assert_eq!(with_failures[1].raw_input(), "bogus");
    assert_eq!(with_failures[1].line_type(), LineType::Unknown);
    assert!(!with_failures[0].is_placeholder());
}

#[test]
fn declared_example_numbers_parse_and_classify() {
    let engine = get_engine();
    for region in engine.supported_regions() {
        let territory = engine.territory_for_region(region).unwrap();
        for line_type in LineType::iter() {
            if matches!(line_type, LineType::FixedLineOrMobile | LineType::Unknown) {
                continue;
            }
            let Some(example) = engine.example_number_for_type(region, line_type) else {
                continue;
            };

            let record = engine.parse(example, region, false).unwrap_or_else(|err| {
                panic!("example {example} for {region} should parse: {err}")
            });
            assert_eq!(record.country_code(), territory.country_code);

            let classified = record.line_type();
            let acceptable = classified == line_type
                || (classified == LineType::FixedLineOrMobile
                    && matches!(line_type, LineType::FixedLine | LineType::Mobile));
            assert!(
                acceptable,
                "example {example} for {region} classified as {classified:?}, \
                 declared {line_type:?}"
            );
        }
    }
}

#[test]
fn classified_lengths_are_members_of_the_declared_sets() {
    let engine = get_engine();
    for region in engine.supported_regions() {
        for line_type in LineType::iter() {
            if matches!(line_type, LineType::FixedLineOrMobile | LineType::Unknown) {
                continue;
            }
            let Some(example) = engine.example_number_for_type(region, line_type) else {
                continue;
            };
            let record = engine.parse(example, region, false).unwrap();
            if record.line_type() == LineType::Unknown {
                continue;
            }

            let lookup_region = record.region().unwrap_or(region);
            let mut lengths = engine
                .possible_lengths_for_type(lookup_region, record.line_type(), LengthKind::National)
                .unwrap_or_default();
            lengths.extend(
                engine
                    .possible_lengths_for_type(
                        lookup_region,
                        record.line_type(),
                        LengthKind::LocalOnly,
                    )
                    .unwrap_or_default(),
            );
            let actual = record.national_number().len() as u16;
            assert!(
                lengths.contains(&actual),
                "length {actual} of {example} not in the {lookup_region} \
                 {:?} set {lengths:?}",
                record.line_type()
            );
        }
    }
}

#[test]
fn lookup_surface() {
    let engine = get_engine();

    assert_eq!(engine.leading_digits_for_region(RegionCode::bs()), Some("242"));
    assert_eq!(engine.leading_digits_for_region(RegionCode::us()), None);
    assert_eq!(engine.leading_digits_for_region(RegionCode::zz()), None);

    assert_eq!(
        engine.national_prefix_transform_rule_for_region(RegionCode::ar()),
        Some("9$1")
    );
    assert_eq!(
        engine.national_prefix_transform_rule_for_region(RegionCode::gb()),
        None
    );

    assert_eq!(
        engine.possible_lengths_for_type(RegionCode::us(), LineType::FixedLine, LengthKind::LocalOnly),
        Some(vec![7])
    );
    assert_eq!(
        engine.possible_lengths_for_type(
            RegionCode::de(),
            LineType::FixedLineOrMobile,
            LengthKind::National
        ),
        Some(vec![6, 7, 8, 9, 10, 11])
    );

    assert_eq!(
        engine.example_number_for_type(RegionCode::gb(), LineType::Pager),
        Some("7612345678")
    );
    assert_eq!(
        engine.example_number_for_type(RegionCode::bs(), LineType::Pager),
        None
    );

    let shared: Vec<&str> = engine
        .territories_for_calling_code(1)
        .map(|territory| territory.id.as_str())
        .collect();
    assert_eq!(shared, vec![RegionCode::us(), RegionCode::bs()]);
    assert_eq!(
        engine.main_territory_for_calling_code(1).unwrap().id,
        RegionCode::us()
    );

    let mut calling_codes: Vec<u16> = engine.supported_calling_codes().collect();
    calling_codes.sort_unstable();
    assert_eq!(calling_codes, vec![1, 39, 44, 49, 54]);
    assert_eq!(engine.supported_regions().count(), 6);

    // Region lookups are case-insensitive.
    assert!(engine.territory_for_region("gb").is_some());
}

#[test]
fn metadata_construction_failures_are_fatal() {
    assert!(matches!(
        PhoneEngine::from_metadata_bytes(b""),
        Err(MetadataError::NotFound)
    ));
    assert!(matches!(
        PhoneEngine::from_metadata_bytes(b"{ not json"),
        Err(MetadataError::Malformed(_))
    ));

    let duplicate = r#"[
        {"id": "US", "countryCode": 1, "generalDesc": {}},
        {"id": "us", "countryCode": 1, "generalDesc": {}}
    ]"#;
    assert!(matches!(
        PhoneEngine::from_metadata_bytes(duplicate.as_bytes()),
        Err(MetadataError::Malformed(_))
    ));

    let zero_code = r#"[{"id": "US", "countryCode": 0, "generalDesc": {}}]"#;
    assert!(matches!(
        PhoneEngine::from_metadata_bytes(zero_code.as_bytes()),
        Err(MetadataError::Malformed(_))
    ));
}

#[test]
fn formatting_without_territory_data_degrades_to_digits() {
    let engine = get_engine();
    let record = PhoneNumberRecord {
        country_code: 882,
        national_number: "12345678".to_string(),
        national_number_value: 12345678,
        leading_zero: false,
        region: None,
        line_type: LineType::Unknown,
        raw_input: "+88212345678".to_string(),
    };

    assert_eq!(
        engine.format(&record, PhoneNumberFormat::International, true),
        "12345678"
    );
    // E164 is pure concatenation and works without any territory data.
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::E164, true),
        "+88212345678"
    );
}

#[test]
fn uncovered_number_falls_back_to_raw_digits() {
    let engine = get_engine();
    // Parses under the DE general description but matches no specific type
    // and no format rule.
    let record = engine.parse("987654321", RegionCode::de(), false).unwrap();
    assert_eq!(record.line_type(), LineType::Unknown);

    assert_eq!(
        engine.format(&record, PhoneNumberFormat::National, true),
        "987654321"
    );
    assert_eq!(
        engine.format(&record, PhoneNumberFormat::International, true),
        "+49 987654321"
    );
}

#[test]
fn pattern_cache_is_warm_after_the_first_parse() {
    let engine = get_engine();

    engine.parse("+442079460958", RegionCode::zz(), false).unwrap();
    let warm = engine.pattern_cache().len();
    assert!(warm > 0);

    engine.parse("+442079460958", RegionCode::zz(), false).unwrap();
    assert_eq!(engine.pattern_cache().len(), warm);
}
