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

use crate::metadata::schema::{NumberTypeDescriptor, Territory};

use super::{
    enums::{LengthKind, LineType, PhoneNumberFormat},
    errors::ParseError,
    helper_constants::{PLUS_SIGN, RFC3966_PREFIX},
};

/// A helper used by the formatter family: prefixes formatted output with
/// the country calling code in the shape the requested format demands.
/// National output never carries a prefix.
pub(super) fn prefix_with_calling_code(
    country_code: u16,
    format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_code_str = buf.format(country_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match format {
        PhoneNumberFormat::E164 => {
            let new_str = fast_cat::concat_str!(PLUS_SIGN, country_code_str, &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::International => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_code_str, " ", &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::RFC3966 => {
            let new_str = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_code_str,
                "-",
                &formatted_number
            );
            *formatted_number = new_str;
        }
        PhoneNumberFormat::National => {}
    }
}

/// Checks a national number's digit count against the general description
/// of the candidate territory. Counts between the minimum and maximum that
/// are not members of the set are left to pattern matching; only the hard
/// bounds reject here.
pub(super) fn test_length_against_plan(
    national_number: &str,
    territory: &Territory,
) -> Result<(), ParseError> {
    let lengths = &territory.general_desc.possible_lengths;
    if lengths.national.is_empty() {
        return Ok(());
    }
    let actual_length = national_number.len() as u16;
    if lengths.local_only.contains(&actual_length) {
        return Ok(());
    }
    if actual_length < lengths.national[0] {
        return Err(ParseError::TooShort);
    }
    if lengths
        .national
        .last()
        .is_some_and(|&maximum| actual_length > maximum)
    {
        return Err(ParseError::TooLong);
    }
    Ok(())
}

/// True when the descriptor's length data admits `actual_length`. A
/// descriptor without declared national lengths inherits them from the
/// general description.
pub(super) fn descriptor_length_admits(
    desc: &NumberTypeDescriptor,
    general_desc: &NumberTypeDescriptor,
    actual_length: u16,
) -> bool {
    let national = if desc.possible_lengths.national.is_empty() {
        &general_desc.possible_lengths.national
    } else {
        &desc.possible_lengths.national
    };
    if national.is_empty() {
        return true;
    }
    national.contains(&actual_length) || desc.possible_lengths.local_only.contains(&actual_length)
}

/// Possible digit counts for a (territory, line type, kind) triple.
/// `FixedLineOrMobile` is answered as the merged fixed-line and mobile
/// sets; a descriptor without declared national lengths inherits the
/// general description's.
pub(super) fn possible_lengths(
    territory: &Territory,
    line_type: LineType,
    kind: LengthKind,
) -> Option<Vec<u16>> {
    if line_type == LineType::FixedLineOrMobile {
        let fixed = possible_lengths(territory, LineType::FixedLine, kind);
        let mobile = possible_lengths(territory, LineType::Mobile, kind);
        if fixed.is_none() && mobile.is_none() {
            return None;
        }
        let mut merged = fixed.unwrap_or_default();
        merged.extend(mobile.unwrap_or_default());
        merged.sort_unstable();
        merged.dedup();
        return Some(merged);
    }

    let desc = territory.descriptor(line_type)?;
    let lengths = match kind {
        LengthKind::National => {
            if desc.possible_lengths.national.is_empty() {
                territory.general_desc.possible_lengths.national.clone()
            } else {
                desc.possible_lengths.national.clone()
            }
        }
        LengthKind::LocalOnly => desc.possible_lengths.local_only.clone(),
    };
    Some(lengths)
}

/// The declared example number for a (territory, line type) pair.
pub(super) fn example_number(territory: &Territory, line_type: LineType) -> Option<&str> {
    territory
        .descriptor(line_type)
        .and_then(|desc| desc.example_number.as_deref())
}
