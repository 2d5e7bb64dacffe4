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

use log::{debug, trace};

use crate::{
    metadata::schema::{NumberTypeDescriptor, Territory},
    regex_util::RegexMatchExt,
};

use super::{
    engine::PhoneEngine,
    enums::LineType,
    errors::ParseError,
    helper_constants::{
        MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PLUS_CHARS,
    },
    helper_functions,
    record::PhoneNumberRecord,
};

/// Digits remaining after normalization, plus whether the input carried an
/// explicit international plus sign.
struct NormalizedNumber {
    digits: String,
    has_plus: bool,
}

/// The calling code plus the national digits that remain once it (and a
/// possible international dialing prefix) has been consumed.
struct ExtractedNumber {
    calling_code: u16,
    national_number: String,
    /// True when the calling code was taken from the region hint rather
    /// than read out of the input itself.
    from_hint: bool,
}

/// Maps every Unicode decimal digit to its ASCII value, then keeps only
/// ASCII digits and at most one leading plus sign.
fn normalize(raw: &str) -> Result<NormalizedNumber, ParseError> {
    let mapped = dec_from_char::normalize_decimals(raw);
    let mapped: &str = mapped.as_ref();

    let mut digits = String::with_capacity(mapped.len());
    let mut has_plus = false;
    for symbol in mapped.chars() {
        if symbol.is_ascii_digit() {
            digits.push(symbol);
        } else if digits.is_empty() && !has_plus && PLUS_CHARS.contains(symbol) {
            has_plus = true;
        }
        // Everything else carries no dialling information.
    }
    if digits.is_empty() {
        debug!("no digits left after normalizing '{raw}'");
        return Err(ParseError::NotANumber);
    }
    Ok(NormalizedNumber { digits, has_plus })
}

impl PhoneEngine {
    /// Parses `raw` into a validated [`PhoneNumberRecord`].
    ///
    /// `region_hint` names the numbering plan to assume for input without
    /// an international form; it is ignored when the input starts with a
    /// plus sign. With `ignore_type` set, line-type classification and the
    /// per-region length tests are skipped and the record carries
    /// [`LineType::Unknown`]; the global digit-count bounds still apply.
    pub fn parse(
        &self,
        raw: &str,
        region_hint: &str,
        ignore_type: bool,
    ) -> Result<PhoneNumberRecord, ParseError> {
        let normalized = normalize(raw)?;
        let extracted = self.extract_calling_code(&normalized, region_hint)?;
        let ExtractedNumber {
            calling_code,
            mut national_number,
            from_hint,
        } = extracted;

        if from_hint {
            // The hint territory exists, extract_calling_code checked it.
            if let Some(territory) = self.store.region(region_hint) {
                self.maybe_strip_national_prefix(territory, &mut national_number);
            }
        }

        if national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShort);
        }
        if national_number.len() > MAX_LENGTH_FOR_NSN {
            return Err(ParseError::TooLong);
        }

        let (resolved, candidate) = self.disambiguate_region(calling_code, &national_number)?;

        let line_type = if ignore_type {
            LineType::Unknown
        } else {
            helper_functions::test_length_against_plan(&national_number, candidate)?;
            self.classify_line_type(candidate, &national_number)
        };

        let leading_zero = national_number.len() > 1 && national_number.starts_with('0');
        // Capped at MAX_LENGTH_FOR_NSN ASCII digits, so this always fits.
        let national_number_value = national_number.parse::<u64>().unwrap_or(0);

        Ok(PhoneNumberRecord {
            country_code: calling_code,
            national_number,
            national_number_value,
            leading_zero,
            region: resolved.map(|territory| territory.id.clone()),
            line_type,
            raw_input: raw.to_string(),
        })
    }

    /// Parses every entry independently against the same read-only store
    /// and cache. Failed entries are omitted unless `include_failures` asks
    /// for placeholder records instead; one malformed entry never aborts
    /// the batch.
    pub fn parse_many<'a, I>(
        &self,
        inputs: I,
        region_hint: &str,
        ignore_type: bool,
        include_failures: bool,
    ) -> Vec<PhoneNumberRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs
            .into_iter()
            .filter_map(|raw| match self.parse(raw, region_hint, ignore_type) {
                Ok(record) => Some(record),
                Err(err) => {
                    debug!("skipping '{raw}' in batch parse: {err}");
                    include_failures.then(|| PhoneNumberRecord::placeholder(raw.to_string()))
                }
            })
            .collect()
    }

    fn extract_calling_code(
        &self,
        number: &NormalizedNumber,
        region_hint: &str,
    ) -> Result<ExtractedNumber, ParseError> {
        if number.has_plus {
            let (calling_code, rest) = self
                .match_calling_code(&number.digits)
                .ok_or(ParseError::InvalidCountryCode)?;
            return Ok(ExtractedNumber {
                calling_code,
                national_number: rest.to_string(),
                from_hint: false,
            });
        }

        let Some(territory) = self.store.region(region_hint) else {
            debug!("no usable default region '{region_hint}' for a number without a plus sign");
            return Err(ParseError::InvalidRegion);
        };

        if let Some(rest) = self.strip_international_prefix(territory, &number.digits) {
            let (calling_code, rest) = self
                .match_calling_code(rest)
                .ok_or(ParseError::InvalidCountryCode)?;
            return Ok(ExtractedNumber {
                calling_code,
                national_number: rest.to_string(),
                from_hint: false,
            });
        }

        Ok(ExtractedNumber {
            calling_code: territory.country_code,
            national_number: number.digits.clone(),
            from_hint: true,
        })
    }

    /// The longest known calling code (one to three digits) at the start of
    /// `digits`, with whatever follows it.
    fn match_calling_code<'a>(&self, digits: &'a str) -> Option<(u16, &'a str)> {
        let upper = MAX_LENGTH_COUNTRY_CODE.min(digits.len());
        for length in (1..=upper).rev() {
            // All-ASCII digits here, at most three of them.
            let Ok(candidate) = digits[..length].parse::<u16>() else {
                continue;
            };
            if self.store.has_calling_code(candidate) {
                return Some((candidate, &digits[length..]));
            }
        }
        None
    }

    /// Strips the territory's international dialing prefix when it covers a
    /// proper prefix of the digits, leaving something for the calling code.
    fn strip_international_prefix<'a>(
        &self,
        territory: &Territory,
        digits: &'a str,
    ) -> Option<&'a str> {
        let pattern = territory.international_prefix.as_deref()?;
        let regex = self.metadata_pattern(pattern)?;
        let matched = regex.find_start(digits)?;
        let rest = &digits[matched.end()..];
        if rest.is_empty() {
            return None;
        }
        trace!(
            "stripped international prefix '{}' of {}",
            &digits[..matched.end()],
            territory.id
        );
        Some(rest)
    }

    /// Strips or transforms the national prefix in place. The rewrite is
    /// kept only when the remainder is non-empty and did not stop matching
    /// a general pattern that matched before.
    fn maybe_strip_national_prefix(&self, territory: &Territory, national_number: &mut String) {
        let Some(prefix_pattern) = territory
            .national_prefix
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
        else {
            return;
        };
        let Some(regex) = self.metadata_pattern(prefix_pattern) else {
            return;
        };
        let Some(captures) = regex.captures_start(national_number) else {
            return;
        };
        let matched_end = captures.get(0).map_or(0, |matched| matched.end());
        if matched_end == 0 {
            return;
        }

        let transform_rule = territory
            .national_prefix_transform_rule
            .as_deref()
            .filter(|rule| !rule.is_empty());
        let candidate = match transform_rule {
            Some(rule) if captures.get(1).is_some() => {
                let mut rewritten = String::new();
                captures.expand(rule, &mut rewritten);
                rewritten.push_str(&national_number[matched_end..]);
                rewritten
            }
            _ => national_number[matched_end..].to_string(),
        };
        if candidate.is_empty() {
            return;
        }

        if let Some(general_pattern) = territory.general_desc.national_number_pattern.as_deref() {
            if let Some(general_regex) = self.metadata_pattern(general_pattern) {
                if general_regex.full_match(national_number)
                    && !general_regex.full_match(&candidate)
                {
                    trace!(
                        "keeping national prefix of '{national_number}': \
                         stripping it would break the number"
                    );
                    return;
                }
            }
        }

        trace!("national prefix handling rewrote '{national_number}' to '{candidate}'");
        *national_number = candidate;
    }

    /// Picks the territory a national number belongs to among all
    /// territories sharing `calling_code`, in metadata-declared order.
    /// When none matches, the main territory still drives validation and
    /// formatting but the region stays unresolved.
    fn disambiguate_region<'a>(
        &'a self,
        calling_code: u16,
        national_number: &str,
    ) -> Result<(Option<&'a Territory>, &'a Territory), ParseError> {
        let territories: Vec<&Territory> = self
            .store
            .territories_for_calling_code(calling_code)
            .collect();
        let Some(&first) = territories.first() else {
            return Err(ParseError::InvalidCountryCode);
        };
        if territories.len() == 1 {
            return Ok((Some(first), first));
        }

        for &territory in &territories {
            if let Some(pattern) = territory.leading_digits.as_deref() {
                if self
                    .metadata_pattern(pattern)
                    .is_some_and(|regex| regex.matches_start(national_number))
                {
                    trace!(
                        "number '{national_number}' matched the {} leading-digits filter",
                        territory.id
                    );
                    return Ok((Some(territory), territory));
                }
            } else if let Some(pattern) = territory.general_desc.national_number_pattern.as_deref()
            {
                if self
                    .metadata_pattern(pattern)
                    .is_some_and(|regex| regex.full_match(national_number))
                {
                    return Ok((Some(territory), territory));
                }
            }
        }

        trace!(
            "no territory sharing calling code {calling_code} claims '{national_number}', \
             leaving the region unresolved"
        );
        let main = self
            .store
            .main_territory_for_calling_code(calling_code)
            .unwrap_or(first);
        Ok((None, main))
    }

    /// Evaluates line-type descriptors in the plan-declared priority order
    /// and returns the first match. A number matching both the fixed-line
    /// and mobile data is reported as the derived union type.
    fn classify_line_type(&self, territory: &Territory, national_number: &str) -> LineType {
        if !self.matches_descriptor(territory, Some(&territory.general_desc), national_number) {
            trace!(
                "number '{national_number}' type unknown - doesn't match the general pattern of {}",
                territory.id
            );
            return LineType::Unknown;
        }

        let matches_fixed =
            self.matches_descriptor(territory, territory.fixed_line.as_ref(), national_number);
        let matches_mobile =
            self.matches_descriptor(territory, territory.mobile.as_ref(), national_number);
        if matches_fixed {
            if matches_mobile {
                trace!("number '{national_number}' is fixed-line or mobile");
                return LineType::FixedLineOrMobile;
            }
            trace!("number '{national_number}' is a fixed line number");
            return LineType::FixedLine;
        }
        if matches_mobile {
            trace!("number '{national_number}' is a mobile number");
            return LineType::Mobile;
        }

        const REMAINING_TYPES: [LineType; 8] = [
            LineType::TollFree,
            LineType::PremiumRate,
            LineType::SharedCost,
            LineType::PersonalNumber,
            LineType::VoIP,
            LineType::Pager,
            LineType::UAN,
            LineType::VoiceMail,
        ];
        for line_type in REMAINING_TYPES {
            if self.matches_descriptor(territory, territory.descriptor(line_type), national_number)
            {
                trace!("number '{national_number}' classified as {line_type:?}");
                return line_type;
            }
        }

        trace!("number '{national_number}' matches no specific type pattern");
        LineType::Unknown
    }

    /// Length gate first, full pattern match second. A missing descriptor
    /// or an empty pattern never matches.
    fn matches_descriptor(
        &self,
        territory: &Territory,
        desc: Option<&NumberTypeDescriptor>,
        national_number: &str,
    ) -> bool {
        let Some(desc) = desc else {
            return false;
        };
        if !helper_functions::descriptor_length_admits(
            desc,
            &territory.general_desc,
            national_number.len() as u16,
        ) {
            return false;
        }
        let Some(pattern) = desc
            .national_number_pattern
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
        else {
            return false;
        };
        self.metadata_pattern(pattern)
            .is_some_and(|regex| regex.full_match(national_number))
    }
}
