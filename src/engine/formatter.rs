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

use std::borrow::Cow;

use log::trace;

use crate::{
    metadata::schema::{FormatRule, Territory},
    regex_util::RegexMatchExt,
};

use super::{
    engine::PhoneEngine,
    enums::PhoneNumberFormat,
    helper_functions::prefix_with_calling_code,
    record::PhoneNumberRecord,
};

impl PhoneEngine {
    /// Renders a parsed record in the requested format. Never fails:
    /// missing territory data yields the bare digit string, an uncovered
    /// number falls back to its raw national digits.
    ///
    /// `with_prefix` controls the caller-facing calling-code prefix of the
    /// prefixed formats (`+1` / `+44 ` / `tel:+44-`); national output never
    /// carries one.
    pub fn format(
        &self,
        record: &PhoneNumberRecord,
        format: PhoneNumberFormat,
        with_prefix: bool,
    ) -> String {
        let national_number = record.national_number();

        if format == PhoneNumberFormat::E164 {
            // Plain digit-string concatenation, leading zeros intact; no
            // format rule matching is involved at all.
            let mut formatted = national_number.to_string();
            if with_prefix {
                prefix_with_calling_code(record.country_code(), format, &mut formatted);
            }
            return formatted;
        }

        let Some(territory) = self.formatting_territory(record) else {
            return national_number.to_string();
        };

        let mut formatted = self.format_national_part(territory, national_number, format);
        if format == PhoneNumberFormat::RFC3966 {
            formatted = self.hyphenate_for_rfc3966(&formatted);
        }
        if with_prefix {
            prefix_with_calling_code(record.country_code(), format, &mut formatted);
        }
        formatted
    }

    /// Display rules for regions sharing a calling code live on the main
    /// territory, so fall back there when the resolved region carries none.
    fn formatting_territory(&self, record: &PhoneNumberRecord) -> Option<&Territory> {
        record
            .region()
            .and_then(|region| self.store.region(region))
            .filter(|territory| !territory.number_formats.is_empty())
            .or_else(|| {
                self.store
                    .main_territory_for_calling_code(record.country_code())
            })
    }

    fn format_national_part(
        &self,
        territory: &Territory,
        national_number: &str,
        format: PhoneNumberFormat,
    ) -> String {
        let Some(rule) = self.choose_format_rule(territory, national_number) else {
            trace!(
                "no format rule of {} covers '{national_number}'",
                territory.id
            );
            return national_number.to_string();
        };

        let template = if format == PhoneNumberFormat::National {
            rule.format.as_str()
        } else {
            rule.intl_format.as_deref().unwrap_or(rule.format.as_str())
        };
        let template = if format == PhoneNumberFormat::National {
            self.splice_national_prefix(territory, rule, template)
        } else {
            Cow::Borrowed(template)
        };

        let Some(pattern) = self.metadata_pattern(&rule.pattern) else {
            return national_number.to_string();
        };
        pattern
            .replace_all(national_number, template.as_ref())
            .into_owned()
    }

    /// The first rule (declared order) whose leading-digit gate and full
    /// pattern both admit the number. An empty leading-digit list means
    /// always eligible; otherwise any one of its patterns matching the
    /// start of the number opens the gate.
    fn choose_format_rule<'a>(
        &self,
        territory: &'a Territory,
        national_number: &str,
    ) -> Option<&'a FormatRule> {
        territory.number_formats.iter().find(|rule| {
            let leading_ok = rule.leading_digits.is_empty()
                || rule.leading_digits.iter().any(|pattern| {
                    self.metadata_pattern(pattern)
                        .is_some_and(|regex| regex.matches_start(national_number))
                });
            leading_ok
                && self
                    .metadata_pattern(&rule.pattern)
                    .is_some_and(|regex| regex.full_match(national_number))
        })
    }

    /// Replaces the first group reference of the display template with the
    /// national-prefix formatting rule, e.g. "$1 $2" spliced with "0$1"
    /// becomes "0$1 $2".
    fn splice_national_prefix<'a>(
        &self,
        territory: &Territory,
        rule: &FormatRule,
        template: &'a str,
    ) -> Cow<'a, str> {
        match self.expanded_prefix_rule(territory, rule) {
            Some(prefix_rule) => self
                .regexps
                .first_group_pattern
                .replace(template, prefix_rule.as_str()),
            None => Cow::Borrowed(template),
        }
    }

    /// The `$NP`/`$FG` placeholders come straight from plan sources; an
    /// already-expanded rule like "0$1" passes through untouched. A rule
    /// demanding `$NP` is dropped when the territory declares no national
    /// prefix to expand it with.
    fn expanded_prefix_rule(&self, territory: &Territory, rule: &FormatRule) -> Option<String> {
        let raw = rule
            .national_prefix_formatting_rule
            .as_deref()
            .or(territory.national_prefix_formatting_rule.as_deref())
            .filter(|raw| !raw.is_empty())?;
        if !raw.contains("$NP") {
            return Some(raw.to_string());
        }
        let prefix = territory
            .national_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())?;
        Some(raw.replace("$NP", prefix).replace("$FG", "$1"))
    }

    /// RFC3966 keeps the international grouping but demands "-" between
    /// groups and no leading punctuation.
    fn hyphenate_for_rfc3966(&self, formatted: &str) -> String {
        let trimmed = match self.regexps.separator_pattern.find_start(formatted) {
            Some(matched) => &formatted[matched.end()..],
            None => formatted,
        };
        self.regexps
            .separator_pattern
            .replace_all(trimmed, "-")
            .into_owned()
    }
}
