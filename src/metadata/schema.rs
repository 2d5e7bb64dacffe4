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

use serde::Deserialize;

use crate::engine::enums::LineType;

/// Valid national-number digit counts for one line type, split into the
/// full national set and the counts that are only diallable locally
/// (e.g. US seven-digit numbers without an area code). Kept as native
/// integer sequences from load time onward.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PossibleLengths {
    pub national: Vec<u16>,
    pub local_only: Vec<u16>,
}

/// Description of one line type within a territory: the pattern its
/// national numbers match, the digit counts they may have and, where the
/// plan declares one, a known-good example number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberTypeDescriptor {
    pub national_number_pattern: Option<String>,
    pub possible_lengths: PossibleLengths,
    pub example_number: Option<String>,
}

/// One display rule of a territory. Rules are tried in declared order; a
/// rule applies when its leading-digit gate (empty list means always) and
/// its full pattern both admit the national number. The templates
/// reference capture groups of `pattern`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatRule {
    pub leading_digits: Vec<String>,
    pub pattern: String,
    pub format: String,
    pub intl_format: Option<String>,
    pub national_prefix_formatting_rule: Option<String>,
}

/// The complete numbering plan of one region.
///
/// `national_prefix` is a pattern over the leading digits of national-format
/// input; when `national_prefix_transform_rule` is present its capture
/// groups feed the transform template instead of plain stripping.
/// Formatting-rule text may use the raw `$NP`/`$FG` placeholders or the
/// already-expanded `0$1` form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Territory {
    pub id: String,
    pub country_code: u16,
    pub main_country_for_code: bool,
    pub international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_transform_rule: Option<String>,
    pub general_desc: NumberTypeDescriptor,
    pub fixed_line: Option<NumberTypeDescriptor>,
    pub mobile: Option<NumberTypeDescriptor>,
    pub toll_free: Option<NumberTypeDescriptor>,
    pub premium_rate: Option<NumberTypeDescriptor>,
    pub shared_cost: Option<NumberTypeDescriptor>,
    pub personal_number: Option<NumberTypeDescriptor>,
    pub voip: Option<NumberTypeDescriptor>,
    pub pager: Option<NumberTypeDescriptor>,
    pub uan: Option<NumberTypeDescriptor>,
    pub voicemail: Option<NumberTypeDescriptor>,
    pub number_formats: Vec<FormatRule>,
    pub leading_digits: Option<String>,
}

impl Territory {
    /// Total mapping from line type to this territory's descriptor for it.
    ///
    /// `FixedLineOrMobile` answers with the fixed-line record (the union
    /// semantics live in the length helpers, the type is never stored);
    /// `Unknown` maps to the general description.
    pub fn descriptor(&self, line_type: LineType) -> Option<&NumberTypeDescriptor> {
        match line_type {
            LineType::FixedLine | LineType::FixedLineOrMobile => self.fixed_line.as_ref(),
            LineType::Mobile => self.mobile.as_ref(),
            LineType::TollFree => self.toll_free.as_ref(),
            LineType::PremiumRate => self.premium_rate.as_ref(),
            LineType::SharedCost => self.shared_cost.as_ref(),
            LineType::PersonalNumber => self.personal_number.as_ref(),
            LineType::VoIP => self.voip.as_ref(),
            LineType::Pager => self.pager.as_ref(),
            LineType::UAN => self.uan.as_ref(),
            LineType::VoiceMail => self.voicemail.as_ref(),
            LineType::Unknown => Some(&self.general_desc),
        }
    }
}
