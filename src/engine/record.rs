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

use super::enums::LineType;

/// A parsed, validated phone number. Immutable: created per parse call and
/// owned solely by the caller.
///
/// The national number is kept both as the canonical digit string and as an
/// integer. The integer alone would silently lose significant leading
/// zeros (Italian-style plans), so `leading_zero` records that a zero must
/// be reinstated wherever the number is rebuilt from its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberRecord {
    pub(crate) country_code: u16,
    pub(crate) national_number: String,
    pub(crate) national_number_value: u64,
    pub(crate) leading_zero: bool,
    pub(crate) region: Option<String>,
    pub(crate) line_type: LineType,
    pub(crate) raw_input: String,
}

impl PhoneNumberRecord {
    /// The country calling code, always positive for parsed records.
    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    /// The national number as its canonical digit string, leading zeros
    /// included.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// The national number as an integer value.
    pub fn national_number_value(&self) -> u64 {
        self.national_number_value
    }

    /// True when a significant leading zero is part of the national number.
    pub fn has_leading_zero(&self) -> bool {
        self.leading_zero
    }

    /// The resolved region code. `None` when the calling code is shared and
    /// no territory could be disambiguated.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The determined line type; `Unknown` when no descriptor matched or
    /// classification was skipped.
    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    /// The original input text, kept for diagnostics only.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Stand-in emitted by batch parsing for entries that failed, when the
    /// caller asked for failures to be kept. Only the raw input carries
    /// information.
    pub(crate) fn placeholder(raw_input: String) -> Self {
        Self {
            country_code: 0,
            national_number: String::new(),
            national_number_value: 0,
            leading_zero: false,
            region: None,
            line_type: LineType::Unknown,
            raw_input,
        }
    }

    /// True for batch placeholders; parsed records always carry a positive
    /// calling code.
    pub fn is_placeholder(&self) -> bool {
        self.country_code == 0
    }
}
