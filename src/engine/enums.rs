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

use strum::EnumIter;

/// Defines the standardized formats for representing phone numbers.
///
/// `International` and `National` align with the ITU-T E.123
/// recommendation. For example, the Google Switzerland office number would
/// be:
/// - **International**: `+41 44 668 1800`
/// - **National**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated, "tel:" prefix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// Standardized international format with no spaces or symbols, a `+`
    /// followed by country code and national number.
    E164,
    /// Country code plus nationally formatted number, spaced for display.
    International,
    /// The format used when dialing within the number's own country,
    /// including the national prefix where the plan prescribes one.
    National,
    /// The "tel:" URI form with hyphen separators, for web links.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used where fixed-line and mobile numbers are indistinguishable by
    /// looking at the number itself (e.g. NANP regions). Never stored in
    /// metadata; derived as the union of the fixed-line and mobile data.
    FixedLineOrMobile,
    /// Free for the caller, paid by the recipient ("800" numbers).
    TollFree,
    /// Numbers charging a higher rate than normal calls.
    PremiumRate,
    /// Call cost split between caller and recipient.
    SharedCost,
    /// A number tied to a person rather than a location or device.
    PersonalNumber,
    /// Voice-over-IP service numbers.
    VoIP,
    /// Numbers for paging devices.
    Pager,
    /// Universal Access Numbers, routed by the receiving company.
    UAN,
    /// Direct voicemail access numbers.
    VoiceMail,
    /// The number matches no known pattern for its region, or
    /// classification was skipped.
    Unknown,
}

/// Which half of a possible-length set a lookup asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthKind {
    /// Digit counts of complete national numbers.
    National,
    /// Digit counts only diallable within a local area.
    LocalOnly,
}
