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

use thiserror::Error;

/// Fatal construction failures. An engine whose metadata payload is absent
/// or does not validate is never handed out, so these cannot occur on a
/// per-call basis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("no numbering plan metadata was supplied")]
    NotFound,
    #[error("malformed numbering plan metadata: {0}")]
    Malformed(String),
}

/// Per-call parse rejections. All of these are recoverable; the caller
/// decides whether and how to retry. A failed parse never yields a partial
/// record and never touches shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// No digits survived normalization, or there was nothing a calling
    /// code could be derived from.
    #[error("the string supplied did not seem to be a phone number")]
    NotANumber,
    /// Fewer digits than any valid number globally or in the candidate
    /// region.
    #[error("the string supplied is too short to be a phone number")]
    TooShort,
    /// More digits than any valid number globally or in the candidate
    /// region.
    #[error("the string supplied is too long to be a phone number")]
    TooLong,
    /// The extracted country calling code is not part of the numbering
    /// plan.
    #[error("invalid country calling code")]
    InvalidCountryCode,
    /// The input had no international form and the supplied default region
    /// is unknown.
    #[error("missing or unknown default region")]
    InvalidRegion,
}
