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

use regex::Regex;

use crate::regexp_cache::PatternCache;

use super::helper_constants::VALID_PUNCTUATION;

/// Fixed patterns plus the per-engine pattern cache shared by parsing and
/// formatting. Owned by the engine instance, never process-global, so
/// independent engines cannot cross-contaminate cached patterns.
pub(super) struct EngineRegexps {
    pub pattern_cache: PatternCache,

    /// Groups of punctuation characters between digit blocks; collapsed to
    /// "-" when rendering RFC3966 output.
    pub separator_pattern: Regex,

    /// The first capture-group reference inside a display template. Written
    /// as `\$\d` rather than a literal `$1` because some plans do not use
    /// the first group at the start of the template.
    pub first_group_pattern: Regex,
}

impl EngineRegexps {
    pub fn new() -> Self {
        // Constant patterns, known to be valid.
        Self {
            pattern_cache: PatternCache::with_capacity(128),
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).unwrap(),
            first_group_pattern: Regex::new(r"(\$\d)").unwrap(),
        }
    }
}
