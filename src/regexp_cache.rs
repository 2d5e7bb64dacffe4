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

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("an error occurred while trying to compile pattern: {0}")]
pub struct InvalidPatternError(#[from] regex::Error);

/// Lazy cache of compiled regular expressions keyed by pattern text.
///
/// The same pattern text recurs across many territories and format rules
/// (generic mobile patterns, shared leading-digit filters), so every
/// distinct text is compiled at most once per engine instance and shared
/// from then on. Concurrent first requests for one pattern converge on a
/// single live entry; a racing duplicate compilation may happen but its
/// result is discarded, never stored twice.
pub struct PatternCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the compiled form of `pattern`, compiling it on first
    /// request and reusing the stored entry afterwards.
    pub fn compiled(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidPatternError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
        Ok(entry.value().clone())
    }

    /// Number of distinct pattern texts compiled so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
