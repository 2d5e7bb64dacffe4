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

use log::{error, warn};

use crate::{
    metadata::{schema::Territory, MetadataStore},
    regexp_cache::PatternCache,
};

use super::{
    enums::{LengthKind, LineType},
    errors::MetadataError,
    helper_functions,
    regexps::EngineRegexps,
};

/// The engine: one immutable [`MetadataStore`] plus one pattern cache,
/// with parsing and formatting as stateless method families on top.
///
/// Construction decodes the metadata payload exactly once; after that no
/// call performs any I/O and every call is independently reentrant.
pub struct PhoneEngine {
    pub(super) store: MetadataStore,
    pub(super) regexps: EngineRegexps,
}

impl PhoneEngine {
    /// Builds an engine from a serialized numbering-plan payload. A decode
    /// or validation failure is fatal here, never a per-call error.
    pub fn from_metadata_bytes(payload: &[u8]) -> Result<Self, MetadataError> {
        Ok(Self::with_store(MetadataStore::from_bytes(payload)?))
    }

    /// Builds an engine from already-decoded territory records.
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self, MetadataError> {
        Ok(Self::with_store(MetadataStore::from_territories(
            territories,
        )?))
    }

    fn with_store(store: MetadataStore) -> Self {
        Self {
            store,
            regexps: EngineRegexps::new(),
        }
    }

    /// The pattern cache backing this engine instance.
    pub fn pattern_cache(&self) -> &PatternCache {
        &self.regexps.pattern_cache
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.store.region_codes()
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.store.calling_codes()
    }

    /// Every territory sharing `calling_code`, in metadata-declared order.
    pub fn territories_for_calling_code(
        &self,
        calling_code: u16,
    ) -> impl Iterator<Item = &Territory> + '_ {
        self.store.territories_for_calling_code(calling_code)
    }

    pub fn main_territory_for_calling_code(&self, calling_code: u16) -> Option<&Territory> {
        self.store.main_territory_for_calling_code(calling_code)
    }

    pub fn territory_for_region(&self, region_code: &str) -> Option<&Territory> {
        self.store.region(region_code)
    }

    /// The quick-filter leading-digits pattern declared for a region, if
    /// any.
    pub fn leading_digits_for_region(&self, region_code: &str) -> Option<&str> {
        let Some(territory) = self.store.region(region_code) else {
            warn!("invalid or unknown region code provided: {region_code}");
            return None;
        };
        territory.leading_digits.as_deref()
    }

    pub fn national_prefix_transform_rule_for_region(&self, region_code: &str) -> Option<&str> {
        let Some(territory) = self.store.region(region_code) else {
            warn!("invalid or unknown region code provided: {region_code}");
            return None;
        };
        territory.national_prefix_transform_rule.as_deref()
    }

    /// Possible digit counts for a (region, line type, kind) triple.
    /// `FixedLineOrMobile` answers with the merged fixed-line and mobile
    /// sets.
    pub fn possible_lengths_for_type(
        &self,
        region_code: &str,
        line_type: LineType,
        kind: LengthKind,
    ) -> Option<Vec<u16>> {
        let Some(territory) = self.store.region(region_code) else {
            warn!("invalid or unknown region code provided: {region_code}");
            return None;
        };
        helper_functions::possible_lengths(territory, line_type, kind)
    }

    /// The plan's example number for a (region, line type) pair, if one is
    /// declared.
    pub fn example_number_for_type(
        &self,
        region_code: &str,
        line_type: LineType,
    ) -> Option<&str> {
        let Some(territory) = self.store.region(region_code) else {
            warn!("invalid or unknown region code provided: {region_code}");
            return None;
        };
        helper_functions::example_number(territory, line_type)
    }

    /// Compiles a metadata pattern through the shared cache. A pattern that
    /// fails to compile means broken plan data; it is logged once per use
    /// site and treated as a non-match by every caller, so it can never
    /// fail a parse or format call.
    pub(super) fn metadata_pattern(&self, pattern: &str) -> Option<Arc<regex::Regex>> {
        match self.regexps.pattern_cache.compiled(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("invalid pattern in numbering plan metadata: {err}");
                None
            }
        }
    }
}
