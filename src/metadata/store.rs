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

use std::collections::HashMap;

use crate::engine::errors::MetadataError;

use super::schema::Territory;

/// One country calling code with every territory declared for it.
/// `territory_indexes` keeps the metadata-declared order; `main` points at
/// the first territory flagged as main for the code, else the first
/// declared one.
struct CallingCodeEntry {
    code: u16,
    territory_indexes: Vec<usize>,
    main: usize,
}

/// Immutable, indexed collection of per-region numbering plans.
///
/// Built exactly once per engine instance and never mutated afterwards;
/// reloading metadata means building a whole new store. A failed build
/// returns an error and leaves nothing partially usable behind.
pub struct MetadataStore {
    territories: Vec<Territory>,
    region_to_index: HashMap<String, usize>,
    // Sorted by calling code so lookups can binary-search.
    calling_code_index: Vec<CallingCodeEntry>,
}

impl MetadataStore {
    /// Decodes a serialized numbering-plan payload (a JSON array of
    /// territory objects) and indexes it.
    pub fn from_bytes(payload: &[u8]) -> Result<Self, MetadataError> {
        if payload.is_empty() {
            return Err(MetadataError::NotFound);
        }
        let territories: Vec<Territory> = serde_json::from_slice(payload)
            .map_err(|err| MetadataError::Malformed(err.to_string()))?;
        Self::from_territories(territories)
    }

    /// Indexes an already-decoded territory collection, validating it along
    /// the way. Region codes are case-normalized here once so that every
    /// later lookup is an exact match.
    pub fn from_territories(mut territories: Vec<Territory>) -> Result<Self, MetadataError> {
        if territories.is_empty() {
            return Err(MetadataError::NotFound);
        }

        let mut region_to_index = HashMap::with_capacity(territories.len());
        let mut groups: HashMap<u16, Vec<usize>> = HashMap::new();
        for (index, territory) in territories.iter_mut().enumerate() {
            territory.id = territory.id.trim().to_ascii_uppercase();
            if territory.id.is_empty() {
                return Err(MetadataError::Malformed(
                    "territory with a blank region code".to_string(),
                ));
            }
            if territory.country_code == 0 {
                return Err(MetadataError::Malformed(format!(
                    "territory {} has no country calling code",
                    territory.id
                )));
            }
            if region_to_index
                .insert(territory.id.clone(), index)
                .is_some()
            {
                return Err(MetadataError::Malformed(format!(
                    "duplicate region code {}",
                    territory.id
                )));
            }
            groups
                .entry(territory.country_code)
                .or_default()
                .push(index);
        }

        let mut calling_code_index: Vec<CallingCodeEntry> = groups
            .into_iter()
            .map(|(code, territory_indexes)| {
                let main = territory_indexes
                    .iter()
                    .copied()
                    .find(|&index| territories[index].main_country_for_code)
                    .unwrap_or(territory_indexes[0]);
                CallingCodeEntry {
                    code,
                    territory_indexes,
                    main,
                }
            })
            .collect();
        calling_code_index.sort_by_key(|entry| entry.code);

        Ok(Self {
            territories,
            region_to_index,
            calling_code_index,
        })
    }

    fn entry_for(&self, calling_code: u16) -> Option<&CallingCodeEntry> {
        self.calling_code_index
            .binary_search_by_key(&calling_code, |entry| entry.code)
            .ok()
            .map(|position| &self.calling_code_index[position])
    }

    /// Territory for a region code, matched case-insensitively.
    pub fn region(&self, region_code: &str) -> Option<&Territory> {
        let key = region_code.to_ascii_uppercase();
        self.region_to_index
            .get(&key)
            .map(|&index| &self.territories[index])
    }

    pub fn has_calling_code(&self, calling_code: u16) -> bool {
        self.entry_for(calling_code).is_some()
    }

    /// Every territory sharing `calling_code`, in metadata-declared order.
    pub fn territories_for_calling_code(
        &self,
        calling_code: u16,
    ) -> impl Iterator<Item = &Territory> + '_ {
        self.entry_for(calling_code)
            .into_iter()
            .flat_map(move |entry| {
                entry
                    .territory_indexes
                    .iter()
                    .map(move |&index| &self.territories[index])
            })
    }

    /// The designated main territory for a calling code shared by several
    /// regions (calling code 1 maps to "US", 7 to "RU", and so on).
    pub fn main_territory_for_calling_code(&self, calling_code: u16) -> Option<&Territory> {
        self.entry_for(calling_code)
            .map(|entry| &self.territories[entry.main])
    }

    pub fn region_codes(&self) -> impl Iterator<Item = &str> {
        self.territories.iter().map(|territory| territory.id.as_str())
    }

    pub fn calling_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.calling_code_index.iter().map(|entry| entry.code)
    }
}

#[cfg(test)]
mod tests {
    use super::MetadataStore;
    use crate::metadata::schema::Territory;

    fn territory(id: &str, country_code: u16, main: bool) -> Territory {
        Territory {
            id: id.to_string(),
            country_code,
            main_country_for_code: main,
            ..Default::default()
        }
    }

    #[test]
    fn empty_collection_is_not_found() {
        assert!(matches!(
            MetadataStore::from_territories(Vec::new()),
            Err(crate::MetadataError::NotFound)
        ));
    }

    #[test]
    fn duplicate_region_codes_are_malformed() {
        let result = MetadataStore::from_territories(vec![
            territory("ru", 7, true),
            territory("RU", 7, false),
        ]);
        assert!(matches!(result, Err(crate::MetadataError::Malformed(_))));
    }

    #[test]
    fn main_flag_wins_over_declared_order() {
        let store = MetadataStore::from_territories(vec![
            territory("KZ", 7, false),
            territory("RU", 7, true),
        ])
        .unwrap();

        let main = store.main_territory_for_calling_code(7).unwrap();
        assert_eq!(main.id, "RU");

        let declared: Vec<&str> = store
            .territories_for_calling_code(7)
            .map(|territory| territory.id.as_str())
            .collect();
        assert_eq!(declared, vec!["KZ", "RU"]);
    }

    #[test]
    fn first_declared_territory_is_main_without_a_flag() {
        let store = MetadataStore::from_territories(vec![
            territory("KZ", 7, false),
            territory("RU", 7, false),
        ])
        .unwrap();
        assert_eq!(store.main_territory_for_calling_code(7).unwrap().id, "KZ");
    }

    #[test]
    fn region_lookup_is_case_insensitive() {
        let store = MetadataStore::from_territories(vec![territory("GB", 44, true)]).unwrap();
        assert!(store.region("gb").is_some());
        assert!(store.region("GB").is_some());
        assert!(store.region("FR").is_none());
    }
}
