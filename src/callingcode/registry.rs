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

use std::collections::{HashMap, HashSet};

use log::trace;

use super::{calling_code::CountryCallingCode, defaults::BUILTIN_CODES, errors::RegistryError};

/// Ordered catalog of calling codes.
///
/// Iteration order is insertion order and is part of the contract: the
/// resolver breaks ties by it. ISO identifiers are unique. The preferred
/// subset is a display hint only and never restricts lookups or resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingCodeRegistry {
    codes: Vec<CountryCallingCode>,
    /// Position of every code in `codes`, keyed by ISO identifier.
    by_iso2: HashMap<String, usize>,
    /// Indexes into `codes`, de-duplicated, in caller order.
    preferred: Vec<usize>,
}

impl CallingCodeRegistry {
    /// The compiled-in catalog.
    pub fn with_defaults() -> Self {
        let codes = BUILTIN_CODES.to_vec();
        let by_iso2 = codes
            .iter()
            .enumerate()
            .map(|(index, code)| (code.iso2_code().to_owned(), index))
            .collect();
        Self { codes, by_iso2, preferred: Vec::new() }
    }

    /// Builds a registry made of exactly `codes`, replacing the built-ins.
    pub fn new<I>(codes: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = CountryCallingCode>,
    {
        let codes: Vec<_> = codes.into_iter().collect();
        let mut by_iso2 = HashMap::with_capacity(codes.len());
        for (index, code) in codes.iter().enumerate() {
            if by_iso2.insert(code.iso2_code().to_owned(), index).is_some() {
                return Err(RegistryError::DuplicateIso2(code.iso2_code().to_owned()));
            }
        }
        Ok(Self { codes, by_iso2, preferred: Vec::new() })
    }

    /// Returns the union of this registry and `custom`.
    ///
    /// A custom record whose ISO identifier already exists takes the place
    /// of the existing one (keeping its position), others are appended in
    /// the given order. The preferred subset is kept.
    pub fn merge<I>(&self, custom: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = CountryCallingCode>,
    {
        let mut merged = self.clone();
        let mut custom_isos = HashSet::new();
        for code in custom {
            if !custom_isos.insert(code.iso2_code().to_owned()) {
                return Err(RegistryError::DuplicateIso2(code.iso2_code().to_owned()));
            }
            if let Some(&index) = merged.by_iso2.get(code.iso2_code()) {
                trace!("Custom calling code {} replaces {}", code, merged.codes[index]);
                merged.codes[index] = code;
            } else {
                merged
                    .by_iso2
                    .insert(code.iso2_code().to_owned(), merged.codes.len());
                merged.codes.push(code);
            }
        }
        Ok(merged)
    }

    /// Returns a registry holding only the given codes, in the given order.
    /// Useful to restrict the codes a field may resolve to.
    pub fn select<'a, I>(&self, iso2_codes: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selected = Vec::new();
        for iso2 in iso2_codes {
            let code = self
                .get(iso2)
                .ok_or_else(|| RegistryError::UnknownIso2(iso2.to_owned()))?;
            selected.push(code.clone());
        }
        Self::new(selected)
    }

    /// Sets the preferred subset. Repeated identifiers keep their first
    /// position, unknown ones are rejected.
    pub fn with_preferred<'a, I>(mut self, iso2_codes: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut preferred = Vec::new();
        for iso2 in iso2_codes {
            let index = *self
                .by_iso2
                .get(iso2)
                .ok_or_else(|| RegistryError::UnknownIso2(iso2.to_owned()))?;
            if !preferred.contains(&index) {
                preferred.push(index);
            }
        }
        self.preferred = preferred;
        Ok(self)
    }

    pub fn preferred(&self) -> impl Iterator<Item = &CountryCallingCode> {
        self.preferred.iter().map(|&index| &self.codes[index])
    }

    pub fn get(&self, iso2_code: &str) -> Option<&CountryCallingCode> {
        self.by_iso2.get(iso2_code).map(|&index| &self.codes[index])
    }

    /// All codes dialled with the given calling code, in registry order.
    pub fn codes_for(&self, numeric_code: i32) -> impl Iterator<Item = &CountryCallingCode> {
        self.codes
            .iter()
            .filter(move |code| code.numeric_code() == numeric_code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryCallingCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CallingCodeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<'a> IntoIterator for &'a CallingCodeRegistry {
    type Item = &'a CountryCallingCode;
    type IntoIter = std::slice::Iter<'a, CountryCallingCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
