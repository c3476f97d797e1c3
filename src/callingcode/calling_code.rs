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

use std::{borrow::Cow, fmt, sync::LazyLock};

use regex::Regex;

use super::{
    errors::InvalidCodeDefinition,
    helper_constants::{DEFAULT_MASK, ISO2_PATTERN},
};

static ISO2_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISO2_PATTERN).expect("ISO2 pattern is a valid regex"));

/// A country calling code together with the area codes that distinguish
/// territories sharing it (e.g. the NANP members behind "+1").
///
/// Values are immutable once built. Built-in records borrow their data from
/// static tables, custom records own it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCallingCode {
    numeric_code: i32,
    iso2_code: Cow<'static, str>,
    area_codes: Cow<'static, [u32]>,
    mask: Cow<'static, str>,
}

impl CountryCallingCode {
    /// Creates a custom calling code with the default mask.
    ///
    /// Fails with [`InvalidCodeDefinition`] when `numeric_code` is not
    /// positive or `iso2_code` is not a two letter upper-case identifier.
    pub fn new(
        numeric_code: i32,
        iso2_code: &str,
        area_codes: &[u32],
    ) -> Result<Self, InvalidCodeDefinition> {
        if numeric_code < 1 {
            return Err(InvalidCodeDefinition::NonPositiveCode(numeric_code));
        }
        if !ISO2_REGEX.is_match(iso2_code) {
            return Err(InvalidCodeDefinition::InvalidIso2(iso2_code.to_owned()));
        }
        Ok(Self {
            numeric_code,
            iso2_code: Cow::Owned(iso2_code.to_owned()),
            area_codes: Cow::Owned(area_codes.to_vec()),
            mask: Cow::Borrowed(DEFAULT_MASK),
        })
    }

    /// Entries of the compiled-in table, checked by the registry tests.
    pub(super) const fn builtin(
        numeric_code: i32,
        iso2_code: &'static str,
        area_codes: &'static [u32],
    ) -> Self {
        Self {
            numeric_code,
            iso2_code: Cow::Borrowed(iso2_code),
            area_codes: Cow::Borrowed(area_codes),
            mask: Cow::Borrowed(DEFAULT_MASK),
        }
    }

    /// Replaces the display mask of this code.
    pub fn with_mask<M: Into<Cow<'static, str>>>(mut self, mask: M) -> Self {
        self.mask = mask.into();
        self
    }

    pub fn numeric_code(&self) -> i32 {
        self.numeric_code
    }

    pub fn iso2_code(&self) -> &str {
        &self.iso2_code
    }

    /// Area codes in the order they are tried while scoring.
    pub fn area_codes(&self) -> &[u32] {
        &self.area_codes
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// The first listed area code, if the code has any.
    pub fn default_area_code(&self) -> Option<u32> {
        self.area_codes.first().copied()
    }

    /// Digits a number of this code starts with: the calling code followed
    /// by the default area code. For "+1 684" this is `"1684"`.
    pub fn default_prefix(&self) -> String {
        let mut code_buf = itoa::Buffer::new();
        let country_prefix = code_buf.format(self.numeric_code);
        match self.default_area_code() {
            Some(area_code) => {
                let mut area_buf = itoa::Buffer::new();
                let area_prefix = area_buf.format(area_code);
                fast_cat::concat_str!(country_prefix, area_prefix)
            }
            None => country_prefix.to_owned(),
        }
    }
}

impl fmt::Display for CountryCallingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{}", self.iso2_code, self.numeric_code)
    }
}
