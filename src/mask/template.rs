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

use crate::callingcode::helper_constants::MASK_PLACEHOLDER;

/// A positional mask such as `"(###) ###-##-##"`, where every `#` takes one
/// digit and everything else is copied as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskTemplate<'a> {
    template: &'a str,
}

impl<'a> MaskTemplate<'a> {
    pub fn new(template: &'a str) -> Self {
        Self { template }
    }

    /// Number of digits the template has room for.
    pub fn capacity(&self) -> usize {
        self.template
            .chars()
            .filter(|&symbol| symbol == MASK_PLACEHOLDER)
            .count()
    }

    /// Lays `digits` out over the template.
    ///
    /// Non-digits in the input are skipped. Output stops at the first
    /// placeholder with no digit left, so partial input renders without
    /// trailing literals. Digits beyond the template are appended as is.
    pub fn apply(&self, digits: &str) -> String {
        let mut digits = digits.chars().filter(char::is_ascii_digit).peekable();
        let mut formatted = String::with_capacity(self.template.len());
        for symbol in self.template.chars() {
            if digits.peek().is_none() {
                break;
            }
            if symbol == MASK_PLACEHOLDER {
                formatted.extend(digits.next());
            } else {
                formatted.push(symbol);
            }
        }
        formatted.extend(digits);
        formatted
    }
}
