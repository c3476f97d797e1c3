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

/// A calling code record that can not be part of any registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCodeDefinition {
    /// Calling codes start at 1, there is no "+0".
    #[error("Country calling code must be positive, got {0}")]
    NonPositiveCode(i32),
    /// The identifier is not a two letter upper-case ISO 3166-1 code.
    #[error("Invalid ISO 3166-1 alpha-2 code: '{0}'")]
    InvalidIso2(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{0}")]
    InvalidCodeDefinition(#[from] InvalidCodeDefinition),
    #[error("ISO code {0} is defined more than once")]
    DuplicateIso2(String),
    #[error("ISO code {0} is not part of the registry")]
    UnknownIso2(String),
}
