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

/// Mask used by every built-in calling code.
pub const DEFAULT_MASK: &'static str = "(###) ###-##-##";
/// Character standing for one digit inside a mask template.
pub const MASK_PLACEHOLDER: char = '#';
// ISO 3166-1 alpha-2, upper case only.
pub const ISO2_PATTERN: &'static str = r"^[A-Z]{2}$";
