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

use crate::callingcode::CountryCallingCode;

/// Change notification of a [`PhoneNumberField`](super::PhoneNumberField).
/// Carries the new value; only sent when the value actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    FullNumberChanged(Option<String>),
    CountryCodeChanged(Option<CountryCallingCode>),
    LocalNumberChanged(Option<String>),
    MaskChanged(Option<String>),
}
