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

/// Maps the current calling code of a field to the mask template shown for
/// it. Used to isolate the mask policy so a different one can be swapped in
/// easily; any matching closure is a provider.
pub trait MaskProvider {
    /// Template for `code`, `code` is `None` while no calling code is known.
    fn mask_for(&self, code: Option<&CountryCallingCode>) -> Option<String>;
}

impl<F> MaskProvider for F
where
    F: Fn(Option<&CountryCallingCode>) -> Option<String>,
{
    fn mask_for(&self, code: Option<&CountryCallingCode>) -> Option<String> {
        self(code)
    }
}
