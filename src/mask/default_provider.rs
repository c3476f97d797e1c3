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

use crate::{
    callingcode::{CountryCallingCode, helper_constants::DEFAULT_MASK},
    interfaces::MaskProvider,
};

/// Uses the mask stored on the calling code, or [`DEFAULT_MASK`] while no
/// code is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMaskProvider;

impl MaskProvider for DefaultMaskProvider {
    fn mask_for(&self, code: Option<&CountryCallingCode>) -> Option<String> {
        Some(code.map_or(DEFAULT_MASK, |code| code.mask()).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultMaskProvider;
    use crate::{
        callingcode::{CountryCallingCode, helper_constants::DEFAULT_MASK},
        interfaces::MaskProvider,
    };

    #[test]
    fn uses_code_mask_or_fallback() {
        let code = CountryCallingCode::new(41, "CH", &[])
            .unwrap()
            .with_mask("## ### ## ##");
        assert_eq!(Some("## ### ## ##".to_owned()), DefaultMaskProvider.mask_for(Some(&code)));
        assert_eq!(Some(DEFAULT_MASK.to_owned()), DefaultMaskProvider.mask_for(None));
    }

    #[test]
    fn closures_are_providers() {
        let provider = |code: Option<&CountryCallingCode>| code.map(|c| c.iso2_code().to_owned());
        let code = CountryCallingCode::new(41, "CH", &[]).unwrap();
        assert_eq!(Some("CH".to_owned()), provider.mask_for(Some(&code)));
        assert_eq!(None, provider.mask_for(None));
    }
}
