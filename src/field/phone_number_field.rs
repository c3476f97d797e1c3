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

use std::fmt;

use log::{debug, warn};

use super::{events::FieldEvent, update_lock::UpdateLock};
use crate::{
    callingcode::{CallingCodeRegistry, CountryCallingCode, DEFAULT_REGISTRY},
    interfaces::MaskProvider,
    mask::{DefaultMaskProvider, MaskTemplate},
    parser::{TieBreak, resolve_with},
};

type Listener = Box<dyn FnMut(&FieldEvent) + Send>;

/// Values the listeners are notified about.
#[derive(Clone)]
struct Snapshot {
    full_number: Option<String>,
    country_code: Option<CountryCallingCode>,
    local_number: Option<String>,
    mask: Option<String>,
}

/// The number behind a phone input: the full number as typed, the calling
/// code inferred from it and the local number left after the prefix.
///
/// The three values are kept consistent through a small set of entry points.
/// Each one holds the field's [`UpdateLock`] while it propagates, so a
/// derived write never starts another derivation. Nothing here fails:
/// input that matches no calling code leaves both the code and the local
/// number unset.
///
/// While local-only mode is on, no calling code is inferred and the local
/// number mirrors the full number.
pub struct PhoneNumberField {
    full_number: Option<String>,
    country_code: Option<CountryCallingCode>,
    local_number: Option<String>,
    mask: Option<String>,

    available_codes: CallingCodeRegistry,
    default_code: Option<CountryCallingCode>,
    fixed_code: Option<CountryCallingCode>,
    force_local_only: bool,
    /// Code in use when local-only mode was switched on, restored when it is
    /// switched off again.
    last_country_code: Option<CountryCallingCode>,
    tie_break: TieBreak,
    mask_provider: Option<Box<dyn MaskProvider + Send + Sync>>,

    update_lock: UpdateLock,
    listeners: Vec<Listener>,
}

impl PhoneNumberField {
    /// A field resolving against the built-in catalog.
    pub fn new() -> Self {
        Self::with_codes(DEFAULT_REGISTRY.clone())
    }

    pub fn with_codes(available_codes: CallingCodeRegistry) -> Self {
        let mut field = Self {
            full_number: None,
            country_code: None,
            local_number: None,
            mask: None,
            available_codes,
            default_code: None,
            fixed_code: None,
            force_local_only: false,
            last_country_code: None,
            tie_break: TieBreak::default(),
            mask_provider: Some(Box::new(DefaultMaskProvider)),
            update_lock: UpdateLock::new(),
            listeners: Vec::new(),
        };
        field.refresh_mask();
        field
    }

    pub fn full_number(&self) -> Option<&str> {
        self.full_number.as_deref()
    }

    pub fn country_code(&self) -> Option<&CountryCallingCode> {
        self.country_code.as_ref()
    }

    pub fn local_number(&self) -> Option<&str> {
        self.local_number.as_deref()
    }

    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }

    pub fn available_codes(&self) -> &CallingCodeRegistry {
        &self.available_codes
    }

    /// Display hint for code pickers, taken from the available codes.
    pub fn preferred_codes(&self) -> impl Iterator<Item = &CountryCallingCode> {
        self.available_codes.preferred()
    }

    pub fn default_code(&self) -> Option<&CountryCallingCode> {
        self.default_code.as_ref()
    }

    pub fn fixed_code(&self) -> Option<&CountryCallingCode> {
        self.fixed_code.as_ref()
    }

    pub fn is_force_local_only(&self) -> bool {
        self.force_local_only
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Whether one of the entry points is currently propagating.
    pub fn is_updating(&self) -> bool {
        self.update_lock.is_held()
    }

    /// The local number laid out over the current mask.
    pub fn formatted_local_number(&self) -> Option<String> {
        let local_number = self.local_number.as_deref()?;
        Some(match self.mask.as_deref() {
            Some(mask) => MaskTemplate::new(mask).apply(local_number),
            None => local_number.to_owned(),
        })
    }

    /// Registers a callback receiving every change of the observable values.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FieldEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Sets the raw number and derives calling code and local number from it.
    pub fn set_full_number(&mut self, text: Option<&str>) {
        let Some(guard) = self.update_lock.try_acquire() else {
            warn!("Ignoring re-entrant full number update");
            return;
        };
        let before = self.snapshot();
        self.apply_full_number(text);
        drop(guard);
        self.notify(before);
    }

    /// Selects a calling code. The full number is replaced by the code's
    /// default prefix, digits typed so far are not carried over.
    ///
    /// In local-only mode the code only becomes the one restored when that
    /// mode is switched off.
    pub fn set_country_code(&mut self, code: Option<CountryCallingCode>) {
        let Some(guard) = self.update_lock.try_acquire() else {
            warn!("Ignoring re-entrant calling code update");
            return;
        };
        let before = self.snapshot();
        if self.force_local_only {
            debug!("Local-only mode, keeping {:?} for later", code);
            self.last_country_code = code;
        } else {
            self.apply_country_code(code);
        }
        drop(guard);
        self.notify(before);
    }

    /// Code used to seed the field when it has none yet. Later changes of the
    /// number are not affected.
    pub fn set_default_code(&mut self, code: Option<CountryCallingCode>) {
        self.default_code = code;
        if self.country_code.is_none() && !self.force_local_only {
            if let Some(code) = self.default_code.clone() {
                debug!("Seeding field with default code {}", code);
                self.set_country_code(Some(code));
            }
        }
    }

    /// Pins the field to one calling code whenever it is not local-only.
    pub fn set_fixed_code(&mut self, code: Option<CountryCallingCode>) {
        self.fixed_code = code;
        if !self.force_local_only {
            if let Some(code) = self.fixed_code.clone() {
                debug!("Fixing field to {}", code);
                self.set_country_code(Some(code));
            }
        }
    }

    /// Switches local-only mode.
    ///
    /// Switching on remembers the current code and keeps only the local
    /// digits. Switching off prefixes the local digits with the fixed code,
    /// or else the remembered one, and resolves the result again.
    pub fn set_force_local_only(&mut self, force_local_only: bool) {
        if self.force_local_only == force_local_only {
            return;
        }
        let Some(guard) = self.update_lock.try_acquire() else {
            warn!("Ignoring re-entrant local-only mode update");
            return;
        };
        let before = self.snapshot();
        self.force_local_only = force_local_only;
        let local_number = self.local_number.clone().unwrap_or_default();

        if force_local_only {
            self.last_country_code = self.country_code.clone();
            self.apply_country_code(None);
            self.apply_full_number(Some(&local_number));
        } else {
            let prefix = self
                .fixed_code
                .as_ref()
                .or(self.last_country_code.as_ref())
                .map(CountryCallingCode::default_prefix);
            match prefix {
                Some(prefix) => {
                    let full_number = fast_cat::concat_str!(prefix.as_str(), local_number.as_str());
                    self.apply_full_number(Some(&full_number));
                }
                None => self.apply_full_number(Some(&local_number)),
            }
        }
        debug!(
            "Local-only mode {}: full number {:?}",
            if force_local_only { "on" } else { "off" },
            self.full_number
        );
        drop(guard);
        self.notify(before);
    }

    /// Replaces the codes the field resolves against. The current number is
    /// left as is until it is set again.
    pub fn set_available_codes(&mut self, available_codes: CallingCodeRegistry) {
        self.available_codes = available_codes;
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tie_break = tie_break;
    }

    /// Installs a mask provider and recomputes the mask right away.
    pub fn set_mask_provider<P>(&mut self, provider: P)
    where
        P: MaskProvider + Send + Sync + 'static,
    {
        self.replace_mask_provider(Some(Box::new(provider)));
    }

    /// Removes the mask provider, leaving the field without a mask.
    pub fn clear_mask_provider(&mut self) {
        self.replace_mask_provider(None);
    }

    fn replace_mask_provider(&mut self, provider: Option<Box<dyn MaskProvider + Send + Sync>>) {
        let before = self.snapshot();
        self.mask_provider = provider;
        self.refresh_mask();
        self.notify(before);
    }

    fn apply_full_number(&mut self, text: Option<&str>) {
        self.full_number = text.map(str::to_owned);

        if self.force_local_only {
            self.country_code = None;
            self.local_number = self.full_number.clone();
        } else {
            let digits = text.unwrap_or_default();
            let resolved = resolve_with(digits, &self.available_codes, self.tie_break)
                .map(|resolution| (resolution.code.clone(), resolution.local_number.to_owned()));
            match resolved {
                Some((code, local_number)) => {
                    debug!("'{}' resolved to {}, local number '{}'", digits, code, local_number);
                    self.country_code = Some(code);
                    self.local_number = Some(local_number);
                }
                None => {
                    debug!("No calling code found for '{}'", digits);
                    self.country_code = None;
                    self.local_number = None;
                }
            }
        }
        self.refresh_mask();
    }

    fn apply_country_code(&mut self, code: Option<CountryCallingCode>) {
        self.full_number = code.as_ref().map(CountryCallingCode::default_prefix);
        self.local_number = code.as_ref().map(|_| String::new());
        self.country_code = code;
        self.refresh_mask();
    }

    fn refresh_mask(&mut self) {
        self.mask = self
            .mask_provider
            .as_ref()
            .and_then(|provider| provider.mask_for(self.country_code.as_ref()));
    }

    fn snapshot(&self) -> Option<Snapshot> {
        if self.listeners.is_empty() {
            return None;
        }
        Some(Snapshot {
            full_number: self.full_number.clone(),
            country_code: self.country_code.clone(),
            local_number: self.local_number.clone(),
            mask: self.mask.clone(),
        })
    }

    fn notify(&mut self, before: Option<Snapshot>) {
        let Some(before) = before else {
            return;
        };
        let mut events = Vec::new();
        if before.full_number != self.full_number {
            events.push(FieldEvent::FullNumberChanged(self.full_number.clone()));
        }
        if before.country_code != self.country_code {
            events.push(FieldEvent::CountryCodeChanged(self.country_code.clone()));
        }
        if before.local_number != self.local_number {
            events.push(FieldEvent::LocalNumberChanged(self.local_number.clone()));
        }
        if before.mask != self.mask {
            events.push(FieldEvent::MaskChanged(self.mask.clone()));
        }
        for event in &events {
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }
}

impl Default for PhoneNumberField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PhoneNumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumberField")
            .field("full_number", &self.full_number)
            .field("country_code", &self.country_code)
            .field("local_number", &self.local_number)
            .field("mask", &self.mask)
            .field("default_code", &self.default_code)
            .field("fixed_code", &self.fixed_code)
            .field("force_local_only", &self.force_local_only)
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::PhoneNumberField;
    use crate::{
        callingcode::{CallingCodeRegistry, CountryCallingCode, helper_constants::DEFAULT_MASK},
        field::FieldEvent,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn code(numeric_code: i32, iso2: &str, area_codes: &[u32]) -> CountryCallingCode {
        CountryCallingCode::new(numeric_code, iso2, area_codes).unwrap()
    }

    #[test]
    fn starts_empty_with_fallback_mask() {
        let field = PhoneNumberField::new();
        assert_eq!(None, field.full_number());
        assert_eq!(None, field.country_code());
        assert_eq!(None, field.local_number());
        assert_eq!(Some(DEFAULT_MASK), field.mask());
        assert!(!field.is_updating());
    }

    #[test]
    fn held_lock_suppresses_updates() {
        init_logger();
        let mut field = PhoneNumberField::new();
        let lock = field.update_lock.clone();
        let guard = lock.try_acquire().unwrap();

        field.set_full_number(Some("41446681800"));
        field.set_country_code(Some(code(44, "GB", &[])));
        assert_eq!(None, field.full_number());
        assert_eq!(None, field.country_code());

        drop(guard);
        field.set_full_number(Some("41446681800"));
        assert_eq!("CH", field.country_code().unwrap().iso2_code());
        assert!(!field.is_updating());
    }

    #[test]
    fn set_country_code_in_local_only_mode_is_remembered() {
        let mut field = PhoneNumberField::new();
        field.set_force_local_only(true);
        field.set_full_number(Some("5551234"));

        field.set_country_code(Some(code(41, "CH", &[])));
        assert_eq!(None, field.country_code());
        assert_eq!(Some("5551234"), field.full_number());

        field.set_force_local_only(false);
        assert_eq!(Some("415551234"), field.full_number());
        assert_eq!("CH", field.country_code().unwrap().iso2_code());
    }

    #[test]
    fn repeated_local_only_switch_keeps_snapshot() {
        let registry = CallingCodeRegistry::with_defaults();
        let mut field = PhoneNumberField::with_codes(registry);
        field.set_full_number(Some("41446681800"));

        field.set_force_local_only(true);
        field.set_force_local_only(true);
        field.set_force_local_only(false);
        assert_eq!(Some("41446681800"), field.full_number());
        assert_eq!("CH", field.country_code().unwrap().iso2_code());
    }

    #[test]
    fn listeners_receive_changes_only() {
        init_logger();
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut field = PhoneNumberField::new();
        let sink = Arc::clone(&events);
        field.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        field.set_full_number(Some("41446681800"));
        let switzerland = field.country_code().cloned();
        assert_eq!(
            vec![
                FieldEvent::FullNumberChanged(Some("41446681800".to_owned())),
                FieldEvent::CountryCodeChanged(switzerland),
                FieldEvent::LocalNumberChanged(Some("446681800".to_owned())),
            ],
            *events.lock().unwrap()
        );

        events.lock().unwrap().clear();
        field.set_full_number(Some("41446681800"));
        assert!(events.lock().unwrap().is_empty());

        field.clear_mask_provider();
        assert_eq!(vec![FieldEvent::MaskChanged(None)], *events.lock().unwrap());
    }
}
