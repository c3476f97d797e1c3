//! Calling code inference for phone number input.
//!
//! A [`CallingCodeRegistry`] lists the known calling codes, the [`parser`]
//! module scores a raw digit string against them and picks the best match,
//! and [`PhoneNumberField`] keeps full number, calling code and local number
//! in sync for one input.

pub mod callingcode;
pub mod field;
pub mod interfaces;
pub mod mask;
pub mod parser;

#[cfg(test)]
mod tests;

pub use callingcode::{
    CallingCodeRegistry, CountryCallingCode, DEFAULT_REGISTRY,
    errors::{InvalidCodeDefinition, RegistryError},
};
pub use field::{FieldEvent, PhoneNumberField};
pub use interfaces::MaskProvider;
pub use mask::{DefaultMaskProvider, MaskTemplate};
pub use parser::{MatchScore, Resolution, TieBreak};
