use crate::{
    CallingCodeRegistry, CountryCallingCode, DEFAULT_REGISTRY, PhoneNumberField,
    callingcode::helper_constants::DEFAULT_MASK, parser::TieBreak,
};

use super::{region_code::RegionCode, resolution_tests::init_logger};

fn code(numeric_code: i32, iso2: &str, area_codes: &[u32]) -> CountryCallingCode {
    CountryCallingCode::new(numeric_code, iso2, area_codes).unwrap()
}

fn builtin(iso2: &str) -> CountryCallingCode {
    DEFAULT_REGISTRY.get(iso2).cloned().unwrap()
}

fn iso_of(field: &PhoneNumberField) -> Option<&str> {
    field.country_code().map(|c| c.iso2_code())
}

#[test]
fn full_number_is_split_into_code_and_local_number() {
    init_logger();
    let mut field = PhoneNumberField::new();
    field.set_full_number(Some("41446681800"));
    assert_eq!(Some("41446681800"), field.full_number());
    assert_eq!(Some(RegionCode::ch()), iso_of(&field));
    assert_eq!(Some("446681800"), field.local_number());
}

#[test]
fn unmatched_or_missing_input_clears_the_derived_values() {
    let mut field = PhoneNumberField::new();
    field.set_full_number(Some("41446681800"));

    field.set_full_number(Some("999123"));
    assert_eq!(Some("999123"), field.full_number());
    assert_eq!(None, field.country_code());
    assert_eq!(None, field.local_number());

    field.set_full_number(Some("41446681800"));
    field.set_full_number(Some(""));
    assert_eq!(None, field.country_code());
    assert_eq!(None, field.local_number());

    field.set_full_number(None);
    assert_eq!(None, field.full_number());
    assert_eq!(None, field.country_code());
}

#[test]
fn duplicate_codes_resolve_to_the_last_available_one() {
    let registry = CallingCodeRegistry::new([
        code(1, RegionCode::us(), &[]),
        code(1, RegionCode::ca(), &[]),
    ])
    .unwrap();
    let mut field = PhoneNumberField::with_codes(registry);
    field.set_full_number(Some("15551234567"));
    assert_eq!(Some(RegionCode::ca()), iso_of(&field));
    assert_eq!(Some("5551234567"), field.local_number());
}

#[test]
fn longest_prefix_tie_break_on_the_field() {
    let registry = CallingCodeRegistry::new([
        code(61, "CX", &[89164]),
        code(61, "QX", &[8]),
    ])
    .unwrap();
    let mut field = PhoneNumberField::with_codes(registry);
    field.set_full_number(Some("61891641234"));
    assert_eq!(Some("QX"), iso_of(&field));

    field.set_tie_break(TieBreak::LongestPrefix);
    field.set_full_number(Some("61891641234"));
    assert_eq!(Some("CX"), iso_of(&field));
    assert_eq!(Some("1234"), field.local_number());
}

#[test]
fn selecting_a_code_replaces_the_full_number() {
    init_logger();
    let mut field = PhoneNumberField::new();
    for calling_code in DEFAULT_REGISTRY.iter().filter(|c| c.area_codes().is_empty()) {
        field.set_full_number(Some("41446681800"));
        field.set_country_code(Some(calling_code.clone()));
        assert_eq!(Some(calling_code.default_prefix().as_str()), field.full_number());
        assert_eq!(Some(calling_code), field.country_code());
        assert_eq!(Some(""), field.local_number());
    }

    field.set_country_code(Some(builtin(RegionCode::r#as())));
    assert_eq!(Some("1684"), field.full_number());

    field.set_country_code(None);
    assert_eq!(None, field.full_number());
    assert_eq!(None, field.local_number());
}

#[test]
fn default_code_only_seeds_an_empty_field() {
    let mut field = PhoneNumberField::new();
    field.set_default_code(Some(builtin(RegionCode::ch())));
    assert_eq!(Some(RegionCode::ch()), iso_of(&field));
    assert_eq!(Some("41"), field.full_number());

    field.set_full_number(Some("79161234567"));
    field.set_default_code(Some(builtin(RegionCode::gb())));
    assert_eq!(Some(RegionCode::ru()), iso_of(&field));
    assert_eq!(Some(RegionCode::gb()), field.default_code().map(|c| c.iso2_code()));

    // no continuous override once the number stops resolving
    field.set_full_number(Some(""));
    assert_eq!(None, field.country_code());
}

#[test]
fn fixed_code_is_applied_outside_local_only_mode() {
    let mut field = PhoneNumberField::new();
    field.set_fixed_code(Some(builtin(RegionCode::gb())));
    assert_eq!(Some(RegionCode::gb()), iso_of(&field));
    assert_eq!(Some("44"), field.full_number());

    let mut local_field = PhoneNumberField::new();
    local_field.set_force_local_only(true);
    local_field.set_fixed_code(Some(builtin(RegionCode::gb())));
    assert_eq!(None, local_field.country_code());
    assert_eq!(Some(""), local_field.full_number());
}

#[test]
fn local_only_mode_mirrors_the_input() {
    let mut field = PhoneNumberField::new();
    field.set_full_number(Some("41446681800"));

    field.set_force_local_only(true);
    assert!(field.is_force_local_only());
    assert_eq!(None, field.country_code());
    assert_eq!(Some("446681800"), field.full_number());
    assert_eq!(Some("446681800"), field.local_number());

    field.set_full_number(Some("41446681800"));
    assert_eq!(None, field.country_code());
    assert_eq!(field.full_number(), field.local_number());

    // seeding is skipped too
    field.set_default_code(Some(builtin(RegionCode::gb())));
    assert_eq!(None, field.country_code());
}

#[test]
fn leaving_local_only_mode_restores_the_previous_code() {
    let mut field = PhoneNumberField::new();
    field.set_full_number(Some("41446681800"));
    field.set_force_local_only(true);
    field.set_full_number(Some("441234567"));

    field.set_force_local_only(false);
    assert_eq!(Some("41441234567"), field.full_number());
    assert_eq!(Some(RegionCode::ch()), iso_of(&field));
    assert_eq!(Some("441234567"), field.local_number());
}

#[test]
fn fixed_code_wins_when_leaving_local_only_mode() {
    let mut field = PhoneNumberField::new();
    field.set_full_number(Some("41446681800"));
    field.set_force_local_only(true);
    field.set_fixed_code(Some(builtin(RegionCode::us())));

    field.set_force_local_only(false);
    assert_eq!(Some("1446681800"), field.full_number());
    assert_eq!(Some(RegionCode::us()), iso_of(&field));
    assert_eq!(Some("446681800"), field.local_number());
}

#[test]
fn leaving_local_only_mode_without_any_code() {
    let mut field = PhoneNumberField::new();
    field.set_force_local_only(true);
    field.set_full_number(Some("41446681800"));

    field.set_force_local_only(false);
    assert_eq!(Some("41446681800"), field.full_number());
    // resolved again from the bare digits
    assert_eq!(Some(RegionCode::ch()), iso_of(&field));
}

#[test]
fn custom_mask_provider() {
    let mut field = PhoneNumberField::new();
    field.set_mask_provider(|code: Option<&CountryCallingCode>| {
        code.map(|c| match c.numeric_code() {
            41 => "## ### ## ##".to_owned(),
            _ => "### ### ####".to_owned(),
        })
    });
    assert_eq!(None, field.mask());

    field.set_full_number(Some("41446681800"));
    assert_eq!(Some("## ### ## ##"), field.mask());
    assert_eq!(Some("44 668 18 00".to_owned()), field.formatted_local_number());

    field.set_country_code(Some(builtin(RegionCode::gb())));
    assert_eq!(Some("### ### ####"), field.mask());

    field.clear_mask_provider();
    assert_eq!(None, field.mask());
}

#[test]
fn default_mask_provider_uses_code_masks() {
    let registry = CallingCodeRegistry::with_defaults()
        .merge([code(41, RegionCode::ch(), &[]).with_mask("### ### ## ##")])
        .unwrap();
    let mut field = PhoneNumberField::with_codes(registry);
    assert_eq!(Some(DEFAULT_MASK), field.mask());

    field.set_full_number(Some("410446681800"));
    assert_eq!(Some("### ### ## ##"), field.mask());
    assert_eq!(Some("044 668 18 00".to_owned()), field.formatted_local_number());

    field.set_full_number(Some("79161234567"));
    assert_eq!(Some(DEFAULT_MASK), field.mask());
    assert_eq!(Some("(916) 123-45-67".to_owned()), field.formatted_local_number());
}

#[test]
fn available_codes_restrict_resolution() {
    let mut field = PhoneNumberField::new();
    field.set_available_codes(
        DEFAULT_REGISTRY
            .select([RegionCode::gb(), RegionCode::us()])
            .unwrap()
            .with_preferred([RegionCode::us()])
            .unwrap(),
    );
    let preferred: Vec<_> = field.preferred_codes().map(|c| c.iso2_code()).collect();
    assert_eq!(vec![RegionCode::us()], preferred);

    field.set_full_number(Some("41446681800"));
    assert_eq!(None, field.country_code());

    field.set_full_number(Some("442079460000"));
    assert_eq!(Some(RegionCode::gb()), iso_of(&field));
}
