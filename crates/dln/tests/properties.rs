//! Property tests for licence-number generation and validation.

use dln::{
    INITIALS_LEN, LICENCE_NUMBER_LEN, PREFIX_LEN, PersonRecord, SURNAME_LEN, Sex,
    encode_initials, encode_surname, generate, validate, validate_format,
};
use proptest::prelude::*;

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn birth_date() -> impl Strategy<Value = String> {
    (1000_u16..=9999, 1_u8..=12, 1_u8..=31)
        .prop_map(|(year, month, day)| format!("{year:04}-{month:02}-{day:02}"))
}

/// Records whose family name has at least one letter, so the code they
/// produce satisfies the grammar.
fn person() -> impl Strategy<Value = PersonRecord> {
    (
        "[A-Za-z][A-Za-z' -]{0,15}",
        "([A-Za-z]{1,8}( [A-Za-z]{1,8}){0,3})?",
        birth_date(),
        sex(),
    )
        .prop_map(|(family, personal, date, sex)| {
            PersonRecord::new(family, personal, date, sex)
        })
}

/// Suffixes accepted by the grammar.
fn suffix() -> impl Strategy<Value = String> {
    "[2-9A-HJ-NPR-Xa-hj-npr-x][A-Za-z]{2}"
}

proptest! {
    /// The prefix is always 13 characters and the suffix is appended as is.
    #[test]
    fn generated_length_tracks_suffix(person in person(), suffix in "[a-z0-9]{0,5}") {
        let prefix = generate(&person, "");
        prop_assert_eq!(prefix.as_ref().map(String::len), Ok(PREFIX_LEN));

        let code = generate(&person, &suffix);
        prop_assert_eq!(code.as_ref().map(String::len), Ok(PREFIX_LEN + suffix.len()));
    }

    /// A generated code with a grammatical suffix passes the format check.
    #[test]
    fn generated_codes_are_well_formed(person in person(), suffix in suffix()) {
        let code = generate(&person, &suffix);
        prop_assert!(code.is_ok());
        if let Ok(code) = code {
            prop_assert_eq!(code.len(), LICENCE_NUMBER_LEN);
            prop_assert!(validate_format(&code), "{} failed the grammar", code);
        }
    }

    /// A generated code validates against the record it came from.
    #[test]
    fn generated_codes_match_their_person(person in person(), suffix in suffix()) {
        if let Ok(code) = generate(&person, &suffix) {
            prop_assert!(validate(&code, Some(&person)));
        }
    }

    /// A code never validates against a person with a different prefix.
    #[test]
    fn codes_reject_other_people(
        person in person(),
        other in person(),
        suffix in suffix(),
    ) {
        let mine = generate(&person, "");
        let theirs = generate(&other, "");
        prop_assume!(mine != theirs);

        if let Ok(code) = generate(&person, &suffix) {
            prop_assert!(!validate(&code, Some(&other)));
        }
    }

    /// Codes that are not exactly 16 characters never pass the grammar.
    #[test]
    fn wrong_length_codes_are_rejected(person in person(), suffix in "[A-Z]{0,2}|[A-Z]{4,6}") {
        if let Ok(code) = generate(&person, &suffix) {
            prop_assert!(!validate_format(&code));
        }
    }

    /// Surname encoding ignores letter case and always fills five places.
    /// Case folding is ASCII-only, so `ß` is dropped rather than becoming `SS`.
    #[test]
    fn surname_encoding_is_case_insensitive(name in any::<String>()) {
        let encoded = encode_surname(&name);
        prop_assert_eq!(encoded.len(), SURNAME_LEN);
        prop_assert_eq!(encoded, encode_surname(&name.to_ascii_uppercase()));
    }

    /// Initials always fill two places.
    #[test]
    fn initials_have_fixed_width(names in any::<String>()) {
        prop_assert_eq!(encode_initials(&names).len(), INITIALS_LEN);
    }
}
