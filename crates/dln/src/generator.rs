//! Licence-number generation from person records.
//!
//! This module stitches sections A, B, and C into the personal prefix and
//! appends the caller's suffix. It is the only place where person-record
//! field checks are triggered.

use tracing::trace;

use crate::birth_sex::encode_birth_sex;
use crate::error::EncodingError;
use crate::initials::encode_initials;
use crate::person::PersonRecord;
use crate::surname::encode_surname;

/// Length of the personal prefix produced from a well-formed record.
pub const PREFIX_LEN: usize = 13;

/// Generates a licence number for `person`, followed by `suffix`.
///
/// The suffix is appended verbatim; pass `""` to get the 13-character
/// personal prefix alone. No grammar check is applied to the output, so
/// callers that need a complete number should run [`crate::validate_format`]
/// on the result.
///
/// # Errors
///
/// Returns [`EncodingError`] if:
/// - a required field is missing (`familyName`, `personalName`, `birthDate`,
///   then `sex`)
/// - the sex is not `M` or `F`
/// - the birth date is not in `YYYY-MM-DD` form
///
/// # Example
///
/// ```
/// use dln::{PersonRecord, Sex, generate};
///
/// let person = PersonRecord::new("Gardner", "Charles", "1969-05-10", Sex::Male);
///
/// assert_eq!(generate(&person, "").as_deref(), Ok("GARDN605109C9"));
/// assert_eq!(generate(&person, "9AA").as_deref(), Ok("GARDN605109C99AA"));
/// ```
pub fn generate(person: &PersonRecord, suffix: &str) -> Result<String, EncodingError> {
    let fields = person.fields()?;

    let surname = encode_surname(fields.family_name);
    let birth_sex = encode_birth_sex(fields.birth_date, fields.sex)?;
    let initials = encode_initials(fields.personal_name);

    let code = format!("{surname}{birth_sex}{initials}{suffix}");
    trace!(code = %code, "generated licence number");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::person::Sex;

    #[fixture]
    fn morgan() -> PersonRecord {
        PersonRecord::new("Morgan", "Sarah Meredyth", "1964-07-05", Sex::Female)
    }

    #[fixture]
    fn gardner() -> PersonRecord {
        PersonRecord::new("Gardner", "Charles", "1969-05-10", Sex::Male)
    }

    #[rstest]
    fn generates_prefix_for_female_record(morgan: PersonRecord) {
        assert_eq!(generate(&morgan, ""), Ok("MORGA657054SM".to_owned()));
    }

    #[rstest]
    fn appends_suffix_verbatim(morgan: PersonRecord) {
        assert_eq!(generate(&morgan, "9IJ"), Ok("MORGA657054SM9IJ".to_owned()));
    }

    #[rstest]
    fn generates_prefix_for_male_record(gardner: PersonRecord) {
        assert_eq!(generate(&gardner, ""), Ok("GARDN605109C9".to_owned()));
    }

    #[rstest]
    #[case("")]
    #[case("9IJ")]
    #[case("anything at all")]
    fn output_length_is_prefix_plus_suffix(gardner: PersonRecord, #[case] suffix: &str) {
        let code = generate(&gardner, suffix).expect("complete record");
        assert_eq!(code.chars().count(), PREFIX_LEN + suffix.chars().count());
    }

    #[test]
    fn mac_surnames_are_folded() {
        let person = PersonRecord::new("MacDonald", "Flora", "1922-10-15", Sex::Female);
        let code = generate(&person, "").expect("complete record");
        assert!(code.starts_with("MCDON"), "unexpected code {code}");
    }

    #[test]
    fn rejects_unknown_sex() {
        let person = PersonRecord {
            sex: Some("U".to_owned()),
            ..PersonRecord::new("Lee", "Ann", "1990-01-01", Sex::Male)
        };
        assert_eq!(
            generate(&person, ""),
            Err(EncodingError::InvalidSex {
                value: "U".to_owned()
            })
        );
    }

    #[test]
    fn rejects_malformed_birth_date() {
        let person = PersonRecord::new("Lee", "Ann", "1/1/1990", Sex::Male);
        assert_eq!(
            generate(&person, ""),
            Err(EncodingError::InvalidDateFormat {
                value: "1/1/1990".to_owned()
            })
        );
    }

    #[test]
    fn sex_is_checked_before_birth_date() {
        let person = PersonRecord {
            sex: Some("female".to_owned()),
            ..PersonRecord::new("Lee", "Ann", "not a date", Sex::Female)
        };
        assert!(matches!(
            generate(&person, ""),
            Err(EncodingError::InvalidSex { .. })
        ));
    }

    #[test]
    fn reports_missing_field() {
        let person = PersonRecord {
            personal_name: None,
            ..PersonRecord::new("Lee", "Ann", "1990-01-01", Sex::Male)
        };
        assert_eq!(
            generate(&person, ""),
            Err(EncodingError::MissingField {
                field: "personalName"
            })
        );
    }

    #[test]
    fn empty_names_pad_out_fully() {
        let person = PersonRecord::new("", "", "1990-01-01", Sex::Male);
        assert_eq!(generate(&person, ""), Ok("9999990101099".to_owned()));
    }
}
