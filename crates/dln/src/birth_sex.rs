//! Section B: the birth-date and sex field.
//!
//! The six characters are the decade digit of the birth year, a two-digit
//! month code, the two-digit day, and the final digit of the year. Sex is
//! carried by the month code alone: women have [`FEMALE_MONTH_OFFSET`] added
//! to the month, so `07` becomes `57`.
//!
//! Dates are checked for shape only. Month `13` or day `32` encode without
//! complaint; the validation grammar is where such values get caught.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::EncodingError;
use crate::person::Sex;

/// Amount added to the birth month for women.
pub const FEMALE_MONTH_OFFSET: u16 = 50;

static BIRTH_DATE_RE: OnceLock<Regex> = OnceLock::new();

fn birth_date_regex() -> &'static Regex {
    BIRTH_DATE_RE.get_or_init(|| {
        Regex::new("^([0-9]{4})-([0-9]{2})-([0-9]{2})$")
            .unwrap_or_else(|error| panic!("birth date regex failed to compile: {error}"))
    })
}

/// Encodes a `YYYY-MM-DD` birth date and sex into the 6-character field.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidDateFormat`] if `birth_date` is not four
/// digits, a hyphen, two digits, a hyphen, and two digits.
///
/// # Examples
///
/// ```
/// use dln::{Sex, encode_birth_sex};
///
/// assert_eq!(encode_birth_sex("1964-07-05", Sex::Female).as_deref(), Ok("657054"));
/// assert_eq!(encode_birth_sex("1969-05-10", Sex::Male).as_deref(), Ok("605109"));
/// assert!(encode_birth_sex("05/07/1964", Sex::Male).is_err());
/// ```
pub fn encode_birth_sex(birth_date: &str, sex: Sex) -> Result<String, EncodingError> {
    let invalid = || EncodingError::InvalidDateFormat {
        value: birth_date.to_owned(),
    };

    let captures = birth_date_regex().captures(birth_date).ok_or_else(invalid)?;
    let (_, [year, month, day]) = captures.extract();

    let mut year_digits = year.chars().skip(2);
    let (Some(decade), Some(unit)) = (year_digits.next(), year_digits.next()) else {
        return Err(invalid());
    };

    let month_code = match sex {
        Sex::Male => month.to_owned(),
        Sex::Female => {
            let offset = month.parse::<u16>().map_err(|_| invalid())? + FEMALE_MONTH_OFFSET;
            offset.to_string()
        }
    };

    Ok(format!("{decade}{month_code}{day}{unit}"))
}
