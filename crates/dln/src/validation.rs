//! Licence-number grammar and person cross-checks.
//!
//! # Grammar
//!
//! A complete licence number is exactly [`LICENCE_NUMBER_LEN`] characters:
//!
//! - positions 0-4: one to five letters, then `9` padding
//! - position 5: the decade digit
//! - positions 6-7: month `01`-`12`, or `51`-`62` for women
//! - positions 8-9: day `01`-`31`
//! - position 10: the year digit
//! - positions 11-12: `99`, or a letter followed by a letter or `9`
//! - position 13: a digit `2`-`9` or a letter other than I, O, Q, Y, Z
//! - positions 14-15: two letters
//!
//! Letters may be either case. Calendar correctness is not checked: 31
//! February passes.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::Rejection;
use crate::generator::{PREFIX_LEN, generate};
use crate::person::PersonRecord;

/// Length of a complete licence number.
pub const LICENCE_NUMBER_LEN: usize = 16;

/// Number of trailing characters not derived from the person record.
pub const SUFFIX_LEN: usize = 3;

static LICENCE_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn licence_number_regex() -> &'static Regex {
    LICENCE_NUMBER_RE.get_or_init(|| {
        // Length is enforced separately; at 16 characters the surname block
        // can only line up as five characters.
        let pattern = concat!(
            "^[A-Za-z]{1,5}9{0,4}[0-9]",
            "(?:[05][1-9]|[16][0-2])",
            "(?:0[1-9]|[12][0-9]|3[01])",
            "[0-9]",
            "(?:99|[A-Za-z][A-Za-z9])",
            "[2-9A-HJ-NPR-Xa-hj-npr-x]",
            "[A-Za-z]{2}$",
        );
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("licence number regex failed to compile: {error}"))
    })
}

/// Returns `true` if `code` satisfies the licence-number grammar.
///
/// This is a structural check only; see [`validate`] to also compare the
/// code against a person record.
///
/// # Examples
///
/// ```
/// use dln::validate_format;
///
/// assert!(validate_format("MORGA657054SM9IJ"));
/// assert!(!validate_format("MORGA657054SM"));    // Missing suffix
/// assert!(!validate_format("MORGA613054SM9IJ")); // Month 13
/// assert!(!validate_format("MORGA657054SMIAB")); // Suffix starts with I
/// ```
#[must_use]
pub fn validate_format(code: &str) -> bool {
    code.len() == LICENCE_NUMBER_LEN && licence_number_regex().is_match(code)
}

/// Checks `code` and reports why it was refused.
///
/// The grammar is checked first. When a `person` is supplied, the prefix
/// generated from it must equal the code without its
/// [`SUFFIX_LEN`]-character suffix, compared case-sensitively. A supplied
/// record with no fields set is still checked, and fails with
/// [`Rejection::InvalidPerson`].
///
/// # Errors
///
/// Returns the first [`Rejection`] that applies:
/// - [`Rejection::Malformed`] when the grammar does not match
/// - [`Rejection::InvalidPerson`] when the person record cannot be encoded
/// - [`Rejection::PersonMismatch`] when the prefixes differ
///
/// # Example
///
/// ```
/// use dln::{PersonRecord, Rejection, Sex, check};
///
/// let gardner = PersonRecord::new("Gardner", "Charles", "1969-05-10", Sex::Male);
///
/// assert_eq!(check("GARDN605109C99AA", Some(&gardner)), Ok(()));
/// assert!(matches!(
///     check("MORGA657054SM9IJ", Some(&gardner)),
///     Err(Rejection::PersonMismatch { .. })
/// ));
/// ```
pub fn check(code: &str, person: Option<&PersonRecord>) -> Result<(), Rejection> {
    if !validate_format(code) {
        return Err(Rejection::Malformed);
    }

    let Some(record) = person else {
        return Ok(());
    };

    let expected = generate(record, "").map_err(Rejection::InvalidPerson)?;
    let actual = code.get(..PREFIX_LEN).unwrap_or(code);
    if expected != actual {
        return Err(Rejection::PersonMismatch {
            expected,
            actual: actual.to_owned(),
        });
    }

    Ok(())
}

/// Returns `true` if `code` is well formed and, when a person record is
/// supplied, was issued for that person.
///
/// Never fails: a malformed code, a mismatched person, and a person record
/// that cannot be encoded all produce `false`. Use [`check`] to find out
/// which.
///
/// # Example
///
/// ```
/// use dln::{PersonRecord, Sex, validate};
///
/// let morgan = PersonRecord::new("Morgan", "Sarah Meredyth", "1964-07-05", Sex::Female);
/// let gardner = PersonRecord::new("Gardner", "Charles", "1969-05-10", Sex::Male);
///
/// assert!(validate("MORGA657054SM9IJ", None));
/// assert!(validate("MORGA657054SM9IJ", Some(&morgan)));
/// assert!(!validate("MORGA657054SM9IJ", Some(&gardner)));
/// ```
#[must_use]
pub fn validate(code: &str, person: Option<&PersonRecord>) -> bool {
    match check(code, person) {
        Ok(()) => true,
        Err(rejection) => {
            debug!(reason = %rejection, "licence number rejected");
            false
        }
    }
}
