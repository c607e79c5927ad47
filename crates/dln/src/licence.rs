//! Validated licence-number values and section decoding.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::birth_sex::FEMALE_MONTH_OFFSET;
use crate::error::LicenceNumberError;
use crate::generator::PREFIX_LEN;
use crate::person::{PersonRecord, Sex};
use crate::validation::{LICENCE_NUMBER_LEN, validate, validate_format};

const SURNAME: Range<usize> = 0..5;
const BIRTH_SEX: Range<usize> = 5..11;
const DECADE: Range<usize> = 5..6;
const MONTH: Range<usize> = 6..8;
const DAY: Range<usize> = 8..10;
const YEAR: Range<usize> = 10..11;
const INITIALS: Range<usize> = 11..13;
const SUFFIX: Range<usize> = PREFIX_LEN..LICENCE_NUMBER_LEN;

/// A complete licence number that satisfies the grammar.
///
/// ## Invariants
/// - exactly 16 ASCII characters
/// - matches [`validate_format`]
///
/// The birth details can be read back out of a number, though only the last
/// two digits of the year survive encoding.
///
/// # Example
///
/// ```
/// use dln::{LicenceNumber, Sex};
///
/// let number: LicenceNumber = "MORGA657054SM9IJ".parse().expect("well formed");
///
/// assert_eq!(number.surname(), "MORGA");
/// assert_eq!(number.sex(), Sex::Female);
/// assert_eq!(number.birth_month(), 7);
/// assert_eq!(number.birth_day(), 5);
/// assert_eq!(number.birth_year_digits(), 64);
/// assert_eq!(number.initials(), "SM");
/// assert_eq!(number.suffix(), "9IJ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicenceNumber(String);

impl LicenceNumber {
    /// Validate and construct a [`LicenceNumber`] from owned input.
    ///
    /// # Errors
    ///
    /// Returns [`LicenceNumberError::Malformed`] if the text does not satisfy
    /// the licence-number grammar.
    pub fn new(code: impl Into<String>) -> Result<Self, LicenceNumberError> {
        Self::from_owned(code.into())
    }

    fn from_owned(code: String) -> Result<Self, LicenceNumberError> {
        if validate_format(&code) {
            Ok(Self(code))
        } else {
            Err(LicenceNumberError::Malformed { value: code })
        }
    }

    /// Returns the licence number as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn section(&self, range: Range<usize>) -> &str {
        self.0.get(range).unwrap_or_default()
    }

    fn number(&self, range: Range<usize>) -> u8 {
        self.section(range).parse().unwrap_or_default()
    }

    /// Returns the 13 characters derived from the person record.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.section(0..PREFIX_LEN)
    }

    /// Returns section A, including any `9` padding.
    #[must_use]
    pub fn surname_field(&self) -> &str {
        self.section(SURNAME)
    }

    /// Returns the surname letters with padding removed.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.surname_field().trim_end_matches('9')
    }

    /// Returns section B, the six birth-date and sex digits.
    #[must_use]
    pub fn birth_sex_field(&self) -> &str {
        self.section(BIRTH_SEX)
    }

    /// Returns section C, including any `9` padding.
    #[must_use]
    pub fn initials_field(&self) -> &str {
        self.section(INITIALS)
    }

    /// Returns the initials with padding removed.
    #[must_use]
    pub fn initials(&self) -> &str {
        self.initials_field().trim_end_matches('9')
    }

    /// Returns the three trailing characters not derived from the person.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.section(SUFFIX)
    }

    /// Returns the sex carried by the month code.
    #[must_use]
    pub fn sex(&self) -> Sex {
        if u16::from(self.number(MONTH)) > FEMALE_MONTH_OFFSET {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    /// Returns the birth month, 1 to 12, with the sex offset removed.
    #[must_use]
    pub fn birth_month(&self) -> u8 {
        let code = u16::from(self.number(MONTH));
        let month = code.checked_sub(FEMALE_MONTH_OFFSET).filter(|m| *m > 0).unwrap_or(code);
        u8::try_from(month).unwrap_or_default()
    }

    /// Returns the day of the month.
    #[must_use]
    pub fn birth_day(&self) -> u8 {
        self.number(DAY)
    }

    /// Returns the tens digit of the birth year.
    #[must_use]
    pub fn decade_digit(&self) -> u8 {
        self.number(DECADE)
    }

    /// Returns the units digit of the birth year.
    #[must_use]
    pub fn year_digit(&self) -> u8 {
        self.number(YEAR)
    }

    /// Returns the last two digits of the birth year.
    #[must_use]
    pub fn birth_year_digits(&self) -> u8 {
        self.decade_digit() * 10 + self.year_digit()
    }

    /// Returns `true` if this number was issued for `person`.
    ///
    /// A record that cannot be encoded never matches.
    #[must_use]
    pub fn matches(&self, person: &PersonRecord) -> bool {
        validate(self.as_str(), Some(person))
    }
}

impl AsRef<str> for LicenceNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LicenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LicenceNumber> for String {
    fn from(value: LicenceNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for LicenceNumber {
    type Error = LicenceNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl FromStr for LicenceNumber {
    type Err = LicenceNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_owned(s.to_owned())
    }
}
