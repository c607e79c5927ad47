//! UK driving-licence number encoding and validation.
//!
//! A driving-licence number (DLN) packs a person's family name, given names,
//! birth date, and sex into a fixed-width 16-character code followed by
//! caller-supplied check characters. This crate builds the 13-character
//! personal prefix from a [`PersonRecord`], validates complete codes against
//! the DLN grammar, and cross-checks a code against a specific person.
//!
//! # Layout
//!
//! | Positions | Section | Content |
//! |-----------|---------|---------|
//! | 0-4 | A | family name, right-padded with `9` |
//! | 5-10 | B | decade digit, month (+50 for women), day, year digit |
//! | 11-12 | C | initials, right-padded with `9` |
//! | 13-15 | suffix | caller-supplied |
//!
//! # Example
//!
//! ```
//! use dln::{PersonRecord, Sex, generate, validate};
//!
//! let person = PersonRecord::new("Morgan", "Sarah Meredyth", "1964-07-05", Sex::Female);
//!
//! let code = generate(&person, "9IJ").expect("complete record");
//! assert_eq!(code, "MORGA657054SM9IJ");
//! assert!(validate(&code, Some(&person)));
//! ```

mod birth_sex;
pub mod cli;
mod error;
mod generator;
mod initials;
mod licence;
mod normalize;
mod person;
mod settings;
mod surname;
mod validation;

pub use birth_sex::{FEMALE_MONTH_OFFSET, encode_birth_sex};
pub use error::{EncodingError, LicenceNumberError, RecordError, Rejection};
pub use generator::{PREFIX_LEN, generate};
pub use initials::{INITIALS_LEN, encode_initials};
pub use licence::LicenceNumber;
pub use normalize::normalize;
pub use person::{PersonRecord, Sex};
pub use settings::DlnSettings;
pub use surname::{SURNAME_LEN, encode_surname};
pub use validation::{LICENCE_NUMBER_LEN, SUFFIX_LEN, check, validate, validate_format};
