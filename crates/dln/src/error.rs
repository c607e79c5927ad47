//! Error types for the dln crate.
//!
//! This module defines semantic error enums for licence-number generation,
//! parsing, person-record loading, and validation rejections, following the
//! project's error handling conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while encoding a person record into a licence number.
///
/// Field checks run in a fixed order (`familyName`, `personalName`,
/// `birthDate`, `sex`), so the first problem found is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A required field is absent from the person record.
    #[error("person record is missing required field `{field}`")]
    MissingField {
        /// The camelCase key of the missing field.
        field: &'static str,
    },

    /// The sex field holds something other than `M` or `F`.
    #[error("sex must be 'M' or 'F', found '{value}'")]
    InvalidSex {
        /// The rejected value.
        value: String,
    },

    /// The birth date does not match `YYYY-MM-DD`.
    #[error("birth date must use the YYYY-MM-DD format, found '{value}'")]
    InvalidDateFormat {
        /// The rejected value.
        value: String,
    },
}

/// Errors raised when parsing a [`crate::LicenceNumber`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenceNumberError {
    /// The text does not satisfy the licence-number grammar.
    #[error("'{value}' is not a well-formed driving licence number")]
    Malformed {
        /// The rejected text.
        value: String,
    },
}

/// Errors that can occur when loading a person record from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record file could not be read.
    #[error("failed to read person record at '{path}': {message}")]
    IoError {
        /// Path to the record file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The record JSON is malformed.
    #[error("invalid person record JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },
}

/// Reasons a licence number is refused by [`crate::check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The code does not satisfy the licence-number grammar.
    #[error("code does not match the driving licence number format")]
    Malformed,

    /// The supplied person record could not be encoded.
    #[error("person record cannot be encoded: {0}")]
    InvalidPerson(#[source] EncodingError),

    /// The code was issued for somebody else.
    #[error("code prefix '{actual}' does not match '{expected}' derived from the person record")]
    PersonMismatch {
        /// Prefix generated from the person record.
        expected: String,
        /// Prefix found in the code.
        actual: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_error_missing_field_formats_correctly() {
        let err = EncodingError::MissingField {
            field: "birthDate",
        };
        assert_eq!(
            err.to_string(),
            "person record is missing required field `birthDate`"
        );
    }

    #[test]
    fn encoding_error_invalid_sex_formats_correctly() {
        let err = EncodingError::InvalidSex {
            value: "X".to_owned(),
        };
        assert_eq!(err.to_string(), "sex must be 'M' or 'F', found 'X'");
    }

    #[test]
    fn encoding_error_invalid_date_formats_correctly() {
        let err = EncodingError::InvalidDateFormat {
            value: "05/07/1964".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "birth date must use the YYYY-MM-DD format, found '05/07/1964'"
        );
    }

    #[test]
    fn licence_number_error_formats_correctly() {
        let err = LicenceNumberError::Malformed {
            value: "NOPE".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "'NOPE' is not a well-formed driving licence number"
        );
    }

    #[test]
    fn record_error_io_formats_correctly() {
        let err = RecordError::IoError {
            path: Utf8PathBuf::from("/tmp/person.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read person record at '/tmp/person.json': file not found"
        );
    }

    #[test]
    fn record_error_parse_formats_correctly() {
        let err = RecordError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid person record JSON: unexpected token");
    }

    #[test]
    fn rejection_mismatch_formats_correctly() {
        let err = Rejection::PersonMismatch {
            expected: "GARDN605109C9".to_owned(),
            actual: "MORGA657054SM".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "code prefix 'MORGA657054SM' does not match 'GARDN605109C9' derived from the person record"
        );
    }

    #[test]
    fn rejection_invalid_person_wraps_encoding_error() {
        let err = Rejection::InvalidPerson(EncodingError::MissingField { field: "sex" });
        assert_eq!(
            err.to_string(),
            "person record cannot be encoded: person record is missing required field `sex`"
        );
    }
}
