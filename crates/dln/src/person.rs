//! Person records supplied by callers.
//!
//! A [`PersonRecord`] mirrors the caller's field map: every field may be
//! absent, and presence is only enforced when the record is encoded. This
//! keeps the "which key is missing" diagnosis in one place and lets records
//! be loaded from loosely-shaped JSON.

use std::fmt;
use std::str::FromStr;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::error::{EncodingError, RecordError};

const FAMILY_NAME: &str = "familyName";
const PERSONAL_NAME: &str = "personalName";
const BIRTH_DATE: &str = "birthDate";
const SEX: &str = "sex";

/// Sex as recorded on a licence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Encoded with the plain birth month.
    #[serde(rename = "M")]
    Male,
    /// Encoded with the birth month offset by 50.
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Returns the single-letter code used in person records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = EncodingError;

    /// Parses `M` or `F`. Matching is case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(EncodingError::InvalidSex {
                value: other.to_owned(),
            }),
        }
    }
}

/// Identity fields for one person, as supplied by the caller.
///
/// Serializes to and from the camelCase JSON shape
/// `{"familyName", "personalName", "birthDate", "sex"}`. Missing keys
/// deserialize to `None`.
///
/// # Example
///
/// ```
/// use dln::{PersonRecord, Sex};
///
/// let person = PersonRecord::new("Gardner", "Charles", "1969-05-10", Sex::Male);
/// assert_eq!(person.sex.as_deref(), Some("M"));
///
/// let partial = PersonRecord::from_json(r#"{"familyName": "Gardner"}"#).expect("valid JSON");
/// assert!(partial.birth_date.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Family name, in any case or spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// One or more whitespace-separated given names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_name: Option<String>,
    /// Birth date in `YYYY-MM-DD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// `M` or `F`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

impl PersonRecord {
    /// Builds a record with every field present.
    #[must_use]
    pub fn new(
        family_name: impl Into<String>,
        personal_name: impl Into<String>,
        birth_date: impl Into<String>,
        sex: Sex,
    ) -> Self {
        Self {
            family_name: Some(family_name.into()),
            personal_name: Some(personal_name.into()),
            birth_date: Some(birth_date.into()),
            sex: Some(sex.as_str().to_owned()),
        }
    }

    /// Parses a person record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ParseError`] if the JSON is malformed or a
    /// field holds something other than a string.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|e| RecordError::ParseError {
            message: e.to_string(),
        })
    }

    /// Loads a person record from a JSON file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, RecordError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| RecordError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Checks field presence and sex, in the fixed reporting order.
    pub(crate) fn fields(&self) -> Result<PersonFields<'_>, EncodingError> {
        let family_name = require(self.family_name.as_deref(), FAMILY_NAME)?;
        let personal_name = require(self.personal_name.as_deref(), PERSONAL_NAME)?;
        let birth_date = require(self.birth_date.as_deref(), BIRTH_DATE)?;
        let sex = require(self.sex.as_deref(), SEX)?.parse()?;

        Ok(PersonFields {
            family_name,
            personal_name,
            birth_date,
            sex,
        })
    }
}

/// Borrowed view of a record whose fields are all present.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PersonFields<'a> {
    pub(crate) family_name: &'a str,
    pub(crate) personal_name: &'a str,
    pub(crate) birth_date: &'a str,
    pub(crate) sex: Sex,
}

fn require<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, EncodingError> {
    value.ok_or(EncodingError::MissingField { field })
}
