//! Section A: the family-name field.

use crate::normalize::{normalize, pad_field};

/// Width of the surname field.
pub const SURNAME_LEN: usize = 5;

/// Encodes a family name into the 5-character surname field.
///
/// The name is normalized, a leading `MAC` is shortened to `MC` so that
/// "MacDonald" and "McDonald" share a field, and the result is cut to five
/// characters and right-padded with `9`.
///
/// # Examples
///
/// ```
/// use dln::encode_surname;
///
/// assert_eq!(encode_surname("Morgan"), "MORGA");
/// assert_eq!(encode_surname("MacDonald"), "MCDON");
/// assert_eq!(encode_surname("Lee"), "LEE99");
/// assert_eq!(encode_surname("--"), "99999");
/// ```
#[must_use]
pub fn encode_surname(family_name: &str) -> String {
    let normalized = normalize(family_name);
    let folded = if normalized.starts_with("MAC") {
        normalized.replacen("MAC", "MC", 1)
    } else {
        normalized
    };
    pad_field(&folded, SURNAME_LEN)
}
