//! Section C: the initials field.

use crate::normalize::{normalize, pad_field};

/// Width of the initials field.
pub const INITIALS_LEN: usize = 2;

/// Encodes given names into the 2-character initials field.
///
/// Each whitespace-separated name contributes the first letter that survives
/// normalization; the first two initials are kept and the field is
/// right-padded with `9`.
///
/// # Examples
///
/// ```
/// use dln::encode_initials;
///
/// assert_eq!(encode_initials("Sarah Meredyth"), "SM");
/// assert_eq!(encode_initials("Charles"), "C9");
/// assert_eq!(encode_initials(""), "99");
/// ```
#[must_use]
pub fn encode_initials(personal_name: &str) -> String {
    let initials: String = personal_name
        .split_whitespace()
        .filter_map(|name| normalize(name).chars().next())
        .take(INITIALS_LEN)
        .collect();
    pad_field(&initials, INITIALS_LEN)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Sarah Meredyth", "SM")]
    #[case("Charles", "C9")]
    #[case("john ronald reuel", "JR")]
    #[case("  Anne   Marie  ", "AM")]
    #[case("Jean\tLuc", "JL")]
    #[case("'Ali Khan", "AK")]
    #[case("3 Pip", "P9")]
    #[case("", "99")]
    #[case("- 42", "99")]
    fn encodes_personal_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode_initials(input), expected);
    }
}
