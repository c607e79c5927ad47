//! Name normalization shared by the section encoders.

/// Upper-cases `text` and strips everything that is not an ASCII letter.
///
/// Case folding is ASCII-only: accented and other non-ASCII characters are
/// dropped rather than transliterated, so `"Zoë"` becomes `"ZO"`.
///
/// # Examples
///
/// ```
/// use dln::normalize;
///
/// assert_eq!(normalize("O'Brien-Smith"), "OBRIENSMITH");
/// assert_eq!(normalize("  de la Cruz 3rd "), "DELACRUZRD");
/// assert_eq!(normalize("123"), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Right-pads `field` with `9` up to `width` characters, truncating first.
pub(crate) fn pad_field(field: &str, width: usize) -> String {
    let mut padded: String = field.chars().take(width).collect();
    let missing = width.saturating_sub(padded.chars().count());
    padded.extend(std::iter::repeat_n('9', missing));
    padded
}
