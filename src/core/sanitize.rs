//! Digit normalization shared by every document.

use super::error::DocumentError;

/// Normalize a raw document number to exactly `len` ASCII digits.
///
/// Fails with [`DocumentError::EmptyInput`] when the trimmed input is
/// empty, and with [`DocumentError::TooLong`] when more than `len`
/// digits remain after stripping everything that is not `0-9`.
///
/// Short input is left-padded with zeros, so `"123"` becomes
/// `"00000000123"` for an 11-digit document. Input without any digit
/// (e.g. `"abc"`) normalizes to all zeros.
pub fn normalize(input: &str, len: usize) -> Result<String, DocumentError> {
    if input.trim().is_empty() {
        return Err(DocumentError::EmptyInput);
    }

    let digits = strip_punctuation(input);
    if digits.len() > len {
        return Err(DocumentError::TooLong {
            max: len,
            found: digits.len(),
        });
    }

    Ok(format!("{digits:0>len$}"))
}

/// Keep only the ASCII digits of `input`.
///
/// ```rust
/// assert_eq!(brdoc::strip_punctuation("111.444.777-35"), "11144477735");
/// ```
pub fn strip_punctuation(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
