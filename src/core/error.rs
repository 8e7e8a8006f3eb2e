use thiserror::Error;

/// Errors that can occur while normalizing or checking a document number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Input is empty or whitespace-only.
    #[error("input is empty")]
    EmptyInput,

    /// More digits than the document holds, after stripping punctuation.
    #[error("too many digits: expected at most {max}, got {found}")]
    TooLong {
        /// Digit count of the document.
        max: usize,
        /// Digit count found in the input.
        found: usize,
    },

    /// Every digit is the same (e.g. "00000000000").
    #[error("all digits are identical")]
    RepeatedDigits,

    /// A check digit does not match the one computed from the preceding digits.
    #[error("check digit at position {position} mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Zero-based index of the check digit in the normalized number.
        position: usize,
        /// Digit computed from the base.
        expected: u8,
        /// Digit present in the input.
        found: u8,
    },
}

impl DocumentError {
    /// Whether the error was raised by normalization rather than by a
    /// document rule.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::TooLong { .. })
    }
}
