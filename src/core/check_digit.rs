//! Modulo-11 check-digit arithmetic.
//!
//! All three documents use the same scheme: a weighted sum of the base
//! digits, reduced modulo 11. They differ only in the weight schedule.

use std::iter;

use super::error::DocumentError;

/// Decode a normalized digit string into digit values.
///
/// The input must contain only ASCII digits.
pub(crate) fn digits(normalized: &str) -> Vec<u8> {
    normalized.bytes().map(|b| b - b'0').collect()
}

/// Weights `start, start - 1, ..., 2` (CPF).
pub(crate) fn descending_weights(start: u32) -> impl Iterator<Item = u32> {
    (2..=start).rev()
}

/// Weights starting at `start` and decrementing, wrapping to 9 instead
/// of reaching 1 (CNPJ, PIS).
///
/// `cycling_weights(5)` yields `5, 4, 3, 2, 9, 8, 7, ...`.
pub(crate) fn cycling_weights(start: u32) -> impl Iterator<Item = u32> {
    iter::successors(Some(start), |&w| Some(if w - 1 == 1 { 9 } else { w - 1 }))
}

/// Sum of `digit * weight` pairs. Stops at the shorter of the two.
pub(crate) fn weighted_sum(digits: &[u8], weights: impl Iterator<Item = u32>) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, w)| u32::from(d) * w)
        .sum()
}

/// Check digit for a weighted sum: 0 when `sum % 11 < 2`, else `11 - sum % 11`.
///
/// This is the same as computing `11 - sum % 11` and mapping 10 and 11 to 0.
pub(crate) fn mod11(sum: u32) -> u8 {
    let rem = sum % 11;
    if rem < 2 { 0 } else { (11 - rem) as u8 }
}

/// Compare the check digit found at `position` against the computed one.
pub(crate) fn expect_digit(position: usize, expected: u8, found: u8) -> Result<(), DocumentError> {
    if expected == found {
        Ok(())
    } else {
        Err(DocumentError::CheckDigitMismatch {
            position,
            expected,
            found,
        })
    }
}

/// Whether every digit equals the first.
pub(crate) fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}
