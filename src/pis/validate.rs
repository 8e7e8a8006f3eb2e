use crate::core::DocumentError;
use crate::core::check_digit::{cycling_weights, digits, expect_digit, mod11, weighted_sum};
use crate::core::normalize;

use super::number::Pis;

/// Digits in a normalized PIS/PASEP.
pub const PIS_LEN: usize = 11;

/// Digits in a PIS/PASEP base, before the check digit.
pub const PIS_BASE_LEN: usize = 10;

/// Format a PIS/PASEP as `DDD.DDDD.DDD-D`.
///
/// The input is normalized first. The check digit is not verified.
pub fn format_pis(input: &str) -> Result<String, DocumentError> {
    let pis = normalize(input, PIS_LEN)?;
    Ok(mask(&pis))
}

/// Whether `input` is a valid PIS/PASEP.
pub fn validate_pis(input: &str) -> bool {
    check_pis(input).is_ok()
}

/// Validate a PIS/PASEP, returning the typed number or the rule it breaks.
pub fn check_pis(input: &str) -> Result<Pis, DocumentError> {
    verify(input)
        .map(Pis::from_normalized)
        .inspect_err(|err| tracing::trace!(kind = "pis", reason = %err, "document rejected"))
}

/// Compute the check digit for a ten-digit PIS/PASEP base.
pub fn pis_check_digit(base: &str) -> Result<u8, DocumentError> {
    let base = normalize(base, PIS_BASE_LEN)?;
    Ok(check_digit(&digits(&base)))
}

fn verify(input: &str) -> Result<String, DocumentError> {
    let pis = normalize(input, PIS_LEN)?;
    let d = digits(&pis);

    expect_digit(10, check_digit(&d), d[10])?;

    Ok(pis)
}

// Weights 3,2,9,8,...,2 over the ten base digits; 10 and 11 map to 0.
fn check_digit(d: &[u8]) -> u8 {
    mod11(weighted_sum(&d[..10], cycling_weights(3)))
}

/// Apply the 3-4-3-1 mask to a normalized PIS/PASEP.
pub(super) fn mask(pis: &str) -> String {
    format!("{}.{}.{}-{}", &pis[..3], &pis[3..7], &pis[7..10], &pis[10..])
}
