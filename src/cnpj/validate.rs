use crate::core::DocumentError;
use crate::core::check_digit::{
    cycling_weights, digits, expect_digit, is_repeated, mod11, weighted_sum,
};
use crate::core::normalize;

use super::number::Cnpj;

/// Digits in a normalized CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Digits in a CNPJ base, before the check digits.
pub const CNPJ_BASE_LEN: usize = 12;

/// Format a CNPJ as `DD.DDD.DDD-DDDD/DD`.
///
/// The input is normalized first. Check digits are not verified.
pub fn format_cnpj(input: &str) -> Result<String, DocumentError> {
    let cnpj = normalize(input, CNPJ_LEN)?;
    Ok(mask(&cnpj))
}

/// Whether `input` is a valid CNPJ.
pub fn validate_cnpj(input: &str) -> bool {
    check_cnpj(input).is_ok()
}

/// Validate a CNPJ, returning the typed number or the first rule it breaks.
///
/// Rules, in order: normalization, repeated-digit guard, first check
/// digit, second check digit.
pub fn check_cnpj(input: &str) -> Result<Cnpj, DocumentError> {
    verify(input)
        .map(Cnpj::from_normalized)
        .inspect_err(|err| tracing::trace!(kind = "cnpj", reason = %err, "document rejected"))
}

/// Compute both check digits for a twelve-digit CNPJ base.
pub fn cnpj_check_digits(base: &str) -> Result<[u8; 2], DocumentError> {
    let base = normalize(base, CNPJ_BASE_LEN)?;
    let mut d = digits(&base);
    let first = first_digit(&d);
    d.push(first);
    Ok([first, second_digit(&d)])
}

fn verify(input: &str) -> Result<String, DocumentError> {
    let cnpj = normalize(input, CNPJ_LEN)?;
    let d = digits(&cnpj);

    if is_repeated(&d) {
        return Err(DocumentError::RepeatedDigits);
    }

    expect_digit(12, first_digit(&d), d[12])?;
    expect_digit(13, second_digit(&d), d[13])?;

    Ok(cnpj)
}

// Weights 5,4,3,2,9,...,2 over the twelve base digits.
fn first_digit(d: &[u8]) -> u8 {
    mod11(weighted_sum(&d[..12], cycling_weights(5)))
}

// Weights 6,5,4,3,2,9,...,2 over the base plus the first check digit.
fn second_digit(d: &[u8]) -> u8 {
    mod11(weighted_sum(&d[..13], cycling_weights(6)))
}

/// Apply the 2-3-3-4-2 mask to a normalized CNPJ.
pub(super) fn mask(cnpj: &str) -> String {
    format!(
        "{}.{}.{}-{}/{}",
        &cnpj[..2],
        &cnpj[2..5],
        &cnpj[5..8],
        &cnpj[8..12],
        &cnpj[12..]
    )
}
