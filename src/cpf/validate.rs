use crate::core::DocumentError;
use crate::core::check_digit::{
    descending_weights, digits, expect_digit, is_repeated, mod11, weighted_sum,
};
use crate::core::normalize;

use super::number::Cpf;

/// Digits in a normalized CPF.
pub const CPF_LEN: usize = 11;

/// Digits in a CPF base, before the check digits.
pub const CPF_BASE_LEN: usize = 9;

/// Format a CPF as `DDD.DDD.DDD-DD`.
///
/// The input is normalized first, so punctuation is ignored and short
/// input is zero-padded. Check digits are not verified.
pub fn format_cpf(input: &str) -> Result<String, DocumentError> {
    let cpf = normalize(input, CPF_LEN)?;
    Ok(mask(&cpf))
}

/// Whether `input` is a valid CPF.
pub fn validate_cpf(input: &str) -> bool {
    check_cpf(input).is_ok()
}

/// Validate a CPF, returning the typed number or the first rule it breaks.
///
/// Rules, in order: normalization, repeated-digit guard, first check
/// digit, second check digit.
pub fn check_cpf(input: &str) -> Result<Cpf, DocumentError> {
    verify(input)
        .map(Cpf::from_normalized)
        .inspect_err(|err| tracing::trace!(kind = "cpf", reason = %err, "document rejected"))
}

/// Compute both check digits for a nine-digit CPF base.
///
/// ```rust
/// assert_eq!(brdoc::cpf_check_digits("111.444.777").unwrap(), [3, 5]);
/// ```
pub fn cpf_check_digits(base: &str) -> Result<[u8; 2], DocumentError> {
    let base = normalize(base, CPF_BASE_LEN)?;
    let mut d = digits(&base);
    let first = first_digit(&d);
    d.push(first);
    Ok([first, second_digit(&d)])
}

fn verify(input: &str) -> Result<String, DocumentError> {
    let cpf = normalize(input, CPF_LEN)?;
    let d = digits(&cpf);

    if is_repeated(&d) {
        return Err(DocumentError::RepeatedDigits);
    }

    expect_digit(9, first_digit(&d), d[9])?;
    expect_digit(10, second_digit(&d), d[10])?;

    Ok(cpf)
}

fn first_digit(d: &[u8]) -> u8 {
    mod11(weighted_sum(&d[..9], descending_weights(10)))
}

fn second_digit(d: &[u8]) -> u8 {
    mod11(weighted_sum(&d[..10], descending_weights(11)))
}

/// Apply the 3-3-3-2 mask to a normalized CPF.
pub(super) fn mask(cpf: &str) -> String {
    format!("{}.{}.{}-{}", &cpf[..3], &cpf[3..6], &cpf[6..9], &cpf[9..])
}
