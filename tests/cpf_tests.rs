#![cfg(feature = "cpf")]

use brdoc::DocumentError;
use brdoc::DocumentKind;
use brdoc::cpf::*;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn known_valid_sample() {
    assert!(validate_cpf("11144477735"));
}

#[test]
fn masked_input_accepted() {
    assert!(validate_cpf("111.444.777-35"));
    assert!(validate_cpf(" 111 444 777 35 "));
}

#[test]
fn other_valid_numbers() {
    assert!(validate_cpf("52998224725"));
    assert!(validate_cpf("12345678909"));
}

#[test]
fn wrong_check_digit_rejected() {
    assert!(!validate_cpf("11144477734"));
    assert!(!validate_cpf("11144477725"));
}

#[test]
fn repeated_digit_rejected() {
    assert!(!validate_cpf("11111111111"));
    assert_eq!(
        check_cpf("111.111.111-11"),
        Err(DocumentError::RepeatedDigits)
    );
}

#[test]
fn empty_rejected() {
    assert!(!validate_cpf(""));
    assert_eq!(check_cpf("   "), Err(DocumentError::EmptyInput));
}

#[test]
fn too_long_rejected() {
    assert!(!validate_cpf("111444777350"));
    assert_eq!(
        check_cpf("111444777350"),
        Err(DocumentError::TooLong { max: 11, found: 12 })
    );
}

#[test]
fn short_input_is_zero_padded() {
    // "123" -> "00000000123": wrong check digits, but still validated
    assert_eq!(
        check_cpf("123"),
        Err(DocumentError::CheckDigitMismatch {
            position: 9,
            expected: 9,
            found: 2
        })
    );
    // "191" -> "00000000191" carries valid check digits
    assert!(validate_cpf("191"));
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn format_sample() {
    assert_eq!(format_cpf("11144477735").unwrap(), "111.444.777-35");
}

#[test]
fn format_reformats_masked_input() {
    assert_eq!(format_cpf("111-444-777.35").unwrap(), "111.444.777-35");
}

#[test]
fn format_does_not_check_digits() {
    assert_eq!(format_cpf("11111111111").unwrap(), "111.111.111-11");
}

#[test]
fn format_pads_short_input() {
    assert_eq!(format_cpf("123").unwrap(), "000.000.001-23");
}

#[test]
fn format_empty_fails() {
    assert_eq!(format_cpf(""), Err(DocumentError::EmptyInput));
}

#[test]
fn format_too_long_fails() {
    assert!(matches!(
        format_cpf("1234567890123"),
        Err(DocumentError::TooLong { max: 11, found: 13 })
    ));
}

// ---------------------------------------------------------------------------
// Typed number
// ---------------------------------------------------------------------------

#[test]
fn parse_into_typed_number() {
    let cpf: Cpf = "111.444.777-35".parse().unwrap();
    assert_eq!(cpf.as_digits(), "11144477735");
    assert_eq!(cpf.formatted(), "111.444.777-35");
    assert_eq!(cpf.to_string(), "111.444.777-35");
    assert_eq!(Cpf::KIND, DocumentKind::Cpf);
}

#[test]
fn typed_number_equality_ignores_mask() {
    let a = Cpf::parse("11144477735").unwrap();
    let b = Cpf::parse("111.444.777-35").unwrap();
    assert_eq!(a, b);
}

#[test]
fn parse_invalid_fails() {
    assert!("11144477734".parse::<Cpf>().is_err());
}

#[test]
fn check_digits_complete_a_base() {
    let [d1, d2] = cpf_check_digits("529982247").unwrap();
    let full = format!("529982247{d1}{d2}");
    assert_eq!(full, "52998224725");
    assert!(validate_cpf(&full));
}
