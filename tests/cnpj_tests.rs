#![cfg(feature = "cnpj")]

use brdoc::DocumentError;
use brdoc::cnpj::*;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn known_valid_sample() {
    assert!(validate_cnpj("11222333000181"));
}

#[test]
fn conventional_mask_accepted() {
    assert!(validate_cnpj("11.222.333/0001-81"));
}

#[test]
fn own_mask_accepted() {
    assert!(validate_cnpj("11.222.333-0001/81"));
}

#[test]
fn other_valid_numbers() {
    assert!(validate_cnpj("33000167000101"));
    assert!(validate_cnpj("04.252.011/0001-10"));
}

#[test]
fn wrong_first_check_digit() {
    assert_eq!(
        check_cnpj("11222333000171"),
        Err(DocumentError::CheckDigitMismatch {
            position: 12,
            expected: 8,
            found: 7
        })
    );
}

#[test]
fn wrong_second_check_digit() {
    assert!(!validate_cnpj("11222333000182"));
}

#[test]
fn repeated_digit_rejected_for_every_digit() {
    for n in 0..10 {
        let input = n.to_string().repeat(14);
        assert_eq!(check_cnpj(&input), Err(DocumentError::RepeatedDigits));
    }
}

#[test]
fn empty_rejected() {
    assert!(!validate_cnpj(""));
}

#[test]
fn too_long_rejected() {
    assert_eq!(
        check_cnpj("112223330001810"),
        Err(DocumentError::TooLong { max: 14, found: 15 })
    );
}

#[test]
fn short_input_is_zero_padded() {
    assert!(validate_cnpj("191"));
    assert_eq!(format_cnpj("191").unwrap(), "00.000.000-0001/91");
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn format_sample() {
    assert_eq!(format_cnpj("11222333000181").unwrap(), "11.222.333-0001/81");
}

#[test]
fn format_rewrites_conventional_mask() {
    assert_eq!(
        format_cnpj("11.222.333/0001-81").unwrap(),
        "11.222.333-0001/81"
    );
}

#[test]
fn format_empty_fails() {
    assert_eq!(format_cnpj(" "), Err(DocumentError::EmptyInput));
}

// ---------------------------------------------------------------------------
// Typed number
// ---------------------------------------------------------------------------

#[test]
fn root_and_branch() {
    let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
    assert_eq!(cnpj.root(), "11222333");
    assert_eq!(cnpj.branch(), "0001");
    assert!(cnpj.is_head_office());
}

#[test]
fn branch_office() {
    let [d1, d2] = cnpj_check_digits("112223330002").unwrap();
    let cnpj = Cnpj::parse(&format!("112223330002{d1}{d2}")).unwrap();
    assert_eq!(cnpj.branch(), "0002");
    assert!(!cnpj.is_head_office());
    assert_eq!(cnpj.to_string(), "11.222.333-0002/62");
}
