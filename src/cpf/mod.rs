//! CPF (Cadastro de Pessoas Físicas) — the individual taxpayer number.
//!
//! Eleven digits: a nine-digit base followed by two modulo-11 check
//! digits. Displayed as `DDD.DDD.DDD-DD`.
//!
//! # Example
//!
//! ```rust
//! use brdoc::cpf::*;
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert!(!validate_cpf("111.111.111-11"));
//!
//! let cpf: Cpf = "11144477735".parse().unwrap();
//! assert_eq!(cpf.to_string(), "111.444.777-35");
//! assert_eq!(cpf_check_digits("111444777").unwrap(), [3, 5]);
//! ```

mod number;
mod validate;

pub use number::Cpf;
pub use validate::{
    CPF_BASE_LEN, CPF_LEN, check_cpf, cpf_check_digits, format_cpf, validate_cpf,
};
