//! CNPJ (Cadastro Nacional da Pessoa Jurídica) — the legal entity number.
//!
//! Fourteen digits: a twelve-digit base (root plus branch) followed by
//! two modulo-11 check digits.
//!
//! The display mask is `DD.DDD.DDD-DDDD/DD`. Existing callers depend on
//! this grouping, so it differs from the `DD.DDD.DDD/DDDD-DD` form used
//! by the Receita Federal.
//!
//! # Example
//!
//! ```rust
//! use brdoc::cnpj::*;
//!
//! assert!(validate_cnpj("11.222.333/0001-81"));
//! assert_eq!(format_cnpj("11222333000181").unwrap(), "11.222.333-0001/81");
//! assert_eq!(cnpj_check_digits("112223330001").unwrap(), [8, 1]);
//! ```

mod number;
mod validate;

pub use number::Cnpj;
pub use validate::{
    CNPJ_BASE_LEN, CNPJ_LEN, check_cnpj, cnpj_check_digits, format_cnpj, validate_cnpj,
};
