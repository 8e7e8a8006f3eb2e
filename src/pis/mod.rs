//! PIS/PASEP — the social insurance enrollment number.
//!
//! PIS (Programa de Integração Social) and PASEP (Programa de Formação
//! do Patrimônio do Servidor Público) share one eleven-digit format: a
//! ten-digit base and a single modulo-11 check digit. Displayed as
//! `DDD.DDDD.DDD-D`.
//!
//! Unlike CPF and CNPJ there is no repeated-digit guard, so
//! `"00000000000"` passes validation.
//!
//! # Example
//!
//! ```rust
//! use brdoc::pis::*;
//!
//! assert!(validate_pis("120.5627.500-9"));
//! assert!(!validate_pis("12056275004"));
//! assert_eq!(format_pis("12056275009").unwrap(), "120.5627.500-9");
//! ```

mod number;
mod validate;

pub use number::Pis;
pub use validate::{PIS_BASE_LEN, PIS_LEN, check_pis, format_pis, pis_check_digit, validate_pis};
