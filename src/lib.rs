//! # brdoc
//!
//! Validation and formatting of Brazilian document numbers:
//! CPF (individual taxpayer), CNPJ (legal entity) and PIS/PASEP
//! (social insurance).
//!
//! Every operation is a pure function over `&str`. Input is normalized
//! first: non-digits are stripped and short input is left-padded with
//! zeros to the document length.
//!
//! ## Quick Start
//!
//! ```rust
//! use brdoc::*;
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert_eq!(format_cpf("11144477735").unwrap(), "111.444.777-35");
//!
//! assert!(validate_cnpj("11222333000181"));
//! assert_eq!(format_cnpj("11222333000181").unwrap(), "11.222.333-0001/81");
//!
//! assert!(validate_pis("120.5627.500-9"));
//! assert_eq!(format_cpf(""), Err(DocumentError::EmptyInput));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Normalization, errors, check-digit arithmetic, [`DocumentKind`] |
//! | `cpf` (default) | CPF validation and formatting |
//! | `cnpj` (default) | CNPJ validation and formatting |
//! | `pis` (default) | PIS/PASEP validation and formatting |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "cpf")]
pub mod cpf;

#[cfg(feature = "cnpj")]
pub mod cnpj;

#[cfg(feature = "pis")]
pub mod pis;

// Re-export everything at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "cpf")]
pub use crate::cpf::*;

#[cfg(feature = "cnpj")]
pub use crate::cnpj::*;

#[cfg(feature = "pis")]
pub use crate::pis::*;
