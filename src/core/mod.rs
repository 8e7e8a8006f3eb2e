//! Shared building blocks for every document module.
//!
//! Normalization, the error type, modulo-11 check-digit arithmetic and
//! the [`DocumentKind`] dispatcher.

// Not every helper is reachable with a subset of document features.
#[cfg_attr(
    not(all(feature = "cpf", feature = "cnpj", feature = "pis")),
    allow(dead_code)
)]
pub(crate) mod check_digit;
mod error;
mod kind;
mod sanitize;
#[cfg_attr(
    not(any(feature = "cpf", feature = "cnpj", feature = "pis")),
    allow(unused_macros, unused_imports)
)]
pub(crate) mod number;

pub use error::*;
pub use kind::*;
pub use sanitize::*;
