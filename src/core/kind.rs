//! Runtime selection of a document type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::sanitize::normalize;

/// The Brazilian document types supported by this crate.
///
/// Variants are only present when the matching feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas — individual taxpayer, 11 digits.
    #[cfg(feature = "cpf")]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica — legal entity, 14 digits.
    #[cfg(feature = "cnpj")]
    Cnpj,
    /// PIS/PASEP social insurance enrollment, 11 digits.
    #[cfg(feature = "pis")]
    Pis,
}

impl DocumentKind {
    /// Number of digits of a normalized number, check digits included.
    pub fn digits(self) -> usize {
        match self {
            #[cfg(feature = "cpf")]
            Self::Cpf => crate::cpf::CPF_LEN,
            #[cfg(feature = "cnpj")]
            Self::Cnpj => crate::cnpj::CNPJ_LEN,
            #[cfg(feature = "pis")]
            Self::Pis => crate::pis::PIS_LEN,
        }
    }

    /// Short display name ("CPF", "CNPJ", "PIS/PASEP").
    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "cpf")]
            Self::Cpf => "CPF",
            #[cfg(feature = "cnpj")]
            Self::Cnpj => "CNPJ",
            #[cfg(feature = "pis")]
            Self::Pis => "PIS/PASEP",
        }
    }

    /// Normalize `input` to this document's length.
    pub fn normalize(self, input: &str) -> Result<String, DocumentError> {
        normalize(input, self.digits())
    }

    /// Format `input` with this document's mask.
    #[cfg_attr(
        not(any(feature = "cpf", feature = "cnpj", feature = "pis")),
        allow(unused_variables)
    )]
    pub fn format(self, input: &str) -> Result<String, DocumentError> {
        match self {
            #[cfg(feature = "cpf")]
            Self::Cpf => crate::cpf::format_cpf(input),
            #[cfg(feature = "cnpj")]
            Self::Cnpj => crate::cnpj::format_cnpj(input),
            #[cfg(feature = "pis")]
            Self::Pis => crate::pis::format_pis(input),
        }
    }

    /// Validate `input` as this document.
    pub fn validate(self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    /// Validate `input` as this document, reporting why it was rejected.
    ///
    /// On success, returns the normalized digits.
    #[cfg_attr(
        not(any(feature = "cpf", feature = "cnpj", feature = "pis")),
        allow(unused_variables)
    )]
    pub fn check(self, input: &str) -> Result<String, DocumentError> {
        match self {
            #[cfg(feature = "cpf")]
            Self::Cpf => crate::cpf::check_cpf(input).map(|n| n.into_digits()),
            #[cfg(feature = "cnpj")]
            Self::Cnpj => crate::cnpj::check_cnpj(input).map(|n| n.into_digits()),
            #[cfg(feature = "pis")]
            Self::Pis => crate::pis::check_pis(input).map(|n| n.into_digits()),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a document kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document kind '{0}'")]
pub struct UnknownDocumentKind(pub String);

impl FromStr for DocumentKind {
    type Err = UnknownDocumentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            #[cfg(feature = "cpf")]
            "cpf" => Ok(Self::Cpf),
            #[cfg(feature = "cnpj")]
            "cnpj" => Ok(Self::Cnpj),
            #[cfg(feature = "pis")]
            "pis" | "pasep" | "pis/pasep" => Ok(Self::Pis),
            _ => Err(UnknownDocumentKind(s.into())),
        }
    }
}
