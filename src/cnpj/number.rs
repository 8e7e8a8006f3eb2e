use crate::core::DocumentKind;
use crate::core::number::document_number;

use super::validate::{check_cnpj, mask};

document_number! {
    /// A validated CNPJ number.
    ///
    /// Displays as `DD.DDD.DDD-DDDD/DD` and serializes as its 14 bare digits.
    Cnpj, kind = DocumentKind::Cnpj, check = check_cnpj, mask = mask
}

impl Cnpj {
    /// The eight-digit root identifying the company.
    pub fn root(&self) -> &str {
        &self.as_digits()[..8]
    }

    /// The four-digit branch number (`0001` for the head office).
    pub fn branch(&self) -> &str {
        &self.as_digits()[8..12]
    }

    /// Whether this number identifies the head office (branch `0001`).
    pub fn is_head_office(&self) -> bool {
        self.branch() == "0001"
    }
}
