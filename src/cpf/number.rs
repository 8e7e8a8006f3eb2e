use crate::core::DocumentKind;
use crate::core::number::document_number;

use super::validate::{check_cpf, mask};

document_number! {
    /// A validated CPF number.
    ///
    /// Displays as `DDD.DDD.DDD-DD` and serializes as its 11 bare digits.
    Cpf, kind = DocumentKind::Cpf, check = check_cpf, mask = mask
}
