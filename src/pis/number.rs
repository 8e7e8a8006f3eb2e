use crate::core::DocumentKind;
use crate::core::number::document_number;

use super::validate::{check_pis, mask};

document_number! {
    /// A validated PIS/PASEP number.
    ///
    /// Displays as `DDD.DDDD.DDD-D` and serializes as its 11 bare digits.
    Pis, kind = DocumentKind::Pis, check = check_pis, mask = mask
}
