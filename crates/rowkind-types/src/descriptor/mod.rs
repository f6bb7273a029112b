//! Per-kind type descriptors.
//!
//! A descriptor is everything the registry knows about one internal kind:
//! which external type presents it, which external types it claims, and how
//! values move across the boundary in each direction.
//!
//! ```text
//! SqlValue ──decode──▶ Value      (query execution → storage)
//! Value    ──encode──▶ SqlValue   (storage → query execution)
//! ```
//!
//! Descriptors never see `NULL`: the registry short-circuits null values in
//! both directions before dispatching.

mod boolean;
mod datetime;
mod float;
mod integer;
mod string;
mod unsigned;
mod uuid_text;

pub use boolean::BoolDescriptor;
pub use datetime::{DateTimeDescriptor, parse_datetime};
pub use float::FloatDescriptor;
pub use integer::IntDescriptor;
pub use string::StringDescriptor;
pub use unsigned::UintDescriptor;
pub use uuid_text::UuidDescriptor;

use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};

/// Conversion contract for one internal kind.
pub trait TypeDescriptor: Send + Sync {
    /// The internal kind this descriptor converts.
    fn kind(&self) -> ValueKind;

    /// External type used to present this kind when nothing more specific is
    /// known.
    fn canonical_type(&self) -> SqlType;

    /// External types this descriptor claims exactly.
    ///
    /// May be empty, in which case the kind is reachable only through the
    /// category fallback.
    fn accepted_types(&self) -> &'static [SqlType];

    /// Textual rendering of the canonical type.
    fn display_string(&self) -> &'static str;

    /// Storage value → query value.
    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError>;

    /// Query value → storage value.
    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError>;
}

/// The full descriptor list used by [`TypeRegistry::standard`](crate::TypeRegistry::standard).
pub fn standard_descriptors() -> Vec<Box<dyn TypeDescriptor>> {
    vec![
        Box::new(BoolDescriptor),
        Box::new(IntDescriptor),
        Box::new(UintDescriptor),
        Box::new(FloatDescriptor),
        Box::new(StringDescriptor),
        Box::new(DateTimeDescriptor),
        Box::new(UuidDescriptor),
    ]
}

/// Error for an internal value handed to a descriptor of another kind.
fn mismatched(kind: ValueKind, value: &Value) -> ConversionError {
    ConversionError::UnsupportedValue {
        kind,
        shape: value.kind().as_str(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn standard_list_covers_each_kind_once() {
        let kinds: Vec<ValueKind> = standard_descriptors().iter().map(|d| d.kind()).collect();
        let unique: BTreeSet<ValueKind> = kinds.iter().copied().collect();
        assert_eq!(kinds.len(), unique.len());
        assert!(unique.contains(&ValueKind::Bool));
        assert!(!unique.contains(&ValueKind::Null));
        assert!(!unique.contains(&ValueKind::InlineBlob));
    }

    #[test]
    fn display_string_matches_canonical_type() {
        for descriptor in standard_descriptors() {
            assert_eq!(
                descriptor.display_string(),
                descriptor.canonical_type().to_string(),
                "display drift for {}",
                descriptor.kind()
            );
        }
    }

    #[test]
    fn encode_rejects_foreign_kind() {
        let err = IntDescriptor.encode(&Value::Bool(true)).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnsupportedValue {
                kind: ValueKind::Int,
                shape: "bool",
                ..
            }
        ));
    }
}
