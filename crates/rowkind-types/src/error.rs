//! Error types for registry construction and value conversion.

use crate::kind::ValueKind;
use crate::sql_type::SqlType;

/// Errors raised while building a [`TypeRegistry`](crate::TypeRegistry).
///
/// These indicate an inconsistent descriptor list. The host must not continue
/// with a registry that failed to build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two descriptors claim the same external type.
    #[error("{sql_type} is claimed by both {claimed_by} and {rejected}")]
    DuplicateTypeClaim {
        sql_type: SqlType,
        claimed_by: ValueKind,
        rejected: ValueKind,
    },

    /// Two descriptors are registered for the same kind.
    #[error("more than one descriptor registered for kind {0}")]
    DuplicateKind(ValueKind),
}

/// Errors raised by lookups and value conversion at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// No descriptor or category mapping exists for the external type.
    #[error("unknown type: {0}")]
    UnknownType(SqlType),

    /// No descriptor is registered for the kind.
    #[error("no conversion registered for kind {0}")]
    UnsupportedKind(ValueKind),

    /// The value's representation has no conversion rule into the kind.
    #[error("cannot convert {shape} value {value:?} to {kind}")]
    UnsupportedValue {
        kind: ValueKind,
        shape: &'static str,
        value: String,
    },

    /// The value does not fit the target kind's numeric range.
    #[error("value {value} is out of range for {kind}")]
    RangeOverflow { kind: ValueKind, value: String },

    /// Text input does not follow the kind's grammar.
    #[error("cannot parse {input:?} as {kind}: {reason}")]
    ParseError {
        kind: ValueKind,
        input: String,
        reason: String,
    },
}

impl ConversionError {
    pub(crate) fn unsupported_value(kind: ValueKind, value: &crate::value::SqlValue) -> Self {
        Self::UnsupportedValue {
            kind,
            shape: value.shape(),
            value: value.to_string(),
        }
    }

    pub(crate) fn parse(kind: ValueKind, input: &str, reason: impl std::fmt::Display) -> Self {
        Self::ParseError {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
