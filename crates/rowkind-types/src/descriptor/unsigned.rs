use super::{TypeDescriptor, mismatched};
use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};

const ACCEPTED: &[SqlType] = &[
    SqlType::Uint8,
    SqlType::Uint16,
    SqlType::Uint24,
    SqlType::Uint32,
    SqlType::Uint64,
];

/// Unsigned 64-bit integers. Negative inputs overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct UintDescriptor;

impl TypeDescriptor for UintDescriptor {
    fn kind(&self) -> ValueKind {
        ValueKind::Uint
    }

    fn canonical_type(&self) -> SqlType {
        SqlType::Uint64
    }

    fn accepted_types(&self) -> &'static [SqlType] {
        ACCEPTED
    }

    fn display_string(&self) -> &'static str {
        "BIGINT UNSIGNED"
    }

    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        match value {
            Value::Uint(v) => Ok(SqlValue::Uint64(*v)),
            other => Err(mismatched(ValueKind::Uint, other)),
        }
    }

    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError> {
        if let Some(v) = value.as_unsigned() {
            return Ok(Value::Uint(v));
        }
        if let Some(v) = value.as_signed() {
            return u64::try_from(v)
                .map(Value::Uint)
                .map_err(|_| ConversionError::RangeOverflow {
                    kind: ValueKind::Uint,
                    value: v.to_string(),
                });
        }
        Err(ConversionError::unsupported_value(ValueKind::Uint, value))
    }
}
