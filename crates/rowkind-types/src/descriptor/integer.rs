use super::{TypeDescriptor, mismatched};
use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};

const ACCEPTED: &[SqlType] = &[
    SqlType::Int8,
    SqlType::Int16,
    SqlType::Int24,
    SqlType::Int32,
    SqlType::Int64,
];

/// Signed 64-bit integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntDescriptor;

impl TypeDescriptor for IntDescriptor {
    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn canonical_type(&self) -> SqlType {
        SqlType::Int64
    }

    fn accepted_types(&self) -> &'static [SqlType] {
        ACCEPTED
    }

    fn display_string(&self) -> &'static str {
        "BIGINT"
    }

    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        match value {
            Value::Int(v) => Ok(SqlValue::Int64(*v)),
            other => Err(mismatched(ValueKind::Int, other)),
        }
    }

    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError> {
        if let Some(v) = value.as_signed() {
            return Ok(Value::Int(v));
        }
        if let Some(v) = value.as_unsigned() {
            return i64::try_from(v)
                .map(Value::Int)
                .map_err(|_| ConversionError::RangeOverflow {
                    kind: ValueKind::Int,
                    value: v.to_string(),
                });
        }
        Err(ConversionError::unsupported_value(ValueKind::Int, value))
    }
}
