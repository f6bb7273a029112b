use super::{TypeDescriptor, mismatched};
use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};

const ACCEPTED: &[SqlType] = &[SqlType::Float32, SqlType::Float64];

/// 64-bit doubles. Every numeric input widens; nothing overflows.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatDescriptor;

impl TypeDescriptor for FloatDescriptor {
    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn canonical_type(&self) -> SqlType {
        SqlType::Float64
    }

    fn accepted_types(&self) -> &'static [SqlType] {
        ACCEPTED
    }

    fn display_string(&self) -> &'static str {
        "DOUBLE"
    }

    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        match value {
            Value::Float(v) => Ok(SqlValue::Float64(*v)),
            other => Err(mismatched(ValueKind::Float, other)),
        }
    }

    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError> {
        let widened = match value {
            SqlValue::Float32(v) => f64::from(*v),
            SqlValue::Float64(v) => *v,
            other => match (other.as_signed(), other.as_unsigned()) {
                (Some(v), _) => v as f64,
                (_, Some(v)) => v as f64,
                _ => return Err(ConversionError::unsupported_value(ValueKind::Float, other)),
            },
        };
        Ok(Value::Float(widened))
    }
}
