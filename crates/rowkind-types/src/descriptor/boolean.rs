use super::{TypeDescriptor, mismatched};
use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};

const ACCEPTED: &[SqlType] = &[SqlType::Boolean];

/// Booleans. Numeric inputs are truthy when nonzero.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolDescriptor;

impl TypeDescriptor for BoolDescriptor {
    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn canonical_type(&self) -> SqlType {
        SqlType::Boolean
    }

    fn accepted_types(&self) -> &'static [SqlType] {
        ACCEPTED
    }

    fn display_string(&self) -> &'static str {
        "BOOLEAN"
    }

    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        match value {
            Value::Bool(b) => Ok(SqlValue::Bool(*b)),
            other => Err(mismatched(ValueKind::Bool, other)),
        }
    }

    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError> {
        let truth = match value {
            SqlValue::Bool(b) => *b,
            // f64::round rounds half away from zero.
            SqlValue::Float32(v) => f64::from(*v).round() != 0.0,
            SqlValue::Float64(v) => v.round() != 0.0,
            // Text content is not interpreted; every string decodes to false.
            SqlValue::Text(_) => false,
            other => match (other.as_signed(), other.as_unsigned()) {
                (Some(v), _) => v != 0,
                (_, Some(v)) => v != 0,
                _ => return Err(ConversionError::unsupported_value(ValueKind::Bool, other)),
            },
        };
        Ok(Value::Bool(truth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: SqlValue) -> Result<Value, ConversionError> {
        BoolDescriptor.decode(&value)
    }

    #[test]
    fn integers_are_nonzero_checks() {
        assert_eq!(decode(SqlValue::Int8(0)).unwrap(), Value::Bool(false));
        assert_eq!(decode(SqlValue::Int64(-4)).unwrap(), Value::Bool(true));
        assert_eq!(decode(SqlValue::Uint64(u64::MAX)).unwrap(), Value::Bool(true));
        assert_eq!(decode(SqlValue::Uint16(0)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn floats_round_half_away_from_zero() {
        assert_eq!(decode(SqlValue::Float64(2.5)).unwrap(), Value::Bool(true));
        assert_eq!(decode(SqlValue::Float64(2.4)).unwrap(), Value::Bool(true));
        assert_eq!(decode(SqlValue::Float64(0.4)).unwrap(), Value::Bool(false));
        assert_eq!(decode(SqlValue::Float64(-0.5)).unwrap(), Value::Bool(true));
        assert_eq!(decode(SqlValue::Float32(0.49)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn text_always_decodes_false() {
        assert_eq!(decode(SqlValue::Text("true".into())).unwrap(), Value::Bool(false));
        assert_eq!(decode(SqlValue::Text("1".into())).unwrap(), Value::Bool(false));
    }

    #[test]
    fn timestamps_are_rejected() {
        let err = decode(SqlValue::Timestamp(chrono::Utc::now())).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedValue { .. }));
    }
}
