use super::{TypeDescriptor, mismatched};
use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};

const ACCEPTED: &[SqlType] = &[
    SqlType::TinyText,
    SqlType::Text,
    SqlType::MediumText,
    SqlType::LongText,
];

/// Variable-length text. Numbers are stored as their decimal rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDescriptor;

impl TypeDescriptor for StringDescriptor {
    fn kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn canonical_type(&self) -> SqlType {
        SqlType::LongText
    }

    fn accepted_types(&self) -> &'static [SqlType] {
        ACCEPTED
    }

    fn display_string(&self) -> &'static str {
        "LONGTEXT"
    }

    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        match value {
            Value::String(s) => Ok(SqlValue::Text(s.clone())),
            other => Err(mismatched(ValueKind::String, other)),
        }
    }

    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError> {
        match value {
            SqlValue::Text(s) => Ok(Value::String(s.clone())),
            SqlValue::Bool(b) => Ok(Value::String(if *b { "1" } else { "0" }.to_string())),
            SqlValue::Float32(_) | SqlValue::Float64(_) => Ok(Value::String(value.to_string())),
            other if other.as_signed().is_some() || other.as_unsigned().is_some() => {
                Ok(Value::String(other.to_string()))
            }
            other => Err(ConversionError::unsupported_value(ValueKind::String, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_passes_through() {
        assert_eq!(
            StringDescriptor.decode(&SqlValue::Text("abc".into())).unwrap(),
            Value::String("abc".into())
        );
    }

    #[test]
    fn numbers_render_as_decimal_text() {
        assert_eq!(
            StringDescriptor.decode(&SqlValue::Int32(-12)).unwrap(),
            Value::String("-12".into())
        );
        assert_eq!(
            StringDescriptor.decode(&SqlValue::Float64(1.5)).unwrap(),
            Value::String("1.5".into())
        );
        assert_eq!(
            StringDescriptor.decode(&SqlValue::Bool(true)).unwrap(),
            Value::String("1".into())
        );
    }

    #[test]
    fn timestamps_are_unsupported() {
        let err = StringDescriptor
            .decode(&SqlValue::Timestamp(chrono::Utc::now()))
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedValue { .. }));
    }
}
