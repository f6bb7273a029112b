use super::{TypeDescriptor, mismatched};
use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};
use uuid::Uuid;

const CANONICAL_LEN: usize = 36;

/// UUIDs presented as `CHAR(36)` text.
///
/// Claims no external type: a `CHAR(36)` column resolves to the string kind
/// through the category fallback, so this kind is only ever selected
/// explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidDescriptor;

impl TypeDescriptor for UuidDescriptor {
    fn kind(&self) -> ValueKind {
        ValueKind::Uuid
    }

    fn canonical_type(&self) -> SqlType {
        SqlType::Char {
            len: CANONICAL_LEN as u32,
        }
    }

    fn accepted_types(&self) -> &'static [SqlType] {
        &[]
    }

    fn display_string(&self) -> &'static str {
        "CHAR(36)"
    }

    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        match value {
            Value::Uuid(id) => Ok(SqlValue::Text(id.hyphenated().to_string())),
            other => Err(mismatched(ValueKind::Uuid, other)),
        }
    }

    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError> {
        let SqlValue::Text(text) = value else {
            return Err(ConversionError::unsupported_value(ValueKind::Uuid, value));
        };
        if text.len() != CANONICAL_LEN {
            return Err(ConversionError::parse(
                ValueKind::Uuid,
                text,
                format!("expected {CANONICAL_LEN} characters, got {}", text.len()),
            ));
        }
        Uuid::parse_str(text)
            .map(Value::Uuid)
            .map_err(|err| ConversionError::parse(ValueKind::Uuid, text, err))
    }
}
