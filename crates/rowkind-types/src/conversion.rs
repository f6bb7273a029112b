//! Value conversion across the storage boundary.
//!
//! `NULL` never reaches a descriptor: it maps to `NULL` in both directions
//! regardless of kind, including kinds with no registered descriptor.

use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::registry::TypeRegistry;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};

impl TypeRegistry {
    /// Storage value → query value, dispatched on the value's own kind.
    pub fn value_to_external(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        if value.is_null() {
            return Ok(SqlValue::Null);
        }
        let kind = value.kind();
        self.descriptor(kind)
            .ok_or(ConversionError::UnsupportedKind(kind))?
            .encode(value)
    }

    /// Query value → storage value of `kind`.
    pub fn external_value_to_value(
        &self,
        value: &SqlValue,
        kind: ValueKind,
    ) -> Result<Value, ConversionError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        self.descriptor(kind)
            .ok_or(ConversionError::UnsupportedKind(kind))?
            .decode(value)
    }

    /// Decode a value bound for a column declared as `sql_type`.
    pub fn decode_as_type(
        &self,
        value: &SqlValue,
        sql_type: &SqlType,
    ) -> Result<Value, ConversionError> {
        let kind = self.external_type_to_kind(sql_type)?;
        self.external_value_to_value(value, kind)
    }
}
