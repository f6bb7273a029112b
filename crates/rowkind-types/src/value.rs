//! Values on both sides of the storage boundary.
//!
//! - [`Value`] is what the storage layer persists, one variant per kind.
//! - [`SqlValue`] is what query execution hands over: each integer and float
//!   width is its own variant, so decoders can branch on the exact
//!   representation instead of probing an opaque value.

use crate::kind::ValueKind;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Text layout used when an instant is rendered for the query surface.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A storage-level value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Uuid(Uuid),
    InlineBlob(Vec<u8>),
    DateTime(DateTime<Utc>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Uint(_) => ValueKind::Uint,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::InlineBlob(_) => ValueKind::InlineBlob,
            Value::DateTime(_) => ValueKind::DateTime,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{}", v.hyphenated()),
            Value::InlineBlob(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::DateTime(v) => write!(f, "{}", v.format(DATETIME_DISPLAY_FORMAT)),
        }
    }
}

/// A value as represented by query execution.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Short name of the representation, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int8(_) => "int8",
            SqlValue::Int16(_) => "int16",
            SqlValue::Int32(_) => "int32",
            SqlValue::Int64(_) => "int64",
            SqlValue::Uint8(_) => "uint8",
            SqlValue::Uint16(_) => "uint16",
            SqlValue::Uint32(_) => "uint32",
            SqlValue::Uint64(_) => "uint64",
            SqlValue::Float32(_) => "float32",
            SqlValue::Float64(_) => "float64",
            SqlValue::Text(_) => "text",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }

    /// Signed integer payload widened to 64 bits, if this is a signed width.
    pub fn as_signed(&self) -> Option<i64> {
        match *self {
            SqlValue::Int8(v) => Some(i64::from(v)),
            SqlValue::Int16(v) => Some(i64::from(v)),
            SqlValue::Int32(v) => Some(i64::from(v)),
            SqlValue::Int64(v) => Some(v),
            _ => None,
        }
    }

    /// Unsigned integer payload widened to 64 bits, if this is an unsigned width.
    pub fn as_unsigned(&self) -> Option<u64> {
        match *self {
            SqlValue::Uint8(v) => Some(u64::from(v)),
            SqlValue::Uint16(v) => Some(u64::from(v)),
            SqlValue::Uint32(v) => Some(u64::from(v)),
            SqlValue::Uint64(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Bool(v) => write!(f, "{v}"),
            SqlValue::Int8(v) => write!(f, "{v}"),
            SqlValue::Int16(v) => write!(f, "{v}"),
            SqlValue::Int32(v) => write!(f, "{v}"),
            SqlValue::Int64(v) => write!(f, "{v}"),
            SqlValue::Uint8(v) => write!(f, "{v}"),
            SqlValue::Uint16(v) => write!(f, "{v}"),
            SqlValue::Uint32(v) => write!(f, "{v}"),
            SqlValue::Uint64(v) => write!(f, "{v}"),
            SqlValue::Float32(v) => write!(f, "{v}"),
            SqlValue::Float64(v) => write!(f, "{v}"),
            SqlValue::Text(v) => write!(f, "{v}"),
            SqlValue::Timestamp(v) => write!(f, "{}", v.format(DATETIME_DISPLAY_FORMAT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_widen() {
        assert_eq!(SqlValue::Int8(-3).as_signed(), Some(-3));
        assert_eq!(SqlValue::Uint16(7).as_unsigned(), Some(7));
        assert_eq!(SqlValue::Uint16(7).as_signed(), None);
        assert_eq!(SqlValue::Float32(1.0).as_unsigned(), None);
    }

    #[test]
    fn value_kind_follows_variant() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::InlineBlob(vec![1]).kind(), ValueKind::InlineBlob);
        assert!(Value::Null.is_null());
        assert!(!Value::Int(0).is_null());
    }

    #[test]
    fn blob_renders_as_hex() {
        assert_eq!(Value::InlineBlob(vec![0x0a, 0xff]).to_string(), "0x0aff");
    }
}
