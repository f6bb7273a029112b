//! Internal value kinds.
//!
//! The storage layer represents every value as one of a closed set of kinds.
//! Nothing outside this enum can be persisted.

use serde::{Deserialize, Serialize};

/// Storage-level kind of a value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Absence of a value.
    Null,
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// Unsigned 64-bit integer.
    Uint,
    /// 64-bit IEEE double.
    Float,
    String,
    Uuid,
    /// Fixed-length raw bytes stored inline in the row.
    InlineBlob,
    /// UTC instant with microsecond precision.
    DateTime,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValueKind; 9] = [
        ValueKind::Null,
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::Uint,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::Uuid,
        ValueKind::InlineBlob,
        ValueKind::DateTime,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Uint => "uint",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Uuid => "uuid",
            ValueKind::InlineBlob => "inline_blob",
            ValueKind::DateTime => "datetime",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "bool" | "boolean" => Ok(Self::Bool),
            "int" | "integer" => Ok(Self::Int),
            "uint" | "unsigned" => Ok(Self::Uint),
            "float" | "double" => Ok(Self::Float),
            "string" | "text" => Ok(Self::String),
            "uuid" => Ok(Self::Uuid),
            "inline_blob" | "inlineblob" | "blob" => Ok(Self::InlineBlob),
            "datetime" | "timestamp" => Ok(Self::DateTime),
            _ => Err(format!("unknown value kind: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_parse_back() {
        for kind in ValueKind::ALL {
            assert_eq!(kind.as_str().parse::<ValueKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_aliases() {
        assert_eq!("BOOLEAN".parse::<ValueKind>().unwrap(), ValueKind::Bool);
        assert_eq!("timestamp".parse::<ValueKind>().unwrap(), ValueKind::DateTime);
        assert_eq!(" Text ".parse::<ValueKind>().unwrap(), ValueKind::String);
        assert!("decimal".parse::<ValueKind>().is_err());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let rendered = serde_json::to_string(&ValueKind::InlineBlob).unwrap();
        assert_eq!(rendered, "\"inline_blob\"");
    }
}
