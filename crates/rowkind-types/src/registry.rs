//! The type-conversion registry.
//!
//! Built once from a descriptor list and never mutated afterwards. Every
//! lookup is a read against the frozen tables, so a registry can be shared
//! across threads by reference or `Arc` without locking.

use crate::descriptor::{TypeDescriptor, standard_descriptors};
use crate::error::{ConversionError, RegistryError};
use crate::kind::ValueKind;
use crate::sql_type::{SqlType, SqlTypeCategory};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};
use std::collections::{BTreeMap, HashMap};

pub const TYPE_REGISTRY_KIND: &str = "rowkind.type_registry.v1";
pub const TYPE_REGISTRY_SCHEMA: u32 = 1;

/// Fallback kinds for external types no descriptor claims exactly.
///
/// Independent of the descriptor list. Categories absent from this table
/// (JSON, ENUM, SET, GEOMETRY) have no storage kind.
pub const CATEGORY_TO_KIND: &[(SqlTypeCategory, ValueKind)] = &[
    (SqlTypeCategory::Binary, ValueKind::String),
    (SqlTypeCategory::Blob, ValueKind::String),
    (SqlTypeCategory::Char, ValueKind::String),
    (SqlTypeCategory::Text, ValueKind::String),
    (SqlTypeCategory::Bit, ValueKind::Uint),
    (SqlTypeCategory::UnsignedInt, ValueKind::Uint),
    (SqlTypeCategory::Date, ValueKind::DateTime),
    (SqlTypeCategory::Datetime, ValueKind::DateTime),
    (SqlTypeCategory::Timestamp, ValueKind::DateTime),
    (SqlTypeCategory::Decimal, ValueKind::Float),
    (SqlTypeCategory::Float32, ValueKind::Float),
    (SqlTypeCategory::Float64, ValueKind::Float),
    (SqlTypeCategory::SignedInt, ValueKind::Int),
    (SqlTypeCategory::Year, ValueKind::Int),
    (SqlTypeCategory::Null, ValueKind::Null),
    (SqlTypeCategory::Time, ValueKind::InlineBlob),
];

pub fn category_to_kind(category: SqlTypeCategory) -> Option<ValueKind> {
    CATEGORY_TO_KIND
        .iter()
        .find_map(|(candidate, kind)| (*candidate == category).then_some(*kind))
}

/// One row of [`TypeRegistry::summary`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KindSummary {
    pub kind: ValueKind,
    pub canonical_type: String,
    pub display_string: &'static str,
    pub accepted_types: Vec<String>,
}

/// Immutable mapping between external types and internal kinds.
pub struct TypeRegistry {
    descriptors: Vec<Box<dyn TypeDescriptor>>,
    /// kind -> index into `descriptors`; serves as both encoder and decoder table.
    by_kind: BTreeMap<ValueKind, usize>,
    canonical_types: BTreeMap<ValueKind, SqlType>,
    display_strings: BTreeMap<ValueKind, &'static str>,
    explicit_types: HashMap<SqlType, ValueKind>,
}

impl TypeRegistry {
    /// Build a registry from an ordered descriptor list.
    ///
    /// Fails if two descriptors claim the same external type or the same kind.
    /// Type claims are checked first, so a descriptor registered twice reports
    /// the first type it claims rather than its kind.
    pub fn new(descriptors: Vec<Box<dyn TypeDescriptor>>) -> Result<Self, RegistryError> {
        let mut by_kind = BTreeMap::new();
        let mut canonical_types = BTreeMap::new();
        let mut display_strings = BTreeMap::new();
        let mut explicit_types: HashMap<SqlType, ValueKind> = HashMap::new();

        for (idx, descriptor) in descriptors.iter().enumerate() {
            let kind = descriptor.kind();
            for sql_type in descriptor.accepted_types() {
                if let Some(existing) = explicit_types.get(sql_type) {
                    return Err(RegistryError::DuplicateTypeClaim {
                        sql_type: sql_type.clone(),
                        claimed_by: *existing,
                        rejected: kind,
                    });
                }
                explicit_types.insert(sql_type.clone(), kind);
            }

            if by_kind.insert(kind, idx).is_some() {
                return Err(RegistryError::DuplicateKind(kind));
            }
            canonical_types.insert(kind, descriptor.canonical_type());
            display_strings.insert(kind, descriptor.display_string());
        }

        tracing::debug!(
            descriptors = descriptors.len(),
            explicit_claims = explicit_types.len(),
            "type registry built"
        );

        Ok(Self {
            descriptors,
            by_kind,
            canonical_types,
            display_strings,
            explicit_types,
        })
    }

    /// Registry over [`standard_descriptors`].
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(standard_descriptors())
    }

    /// Resolve the storage kind for a declared column type.
    ///
    /// Exact claims win; otherwise the type's category decides.
    pub fn external_type_to_kind(&self, sql_type: &SqlType) -> Result<ValueKind, ConversionError> {
        if let Some(kind) = self.explicit_types.get(sql_type) {
            return Ok(*kind);
        }
        category_to_kind(sql_type.category())
            .ok_or_else(|| ConversionError::UnknownType(sql_type.clone()))
    }

    pub fn kind_to_canonical_type(&self, kind: ValueKind) -> Result<&SqlType, ConversionError> {
        self.canonical_types
            .get(&kind)
            .ok_or(ConversionError::UnsupportedKind(kind))
    }

    pub fn kind_to_display_string(&self, kind: ValueKind) -> Result<&'static str, ConversionError> {
        self.display_strings
            .get(&kind)
            .copied()
            .ok_or(ConversionError::UnsupportedKind(kind))
    }

    /// The descriptor registered for `kind`, if any.
    pub fn descriptor(&self, kind: ValueKind) -> Option<&dyn TypeDescriptor> {
        self.by_kind
            .get(&kind)
            .map(|idx| self.descriptors[*idx].as_ref())
    }

    /// Registered kinds in kind order.
    pub fn kinds(&self) -> impl Iterator<Item = ValueKind> + '_ {
        self.by_kind.keys().copied()
    }

    pub fn summary(&self) -> Vec<KindSummary> {
        self.by_kind
            .values()
            .map(|idx| {
                let descriptor = self.descriptors[*idx].as_ref();
                KindSummary {
                    kind: descriptor.kind(),
                    canonical_type: descriptor.canonical_type().to_string(),
                    display_string: descriptor.display_string(),
                    accepted_types: descriptor
                        .accepted_types()
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                }
            })
            .collect()
    }

    pub fn summary_json(&self) -> JsonValue {
        let fallback: Vec<JsonValue> = CATEGORY_TO_KIND
            .iter()
            .map(|(category, kind)| json!({ "category": category, "kind": kind }))
            .collect();
        json!({
            "schema": TYPE_REGISTRY_SCHEMA,
            "registryKind": TYPE_REGISTRY_KIND,
            "kinds": self.summary(),
            "categoryFallback": fallback,
        })
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("kinds", &self.by_kind.keys().collect::<Vec<_>>())
            .field("explicit_types", &self.explicit_types.len())
            .finish()
    }
}
