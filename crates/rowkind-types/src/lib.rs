//! # rowkind types
//!
//! Bridges the SQL column-type vocabulary exposed by the query surface and the
//! closed set of value kinds the storage layer persists.
//!
//! ## Architecture
//!
//! ```text
//! TypeDescriptor        ← One per kind: canonical/accepted types, encode, decode
//!     │
//! TypeRegistry::new     ← Folds descriptors into frozen lookup tables,
//!     │                    rejecting duplicate type claims
//! TypeRegistry          ← SqlType → kind (exact claim, then category fallback)
//!     │                    kind → canonical SqlType / display string
//! Conversion            ← SqlValue ⇄ Value with NULL short-circuit
//! ```
//!
//! The registry is an ordinary value. Hosts build it once at startup and pass
//! it (by reference or `Arc`) to whatever binds columns or moves rows.

pub mod conversion;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod registry;
pub mod sql_type;
pub mod value;

pub use descriptor::{TypeDescriptor, standard_descriptors};
pub use error::{ConversionError, RegistryError};
pub use kind::ValueKind;
pub use registry::{CATEGORY_TO_KIND, KindSummary, TypeRegistry, category_to_kind};
pub use sql_type::{SqlType, SqlTypeCategory, SqlTypeParseError};
pub use value::{SqlValue, Value};
