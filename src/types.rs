//! Logical column types and the native-type mapping registry
//!
//! A [`LogicalType`] is the engine-independent semantic type of a column
//! (string, integer, guid, ...), distinct from any vendor keyword. Each
//! platform owns a [`TypeRegistry`] that maps native type keywords back to
//! logical types for schema introspection. The registry is constructed once
//! per platform instance and never mutated afterwards; user-supplied
//! overrides are merged at construction time, with the override winning on
//! key collision.

use std::collections::BTreeMap;

use crate::error::SqlGenError;

/// Engine-independent semantic column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogicalType {
    BigInt,
    Integer,
    SmallInt,
    Decimal,
    Float,
    Boolean,
    String,
    Text,
    Binary,
    Blob,
    Guid,
    DateTime,
    Date,
    Time,
    /// Serialized object; emulated, no native equivalent
    Object,
    /// Serialized array; emulated, no native equivalent
    Array,
}

impl LogicalType {
    /// Canonical lowercase name, as used in `(DC2Type:...)` comment markers.
    pub fn name(self) -> &'static str {
        match self {
            LogicalType::BigInt => "bigint",
            LogicalType::Integer => "integer",
            LogicalType::SmallInt => "smallint",
            LogicalType::Decimal => "decimal",
            LogicalType::Float => "float",
            LogicalType::Boolean => "boolean",
            LogicalType::String => "string",
            LogicalType::Text => "text",
            LogicalType::Binary => "binary",
            LogicalType::Blob => "blob",
            LogicalType::Guid => "guid",
            LogicalType::DateTime => "datetime",
            LogicalType::Date => "date",
            LogicalType::Time => "time",
            LogicalType::Object => "object",
            LogicalType::Array => "array",
        }
    }

    /// Parses a canonical type name back into a logical type.
    pub fn parse(name: &str) -> Result<Self, SqlGenError> {
        Ok(match name {
            "bigint" => LogicalType::BigInt,
            "integer" => LogicalType::Integer,
            "smallint" => LogicalType::SmallInt,
            "decimal" => LogicalType::Decimal,
            "float" => LogicalType::Float,
            "boolean" => LogicalType::Boolean,
            "string" => LogicalType::String,
            "text" => LogicalType::Text,
            "binary" => LogicalType::Binary,
            "blob" => LogicalType::Blob,
            "guid" => LogicalType::Guid,
            "datetime" => LogicalType::DateTime,
            "date" => LogicalType::Date,
            "time" => LogicalType::Time,
            "object" => LogicalType::Object,
            "array" => LogicalType::Array,
            _ => {
                return Err(SqlGenError::UnknownType {
                    name: name.to_string(),
                })
            }
        })
    }

    /// Whether this type maps to a whole-number SQL type.
    ///
    /// Integer-family defaults are rendered as bare numbers rather than
    /// quoted literals.
    pub fn is_integer_family(self) -> bool {
        matches!(
            self,
            LogicalType::BigInt | LogicalType::Integer | LogicalType::SmallInt
        )
    }

    /// Whether the native schema loses this type, requiring a machine-readable
    /// comment marker (`(DC2Type:<name>)`) to recover it on introspection.
    pub fn requires_comment_marker(self) -> bool {
        matches!(self, LogicalType::Object | LogicalType::Array)
    }
}

/// Per-platform map from native type keywords to logical types
///
/// Append-only after construction: defaults come from the platform, caller
/// overrides are merged on top, and the result is read-only for the lifetime
/// of the platform instance. Each platform instance owns its own copy, so
/// concurrent construction of two platforms never races on shared state.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    mappings: BTreeMap<String, LogicalType>,
}

impl TypeRegistry {
    /// Builds a registry from platform defaults plus caller overrides.
    ///
    /// Override entries replace default entries with the same keyword.
    pub fn new(
        defaults: &[(&str, LogicalType)],
        overrides: &[(&str, LogicalType)],
    ) -> Self {
        let mut mappings = BTreeMap::new();
        for (keyword, logical) in defaults.iter().chain(overrides) {
            mappings.insert(keyword.to_ascii_lowercase(), *logical);
        }
        TypeRegistry { mappings }
    }

    /// Whether a native type keyword has a registered logical type.
    pub fn has_mapping(&self, native: &str) -> bool {
        self.mappings.contains_key(&native.to_ascii_lowercase())
    }

    /// Looks up the logical type for a native type keyword.
    pub fn logical_type(&self, native: &str) -> Result<LogicalType, SqlGenError> {
        self.mappings
            .get(&native.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| SqlGenError::UnknownType {
                name: native.to_string(),
            })
    }

    /// Iterates all registered (native keyword, logical type) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, LogicalType)> {
        self.mappings.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
