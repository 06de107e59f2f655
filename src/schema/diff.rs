//! Schema deltas consumed by the DDL compiler
//!
//! Diffs are transient: the (external) differencing engine constructs them,
//! the compiler consumes them once, and they carry no identity beyond the
//! statement-generation call.

use std::collections::BTreeSet;

use crate::schema::{Column, Index, Table};

/// A column property that can appear in a diff's changed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnProperty {
    Type,
    Length,
    Precision,
    Scale,
    Fixed,
    NotNull,
    Default,
    Autoincrement,
    Comment,
    Collation,
}

/// Before/after delta for a single column
///
/// `changed` drives which DDL clauses are emitted and must never be empty;
/// the compiler rejects an empty set as an invalid diff. `from_column` is the
/// full prior snapshot when the differencing engine has one; without it the
/// compiler cannot reason about prior defaults or comments.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDiff {
    pub old_name: String,
    pub column: Column,
    pub changed: BTreeSet<ColumnProperty>,
    pub from_column: Option<Column>,
}

impl ColumnDiff {
    pub fn new(
        old_name: &str,
        column: Column,
        changed: &[ColumnProperty],
        from_column: Option<Column>,
    ) -> Self {
        ColumnDiff {
            old_name: old_name.to_string(),
            column,
            changed: changed.iter().copied().collect(),
            from_column,
        }
    }

    pub fn has_changed(&self, property: ColumnProperty) -> bool {
        self.changed.contains(&property)
    }
}

/// A structured delta over a whole table
///
/// Column/index lists preserve the differencing engine's insertion order,
/// which the compiler turns into deterministic statement order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDiff {
    pub name: String,
    /// Full prior table, when available; required context for validating
    /// renames.
    pub from_table: Option<Table>,
    pub added_columns: Vec<Column>,
    pub changed_columns: Vec<ColumnDiff>,
    pub removed_columns: Vec<Column>,
    /// (old column name, new column definition)
    pub renamed_columns: Vec<(String, Column)>,
    /// (old index name, new index definition)
    pub renamed_indexes: Vec<(String, Index)>,
    pub new_name: Option<String>,
}

impl TableDiff {
    pub fn new(name: &str) -> Self {
        TableDiff {
            name: name.to_string(),
            from_table: None,
            added_columns: Vec::new(),
            changed_columns: Vec::new(),
            removed_columns: Vec::new(),
            renamed_columns: Vec::new(),
            renamed_indexes: Vec::new(),
            new_name: None,
        }
    }
}
