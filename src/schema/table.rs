//! Table model

use crate::schema::{Column, Identifier, Index};

/// A dialect-neutral table definition
///
/// Column insertion order is DDL column order. The primary key, when present,
/// is itself an [`Index`] with its `primary` flag set; its columns must be a
/// subset of the table's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
    pub primary_key: Option<Index>,
}

impl Table {
    /// Creates an empty table. `name` may carry an optional schema prefix
    /// (`schema.table`) and explicit quote markers.
    pub fn new(name: &str) -> Self {
        Table {
            name: name.to_string(),
            columns: Vec::new(),
            indexes: Vec::new(),
            primary_key: None,
        }
    }

    pub fn add_column(mut self, column: Column) -> Self {
        debug_assert!(
            self.column(&column.name).is_none(),
            "duplicate column {} in table {}",
            column.name,
            self.name
        );
        self.columns.push(column);
        self
    }

    pub fn add_index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    /// Declares an unnamed primary key over the given columns.
    pub fn set_primary_key(self, columns: &[&str]) -> Self {
        let index = Index::new("primary", columns).primary();
        self.set_primary_key_index(index)
    }

    /// Declares the primary key from a pre-built index (for placement flags).
    pub fn set_primary_key_index(mut self, index: Index) -> Self {
        self.primary_key = Some(index.primary());
        self
    }

    /// Looks up a column by bare name (quote markers ignored).
    pub fn column(&self, name: &str) -> Option<&Column> {
        let wanted = Identifier::new(name);
        self.columns
            .iter()
            .find(|c| Identifier::new(&c.name).name() == wanted.name())
    }

    pub fn identifier(&self) -> Identifier {
        Identifier::new(&self.name)
    }
}
