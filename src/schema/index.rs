//! Index model

use std::collections::BTreeSet;

use crate::schema::Identifier;

/// Platform-specific index placement flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexFlag {
    Clustered,
    Nonclustered,
}

/// An index over an ordered set of columns
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    pub primary: bool,
    pub flags: BTreeSet<IndexFlag>,
}

impl Index {
    /// Creates an index.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is empty; an index over no columns is a caller
    /// programming error with no meaningful SQL rendering.
    pub fn new(name: &str, columns: &[&str]) -> Self {
        assert!(
            !columns.is_empty(),
            "index {name} must cover at least one column"
        );
        Index {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique: false,
            primary: false,
            flags: BTreeSet::new(),
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks this index as the primary key. Primary keys are unique.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self.unique = true;
        self
    }

    pub fn with_flag(mut self, flag: IndexFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn has_flag(&self, flag: IndexFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn identifier(&self) -> Identifier {
        Identifier::new(&self.name)
    }

    /// Column identifiers in index order.
    pub fn column_identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.columns.iter().map(|c| Identifier::new(c))
    }
}
