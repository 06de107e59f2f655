//! Dialect-neutral schema objects and deltas

mod column;
mod diff;
mod identifier;
mod index;
mod sequence;
mod table;

pub use column::{Column, DefaultValue};
pub use diff::{ColumnDiff, ColumnProperty, TableDiff};
pub use identifier::Identifier;
pub use index::{Index, IndexFlag};
pub use sequence::Sequence;
pub use table::Table;
