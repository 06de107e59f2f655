//! Sequence model

use crate::schema::Identifier;

/// A declarative sequence: name, step, and starting value
///
/// The starting value doubles as the minimum value. Sequences carry no state
/// beyond these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub name: String,
    pub increment_by: i64,
    pub start_value: i64,
}

impl Sequence {
    pub fn new(name: &str, increment_by: i64, start_value: i64) -> Self {
        Sequence {
            name: name.to_string(),
            increment_by,
            start_value,
        }
    }

    pub fn identifier(&self) -> Identifier {
        Identifier::new(&self.name)
    }
}
