//! Connection-side execution plumbing
//!
//! The generation engine itself never talks to a database; this module holds
//! the thin seam a caller wires generated SQL through. A backend is anything
//! that can run a statement and register scalar functions, and the engine
//! ships a set of portable scalar functions (see [`udf`]) for backends whose
//! native dialect lacks them.

pub mod udf;

pub use udf::{Udf, UdfRegistry};

use thiserror::Error;

/// A scalar value crossing the backend boundary
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value, treating text as non-numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// Rows returned by a backend execution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Errors surfaced by an execution backend
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("statement execution failed: {message}")]
    Failed { message: String },

    #[error("cannot register scalar function {name}/{num_args}")]
    Registration { name: String, num_args: i32 },
}

/// Something that can run SQL text and host scalar functions
///
/// The generation engine never calls `execute` itself; it exists so emitted
/// statement lists have a typed sink. `num_args` of `-1` registers a variadic
/// function. Registration happens once per connection, before the first
/// statement runs.
pub trait ExecutionBackend {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<RowSet, ExecutionError>;

    fn create_function(
        &mut self,
        name: &str,
        num_args: i32,
        callback: Udf,
    ) -> Result<(), ExecutionError>;
}
