//! Portable scalar functions registered on connection setup
//!
//! Some backends lack scalar functions that generated SQL takes for granted,
//! so each connection gets them registered as user-defined functions before
//! any statement runs. The built-in set covers `sqrt`, `mod`, and `locate`;
//! callers may override any of them (or add their own) at registry
//! construction, and the merged set is cloned per connection so two
//! connections never share registration state.

use tracing::debug;

use crate::driver::{ExecutionBackend, ExecutionError, Value};

/// A scalar function callable from SQL
pub type Udf = fn(&[Value]) -> Value;

#[derive(Debug, Clone)]
struct UdfEntry {
    name: String,
    num_args: i32,
    callback: Udf,
}

/// The set of scalar functions a connection registers on setup
#[derive(Debug, Clone)]
pub struct UdfRegistry {
    entries: Vec<UdfEntry>,
}

impl Default for UdfRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UdfRegistry {
    /// The built-in function set.
    pub fn new() -> Self {
        Self::with_overrides(&[])
    }

    /// Built-ins plus caller overrides. An override with a built-in's name
    /// replaces it (including its arity); unknown names are added.
    pub fn with_overrides(overrides: &[(&str, i32, Udf)]) -> Self {
        let mut registry = UdfRegistry {
            entries: vec![
                UdfEntry {
                    name: "sqrt".to_string(),
                    num_args: 1,
                    callback: udf_sqrt,
                },
                UdfEntry {
                    name: "mod".to_string(),
                    num_args: 2,
                    callback: udf_mod,
                },
                UdfEntry {
                    name: "locate".to_string(),
                    num_args: -1,
                    callback: udf_locate,
                },
            ],
        };
        for (name, num_args, callback) in overrides {
            registry.insert(name, *num_args, *callback);
        }
        registry
    }

    fn insert(&mut self, name: &str, num_args: i32, callback: Udf) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.num_args = num_args;
            entry.callback = callback;
            return;
        }
        self.entries.push(UdfEntry {
            name: name.to_string(),
            num_args,
            callback,
        });
    }

    /// Registered (name, arity) pairs, in registration order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.num_args))
    }

    /// Registers every function on a freshly opened connection.
    pub fn register_all(&self, backend: &mut dyn ExecutionBackend) -> Result<(), ExecutionError> {
        for entry in &self.entries {
            debug!(name = %entry.name, num_args = entry.num_args, "registering scalar function");
            backend.create_function(&entry.name, entry.num_args, entry.callback)?;
        }
        Ok(())
    }
}

fn udf_sqrt(args: &[Value]) -> Value {
    match args.first().and_then(Value::as_f64) {
        Some(v) => Value::Float(v.sqrt()),
        None => Value::Null,
    }
}

fn udf_mod(args: &[Value]) -> Value {
    let (Some(a), Some(b)) = (
        args.first().and_then(Value::as_i64),
        args.get(1).and_then(Value::as_i64),
    ) else {
        return Value::Null;
    };
    if b == 0 {
        return Value::Null;
    }
    Value::Int(a % b)
}

/// `LOCATE(haystack, needle [, offset])` with 1-based positions.
///
/// Returns 0 when the needle is absent. A positive offset starts the search
/// at that 1-based position; the returned position is still relative to the
/// start of the haystack.
fn udf_locate(args: &[Value]) -> Value {
    let (Some(haystack), Some(needle)) = (
        args.first().and_then(Value::as_text),
        args.get(1).and_then(Value::as_text),
    ) else {
        return Value::Null;
    };
    let mut start = args.get(2).and_then(Value::as_i64).unwrap_or(0);
    if start > 0 {
        start -= 1;
    }
    let start = (start.max(0) as usize).min(haystack.len());
    // byte offsets; a start inside a multibyte char cannot match anyway
    let Some(tail) = haystack.get(start..) else {
        return Value::Int(0);
    };
    match tail.find(needle) {
        Some(pos) => Value::Int((start + pos + 1) as i64),
        None => Value::Int(0),
    }
}
