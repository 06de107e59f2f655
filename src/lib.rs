//! rust-sqlgen: cross-dialect SQL generation for schema tooling
//!
//! This library turns dialect-neutral schema objects (tables, columns,
//! indexes, sequences) and schema deltas into vendor-specific SQL text,
//! without ever touching a database. The [`platform::Platform`] trait is the
//! rendering seam; [`platform::SqlServerPlatform`] is the T-SQL
//! implementation, covering bracket quoting, named default constraints,
//! extended-property comment emulation, and OFFSET/FETCH pagination.
//!
//! Generation is deterministic: the same inputs always produce the same
//! statements in the same order, so callers can diff and review emitted DDL.

pub mod driver;
pub mod error;
pub mod platform;
pub mod schema;
pub mod types;

pub use error::SqlGenError;
pub use platform::{Platform, SqlServerPlatform};
