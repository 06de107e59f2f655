//! Database platform abstraction
//!
//! A [`Platform`] is a concrete SQL-engine-specific rendering strategy:
//! schema objects and diffs in, dialect-specific SQL text out. Behavior every
//! engine shares lives in default trait methods so a variant can never
//! silently inherit an unwanted vendor quirk through a base-class chain; the
//! set of implementations is closed, one per supported engine.
//!
//! All operations are synchronous, side-effect-free string construction.
//! A platform instance is safe to share across threads once constructed; its
//! only state is the read-only type-mapping registry.

pub mod keywords;
mod limit;
pub mod sqlserver;

pub use sqlserver::SqlServerPlatform;

use crate::error::SqlGenError;
use crate::schema::{Column, Identifier, Index, Sequence, Table, TableDiff};
use crate::types::{LogicalType, TypeRegistry};

/// Standard transaction isolation levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionIsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl TransactionIsolationLevel {
    pub fn sql(self) -> &'static str {
        match self {
            TransactionIsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
            TransactionIsolationLevel::ReadCommitted => "READ COMMITTED",
            TransactionIsolationLevel::RepeatableRead => "REPEATABLE READ",
            TransactionIsolationLevel::Serializable => "SERIALIZABLE",
        }
    }
}

/// Dialect-specific SQL rendering contract
pub trait Platform {
    /// Short dialect name, used in diagnostics and error messages.
    fn name(&self) -> &'static str;

    // ----- identifiers -----

    /// Quotes one identifier as a single atomic token, escaping embedded
    /// delimiters. A literal `.` inside the identifier is not a separator.
    fn quote_single_identifier(&self, identifier: &str) -> String;

    /// Quotes a possibly schema-qualified identifier, one segment at a time.
    ///
    /// The quoter is reserved-keyword-agnostic: whether to quote at all is
    /// the caller's decision (see [`Identifier::sql`]).
    fn quote_identifier(&self, identifier: &str) -> String {
        identifier
            .split('.')
            .map(|segment| self.quote_single_identifier(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Whether `word` is reserved and must be force-quoted in DDL.
    fn is_reserved_keyword(&self, word: &str) -> bool;

    /// Quotes a string literal, doubling embedded quote characters.
    fn quote_string_literal(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    // ----- type system -----

    /// The native-keyword to logical-type registry owned by this instance.
    fn type_registry(&self) -> &TypeRegistry;

    /// Renders the full column-type fragment (`NVARCHAR(255)`, `INT IDENTITY`).
    fn type_declaration_sql(&self, column: &Column) -> Result<String, SqlGenError>;

    /// Renders `name type [COLLATE c] [NOT NULL]`. Defaults are not inline;
    /// they are bound through named constraints.
    fn column_declaration_sql(
        &self,
        name_sql: &str,
        column: &Column,
    ) -> Result<String, SqlGenError> {
        let type_sql = self.type_declaration_sql(column)?;
        let collation = match &column.collation {
            Some(collation) => format!(" {}", self.column_collation_declaration_sql(collation)),
            None => String::new(),
        };
        let notnull = if column.notnull { " NOT NULL" } else { "" };
        Ok(format!("{name_sql} {type_sql}{collation}{notnull}"))
    }

    /// Renders ` DEFAULT <value>` for a column with a default, or `""`.
    ///
    /// Integer-family columns render bare numbers; date/time columns whose
    /// default is the platform's current-date/time expression render it
    /// verbatim; everything else becomes a quoted literal.
    fn default_value_declaration_sql(&self, column: &Column) -> String {
        let Some(default) = &column.default else {
            return String::new();
        };
        let raw = default.raw();
        if column.logical_type.is_integer_family() {
            return format!(" DEFAULT {raw}");
        }
        let current_expression = match column.logical_type {
            LogicalType::DateTime => Some(self.current_timestamp_sql()),
            LogicalType::Date => Some(self.current_date_sql()),
            LogicalType::Time => Some(self.current_time_sql()),
            _ => None,
        };
        if current_expression == Some(raw.as_str()) {
            return format!(" DEFAULT {raw}");
        }
        format!(" DEFAULT {}", self.quote_string_literal(&raw))
    }

    // ----- expression snippets -----

    fn current_date_sql(&self) -> &'static str;
    fn current_time_sql(&self) -> &'static str;
    fn current_timestamp_sql(&self) -> &'static str {
        "CURRENT_TIMESTAMP"
    }

    fn concat_expression(&self, parts: &[&str]) -> String {
        parts.join(" || ")
    }

    /// SQL expression for regular-expression matching, where the dialect has
    /// one.
    fn regexp_expression(&self) -> Result<String, SqlGenError> {
        Err(SqlGenError::UnsupportedCapability {
            platform: self.name(),
            capability: "regexp expressions",
        })
    }

    fn set_transaction_isolation_sql(&self, level: TransactionIsolationLevel) -> String {
        format!("SET TRANSACTION ISOLATION LEVEL {}", level.sql())
    }

    fn column_collation_declaration_sql(&self, collation: &str) -> String {
        format!("COLLATE {collation}")
    }

    // ----- capabilities -----

    fn supports_identity_columns(&self) -> bool {
        false
    }
    fn prefers_identity_columns(&self) -> bool {
        false
    }
    fn supports_sequences(&self) -> bool {
        false
    }
    fn prefers_sequences(&self) -> bool {
        false
    }
    fn supports_savepoints(&self) -> bool {
        true
    }
    fn supports_schemas(&self) -> bool {
        false
    }
    fn supports_create_drop_database(&self) -> bool {
        true
    }
    fn supports_column_collation(&self) -> bool {
        false
    }

    // ----- savepoints -----

    fn create_savepoint_sql(&self, name: &str) -> Result<String, SqlGenError> {
        if !self.supports_savepoints() {
            return Err(SqlGenError::UnsupportedCapability {
                platform: self.name(),
                capability: "savepoints",
            });
        }
        Ok(format!("SAVEPOINT {name}"))
    }

    fn rollback_savepoint_sql(&self, name: &str) -> Result<String, SqlGenError> {
        if !self.supports_savepoints() {
            return Err(SqlGenError::UnsupportedCapability {
                platform: self.name(),
                capability: "savepoints",
            });
        }
        Ok(format!("ROLLBACK TO SAVEPOINT {name}"))
    }

    // ----- databases and schemas -----

    fn list_databases_sql(&self) -> String;

    fn create_database_sql(&self, name: &str) -> String {
        format!("CREATE DATABASE {name}")
    }

    fn drop_database_sql(&self, name: &str) -> String {
        format!("DROP DATABASE {name}")
    }

    fn create_schema_sql(&self, name: &str) -> Result<String, SqlGenError> {
        if !self.supports_schemas() {
            return Err(SqlGenError::UnsupportedCapability {
                platform: self.name(),
                capability: "schemas",
            });
        }
        Ok(format!("CREATE SCHEMA {name}"))
    }

    // ----- table DDL -----

    /// Compiles a table into an ordered statement list: the CREATE TABLE
    /// itself, secondary indexes, comment statements, default constraints.
    fn create_table_sql(&self, table: &Table) -> Result<Vec<String>, SqlGenError>;

    /// Compiles a table diff into an ordered statement list. Either every
    /// statement for the diff is produced or the whole compilation fails.
    fn alter_table_sql(&self, diff: &TableDiff) -> Result<Vec<String>, SqlGenError>;

    fn drop_table_sql(&self, table: &str) -> String {
        format!("DROP TABLE {}", Identifier::new(table).sql(self))
    }

    fn truncate_table_sql(&self, table: &str) -> String {
        format!("TRUNCATE TABLE {}", Identifier::new(table).sql(self))
    }

    fn create_index_sql(&self, index: &Index, table: &str) -> String;

    fn create_primary_key_sql(&self, index: &Index, table: &str) -> String;

    fn drop_constraint_sql(&self, constraint: &str, table: &str) -> String {
        format!(
            "ALTER TABLE {} DROP CONSTRAINT {}",
            Identifier::new(table).sql(self),
            Identifier::new(constraint).sql(self)
        )
    }

    // ----- sequences -----

    fn create_sequence_sql(&self, sequence: &Sequence) -> Result<String, SqlGenError>;
    fn alter_sequence_sql(&self, sequence: &Sequence) -> Result<String, SqlGenError>;
    fn drop_sequence_sql(&self, name: &str) -> Result<String, SqlGenError>;
    fn sequence_next_val_sql(&self, name: &str) -> Result<String, SqlGenError>;

    // ----- catalog query text -----
    //
    // Only the text is in scope; parsing the result sets belongs to the
    // (external) introspection layer.

    fn list_table_columns_sql(&self, table: &str) -> String;
    fn list_table_indexes_sql(&self, table: &str) -> String;
    fn list_table_foreign_keys_sql(&self, table: &str) -> String;

    // ----- comments -----

    /// Generic `COMMENT ON COLUMN` rendering for dialects that accept it.
    fn comment_on_column_sql(&self, table: &str, column: &str, comment: &str) -> String {
        format!(
            "COMMENT ON COLUMN {}.{} IS {}",
            Identifier::new(table).sql(self),
            Identifier::new(column).sql(self),
            self.quote_string_literal(comment)
        )
    }

    // ----- pagination -----

    /// Rewrites a SELECT statement's text to return at most `limit` rows
    /// starting at `offset`. Purely textual: the original statement text is
    /// preserved byte-for-byte.
    fn modify_limit_query(&self, query: &str, limit: u64, offset: u64) -> String;

    /// Convenience form with a zero offset.
    fn limit_query(&self, query: &str, limit: u64) -> String {
        self.modify_limit_query(query, limit, 0)
    }
}
