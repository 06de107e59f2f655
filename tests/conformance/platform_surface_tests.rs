//! Remaining platform surface: sequences, databases, standalone indexes,
//! snippets, transaction isolation, and capability flags

use pretty_assertions::assert_eq;

use rust_sqlgen::error::SqlGenError;
use rust_sqlgen::platform::{Platform, SqlServerPlatform, TransactionIsolationLevel};
use rust_sqlgen::schema::{Index, IndexFlag, Sequence};

fn platform() -> SqlServerPlatform {
    SqlServerPlatform::new()
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn test_generates_sequence_sql_commands() {
    let platform = platform();
    let sequence = Sequence::new("myseq", 20, 1);
    assert_eq!(
        platform.create_sequence_sql(&sequence).unwrap(),
        "CREATE SEQUENCE myseq START WITH 1 INCREMENT BY 20 MINVALUE 1"
    );
    assert_eq!(
        platform.alter_sequence_sql(&sequence).unwrap(),
        "ALTER SEQUENCE myseq INCREMENT BY 20"
    );
    assert_eq!(
        platform.drop_sequence_sql("myseq").unwrap(),
        "DROP SEQUENCE myseq"
    );
    assert_eq!(
        platform.sequence_next_val_sql("myseq").unwrap(),
        "SELECT NEXT VALUE FOR myseq"
    );
}

#[test]
fn test_sequence_names_are_identifier_rendered() {
    let platform = platform();
    let sequence = Sequence::new("`select`", 1, 1);
    assert_eq!(
        platform.create_sequence_sql(&sequence).unwrap(),
        "CREATE SEQUENCE [select] START WITH 1 INCREMENT BY 1 MINVALUE 1"
    );
}

// ============================================================================
// Databases and schemas
// ============================================================================

#[test]
fn test_database_commands() {
    let platform = platform();
    assert_eq!(
        platform.create_database_sql("UniqueDatabase"),
        "CREATE DATABASE UniqueDatabase"
    );
    assert_eq!(
        platform.drop_database_sql("UniqueDatabase"),
        "DROP DATABASE UniqueDatabase"
    );
    assert_eq!(platform.list_databases_sql(), "SELECT * FROM sys.databases");
}

#[test]
fn test_create_schema() {
    assert_eq!(
        platform().create_schema_sql("schema").unwrap(),
        "CREATE SCHEMA schema"
    );
}

// ============================================================================
// Standalone index creation
// ============================================================================

#[test]
fn test_generates_index_creation_sql() {
    let index = Index::new("my_idx", &["user_name", "last_login"]);
    assert_eq!(
        platform().create_index_sql(&index, "mytable"),
        "CREATE INDEX my_idx ON mytable (user_name, last_login)"
    );
}

#[test]
fn test_generates_unique_index_creation_sql() {
    let index = Index::new("index_name", &["test", "test2"]).unique();
    assert_eq!(
        platform().create_index_sql(&index, "test"),
        "CREATE UNIQUE INDEX index_name ON test (test, test2) \
         WHERE test IS NOT NULL AND test2 IS NOT NULL"
    );
}

#[test]
fn test_clustered_index_flag() {
    let index = Index::new("idx", &["id"]).with_flag(IndexFlag::Clustered);
    assert_eq!(
        platform().create_index_sql(&index, "tbl"),
        "CREATE CLUSTERED INDEX idx ON tbl (id)"
    );
    let index = Index::new("idx", &["id"]).with_flag(IndexFlag::Nonclustered);
    assert_eq!(
        platform().create_index_sql(&index, "tbl"),
        "CREATE NONCLUSTERED INDEX idx ON tbl (id)"
    );
}

#[test]
fn test_primary_index_renders_as_add_primary_key() {
    let index = Index::new("idx", &["id"]).primary();
    assert_eq!(
        platform().create_index_sql(&index, "alter_table_add_pk"),
        "ALTER TABLE alter_table_add_pk ADD PRIMARY KEY (id)"
    );
    assert_eq!(
        platform().create_primary_key_sql(
            &Index::new("primary", &["id"]).primary().with_flag(IndexFlag::Nonclustered),
            "tbl"
        ),
        "ALTER TABLE tbl ADD PRIMARY KEY NONCLUSTERED (id)"
    );
}

// ============================================================================
// Expression snippets and transactions
// ============================================================================

#[test]
fn test_transaction_isolation_levels() {
    let platform = platform();
    assert_eq!(
        platform.set_transaction_isolation_sql(TransactionIsolationLevel::ReadUncommitted),
        "SET TRANSACTION ISOLATION LEVEL READ UNCOMMITTED"
    );
    assert_eq!(
        platform.set_transaction_isolation_sql(TransactionIsolationLevel::ReadCommitted),
        "SET TRANSACTION ISOLATION LEVEL READ COMMITTED"
    );
    assert_eq!(
        platform.set_transaction_isolation_sql(TransactionIsolationLevel::RepeatableRead),
        "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ"
    );
    assert_eq!(
        platform.set_transaction_isolation_sql(TransactionIsolationLevel::Serializable),
        "SET TRANSACTION ISOLATION LEVEL SERIALIZABLE"
    );
}

#[test]
fn test_savepoint_commands() {
    let platform = platform();
    assert_eq!(
        platform.create_savepoint_sql("mysp").unwrap(),
        "SAVE TRANSACTION mysp"
    );
    assert_eq!(
        platform.rollback_savepoint_sql("mysp").unwrap(),
        "ROLLBACK TRANSACTION mysp"
    );
}

#[test]
fn test_snippets() {
    let platform = platform();
    assert_eq!(platform.current_date_sql(), "CONVERT(date, GETDATE())");
    assert_eq!(platform.current_time_sql(), "CONVERT(time, GETDATE())");
    assert_eq!(platform.current_timestamp_sql(), "CURRENT_TIMESTAMP");
    assert_eq!(
        platform.concat_expression(&["column1", "column2", "column3"]),
        "(column1 + column2 + column3)"
    );
}

#[test]
fn test_regexp_is_not_supported() {
    assert!(matches!(
        platform().regexp_expression(),
        Err(SqlGenError::UnsupportedCapability { .. })
    ));
}

// ============================================================================
// Capability flags
// ============================================================================

#[test]
fn test_capability_flags() {
    let platform = platform();
    assert!(platform.supports_identity_columns());
    assert!(platform.prefers_identity_columns());
    assert!(platform.supports_sequences());
    assert!(platform.supports_savepoints());
    assert!(platform.supports_schemas());
    assert!(platform.supports_create_drop_database());
    assert!(platform.supports_column_collation());
}
