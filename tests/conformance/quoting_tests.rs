//! Identifier and literal quoting tests

use pretty_assertions::assert_eq;

use rust_sqlgen::platform::{Platform, SqlServerPlatform};
use rust_sqlgen::schema::Identifier;

fn platform() -> SqlServerPlatform {
    SqlServerPlatform::new()
}

#[test]
fn test_quote_single_identifier_is_atomic() {
    let platform = platform();
    assert_eq!(platform.quote_single_identifier("test"), "[test]");
    // a dot inside a single identifier is not a qualifier separator
    assert_eq!(platform.quote_single_identifier("test.test"), "[test.test]");
    assert_eq!(platform.quote_single_identifier("fo]o"), "[fo]]o]");
}

#[test]
fn test_quoting_round_trips() {
    let platform = platform();
    for raw in ["plain", "fo]o", "we]]rd", "test.test"] {
        let quoted = platform.quote_single_identifier(raw);
        let inner = quoted
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap();
        assert_eq!(inner.replace("]]", "]"), raw);
    }
}

#[test]
fn test_quote_identifier_treats_dot_as_qualifier() {
    let platform = platform();
    assert_eq!(platform.quote_identifier("test"), "[test]");
    assert_eq!(platform.quote_identifier("test.test"), "[test].[test]");
}

#[test]
fn test_reserved_keywords_are_force_quoted() {
    let platform = platform();
    assert!(platform.is_reserved_keyword("select"));
    assert!(platform.is_reserved_keyword("TABLE"));
    assert!(!platform.is_reserved_keyword("fooid"));

    assert_eq!(Identifier::new("select").sql(&platform), "[select]");
    assert_eq!(Identifier::new("fooid").sql(&platform), "fooid");
    assert_eq!(Identifier::new("dbo.select").sql(&platform), "dbo.[select]");
}

#[test]
fn test_explicitly_quoted_spellings_stay_quoted() {
    let platform = platform();
    assert_eq!(Identifier::new("`fooid`").sql(&platform), "[fooid]");
    assert_eq!(Identifier::new("\"fooid\"").sql(&platform), "[fooid]");
    assert_eq!(Identifier::new("[fooid]").sql(&platform), "[fooid]");
    assert_eq!(
        Identifier::new("`schema`.`table`").sql(&platform),
        "[schema].[table]"
    );
}

#[test]
fn test_string_literal_quote_doubling() {
    let platform = platform();
    assert_eq!(platform.quote_string_literal("O'Reilly"), "'O''Reilly'");
    assert_eq!(platform.quote_string_literal("plain"), "'plain'");
}

#[test]
fn test_drop_and_truncate_quote_reserved_table_names() {
    let platform = platform();
    assert_eq!(platform.drop_table_sql("foobar"), "DROP TABLE foobar");
    assert_eq!(platform.drop_table_sql("select"), "DROP TABLE [select]");
    assert_eq!(
        platform.truncate_table_sql("select"),
        "TRUNCATE TABLE [select]"
    );
    assert_eq!(
        platform.drop_constraint_sql("select", "table"),
        "ALTER TABLE [table] DROP CONSTRAINT [select]"
    );
}

#[test]
fn test_comment_on_column_quotes_per_segment() {
    let platform = platform();
    assert_eq!(
        platform.comment_on_column_sql("foo", "bar", "comment"),
        "COMMENT ON COLUMN foo.bar IS 'comment'"
    );
    assert_eq!(
        platform.comment_on_column_sql("`Foo`", "`BAR`", "comment"),
        "COMMENT ON COLUMN [Foo].[BAR] IS 'comment'"
    );
    assert_eq!(
        platform.comment_on_column_sql("select", "from", "comment"),
        "COMMENT ON COLUMN [select].[from] IS 'comment'"
    );
}

#[test]
fn test_list_table_columns_escapes_table_literal() {
    let platform = platform();

    let sql = platform.list_table_columns_sql("Foo'Bar\\");
    assert!(sql.contains("'Foo''Bar\\'"));
    assert!(sql.contains("SCHEMA_NAME()"));

    let sql = platform.list_table_columns_sql("Foo'Bar\\.baz_table");
    assert!(sql.contains("'baz_table'"));
    assert!(sql.contains("'Foo''Bar\\'"));
    assert!(!sql.contains("SCHEMA_NAME()"));
}

#[test]
fn test_list_table_indexes_escapes_table_literal() {
    let platform = platform();

    let sql = platform.list_table_indexes_sql("Foo'Bar\\");
    assert!(sql.contains("'Foo''Bar\\'"));
    assert!(sql.contains("SCHEMA_NAME()"));

    let sql = platform.list_table_indexes_sql("Foo'Bar\\.baz_index");
    assert!(sql.contains("'baz_index'"));
    assert!(sql.contains("'Foo''Bar\\'"));
}

#[test]
fn test_list_table_foreign_keys_escapes_table_literal() {
    let platform = platform();

    let sql = platform.list_table_foreign_keys_sql("Foo'Bar\\");
    assert!(sql.contains("'Foo''Bar\\'"));
    assert!(sql.contains("SCHEMA_NAME()"));

    let sql = platform.list_table_foreign_keys_sql("Foo'Bar\\.baz_fk");
    assert!(sql.contains("'baz_fk'"));
    assert!(sql.contains("'Foo''Bar\\'"));
}
