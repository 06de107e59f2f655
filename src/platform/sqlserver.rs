//! Microsoft SQL Server (T-SQL) platform
//!
//! Rendering rules that distinguish this dialect from the portable defaults:
//!
//! * identifiers are bracket-delimited, with `]` escaped by doubling
//! * column defaults never appear inline; each becomes a named `DF_` default
//!   constraint so later diffs can address it deterministically
//! * column comments are emulated through the `sp_addextendedproperty`
//!   family of stored procedures under the `MS_Description` property name
//! * pagination rewrites `SELECT` text into `OFFSET ... FETCH NEXT` form,
//!   synthesizing an `ORDER BY` when the statement has none

use tracing::debug;

use crate::error::SqlGenError;
use crate::platform::{keywords, limit, Platform};
use crate::schema::{Column, ColumnDiff, ColumnProperty, Identifier, Index, IndexFlag, Sequence, Table, TableDiff};
use crate::types::{LogicalType, TypeRegistry};

/// Native type keywords SQL Server reports, mapped to logical types.
const NATIVE_TYPE_DEFAULTS: &[(&str, LogicalType)] = &[
    ("bigint", LogicalType::BigInt),
    ("numeric", LogicalType::Decimal),
    ("bit", LogicalType::Boolean),
    ("smallint", LogicalType::SmallInt),
    ("decimal", LogicalType::Decimal),
    ("smallmoney", LogicalType::Integer),
    ("int", LogicalType::Integer),
    ("tinyint", LogicalType::SmallInt),
    ("money", LogicalType::Integer),
    ("float", LogicalType::Float),
    ("real", LogicalType::Float),
    ("double", LogicalType::Float),
    ("double precision", LogicalType::Float),
    ("smalldatetime", LogicalType::DateTime),
    ("datetime", LogicalType::DateTime),
    ("datetime2", LogicalType::DateTime),
    ("date", LogicalType::Date),
    ("time", LogicalType::Time),
    ("char", LogicalType::String),
    ("varchar", LogicalType::String),
    ("text", LogicalType::Text),
    ("nchar", LogicalType::String),
    ("nvarchar", LogicalType::String),
    ("ntext", LogicalType::Text),
    ("binary", LogicalType::Binary),
    ("varbinary", LogicalType::Binary),
    ("image", LogicalType::Blob),
    ("uniqueidentifier", LogicalType::Guid),
];

/// T-SQL rendering strategy
#[derive(Debug, Clone)]
pub struct SqlServerPlatform {
    types: TypeRegistry,
}

impl Default for SqlServerPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlServerPlatform {
    pub fn new() -> Self {
        Self::with_type_overrides(&[])
    }

    /// Creates a platform whose type registry carries caller overrides on top
    /// of the built-in native type mappings.
    pub fn with_type_overrides(overrides: &[(&str, LogicalType)]) -> Self {
        SqlServerPlatform {
            types: TypeRegistry::new(NATIVE_TYPE_DEFAULTS, overrides),
        }
    }

    /// Stable 8-hex-digit digest of an identifier, computed over the bare
    /// name with quote markers stripped. Quoted and unquoted spellings of the
    /// same name digest identically.
    fn identifier_digest(name: &str) -> String {
        format!("{:08X}", crc32fast::hash(Identifier::new(name).name().as_bytes()))
    }

    /// Deterministic name for the default constraint bound to a column:
    /// `DF_<table digest>_<column digest>`.
    pub fn default_constraint_name(&self, table: &str, column: &str) -> String {
        format!(
            "DF_{}_{}",
            Self::identifier_digest(table),
            Self::identifier_digest(column)
        )
    }

    /// Renders ` CONSTRAINT DF_x_y DEFAULT <value> FOR <column>`, the clause
    /// appended after `ADD` in both CREATE TABLE follow-ups and ALTER TABLE.
    pub fn default_constraint_declaration_sql(&self, table: &str, column: &Column) -> String {
        debug_assert!(
            column.default.is_some(),
            "column {} has no default to bind a constraint to",
            column.name
        );
        format!(
            " CONSTRAINT {}{} FOR {}",
            self.default_constraint_name(table, &column.name),
            self.default_value_declaration_sql(column),
            column.identifier().sql(self)
        )
    }

    /// Splits an optionally schema-qualified table name into extended
    /// property level names, defaulting the schema to `dbo`.
    fn schema_and_table(table: &str) -> (String, String) {
        let ident = Identifier::new(table);
        match ident.name().split_once('.') {
            Some((schema, table)) => (schema.to_string(), table.to_string()),
            None => ("dbo".to_string(), ident.name().to_string()),
        }
    }

    fn extended_property_sql(
        &self,
        procedure: &str,
        value: Option<&str>,
        table: &str,
        column_sql: &str,
    ) -> String {
        let (schema, table) = Self::schema_and_table(table);
        let mut sql = format!("EXEC {procedure} N'MS_Description'");
        if let Some(value) = value {
            sql.push_str(&format!(", N{}", self.quote_string_literal(value)));
        }
        sql.push_str(&format!(
            ", N'SCHEMA', {}, N'TABLE', {}, N'COLUMN', {}",
            self.quote_string_literal(&schema),
            self.quote_string_literal(&table),
            column_sql
        ));
        sql
    }

    /// `sp_addextendedproperty` call attaching a comment to a column.
    /// `column_sql` is the already-rendered column identifier.
    pub fn add_column_comment_sql(&self, table: &str, column_sql: &str, comment: &str) -> String {
        self.extended_property_sql("sp_addextendedproperty", Some(comment), table, column_sql)
    }

    /// `sp_updateextendedproperty` call replacing a column's comment.
    pub fn update_column_comment_sql(&self, table: &str, column_sql: &str, comment: &str) -> String {
        self.extended_property_sql("sp_updateextendedproperty", Some(comment), table, column_sql)
    }

    /// `sp_dropextendedproperty` call removing a column's comment.
    pub fn drop_column_comment_sql(&self, table: &str, column_sql: &str) -> String {
        self.extended_property_sql("sp_dropextendedproperty", None, table, column_sql)
    }

    /// The comment text actually stored for a column: the user comment plus
    /// a `(DC2Type:...)` marker when the logical type has no native
    /// equivalent. Empty means no extended property is emitted at all.
    fn column_comment(column: &Column) -> String {
        let mut comment = column.comment.clone().unwrap_or_default();
        if column.logical_type.requires_comment_marker() {
            comment.push_str(&format!("(DC2Type:{})", column.logical_type.name()));
        }
        comment
    }

    /// Whether altering this column must first drop its default constraint.
    /// True when the prior column carried a default and the default, type, or
    /// fixedness changed; the constraint is re-added against the new
    /// definition afterwards.
    fn requires_drop_default_constraint(diff: &ColumnDiff) -> bool {
        let Some(from) = &diff.from_column else {
            return false;
        };
        if from.default.is_none() {
            return false;
        }
        diff.has_changed(ColumnProperty::Default)
            || diff.has_changed(ColumnProperty::Type)
            || diff.has_changed(ColumnProperty::Fixed)
    }

    fn create_index_body_sql(&self, index: &Index, table: &str, with_filter: bool) -> String {
        if index.primary {
            return self.create_primary_key_sql(index, table);
        }
        let mut flags = String::new();
        if index.unique {
            flags.push_str("UNIQUE ");
        }
        if index.has_flag(IndexFlag::Clustered) {
            flags.push_str("CLUSTERED ");
        } else if index.has_flag(IndexFlag::Nonclustered) {
            flags.push_str("NONCLUSTERED ");
        }
        let columns = index
            .column_identifiers()
            .map(|c| c.sql(self))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!(
            "CREATE {}INDEX {} ON {} ({})",
            flags,
            index.identifier().sql(self),
            Identifier::new(table).sql(self),
            columns
        );
        if index.unique && with_filter {
            let conjuncts = index
                .column_identifiers()
                .map(|c| format!("{} IS NOT NULL", c.sql(self)))
                .collect::<Vec<_>>()
                .join(" AND ");
            sql.push_str(&format!(" WHERE {conjuncts}"));
        }
        sql
    }

    /// Predicate fragment constraining a catalog query to one table, with a
    /// `SCHEMA_NAME()` fallback when the name carries no schema.
    fn table_where_clause(&self, table: &str, schema_column: &str, table_column: &str) -> String {
        match table.split_once('.') {
            Some((schema, table)) => format!(
                "({} = {} AND {} = {})",
                table_column,
                self.quote_string_literal(table),
                schema_column,
                self.quote_string_literal(schema)
            ),
            None => format!(
                "({} = {} AND {} = SCHEMA_NAME())",
                table_column,
                self.quote_string_literal(table),
                schema_column
            ),
        }
    }

    /// Rejects diffs the compiler cannot honor before any SQL is produced.
    fn validate_diff(&self, diff: &TableDiff) -> Result<(), SqlGenError> {
        for column_diff in &diff.changed_columns {
            if column_diff.changed.is_empty() {
                return Err(SqlGenError::invalid_diff(
                    &diff.name,
                    format!(
                        "changed column {} has an empty property set",
                        column_diff.old_name
                    ),
                ));
            }
        }
        let Some(from) = &diff.from_table else {
            return Ok(());
        };
        for (old_name, _) in &diff.renamed_columns {
            if from.column(old_name).is_none() {
                return Err(SqlGenError::invalid_diff(
                    &diff.name,
                    format!("renamed column {old_name} does not exist in the prior table"),
                ));
            }
        }
        for (old_name, _) in &diff.renamed_indexes {
            let wanted = Identifier::new(old_name);
            let known = from
                .indexes
                .iter()
                .any(|index| index.identifier().name() == wanted.name());
            if !known {
                return Err(SqlGenError::invalid_diff(
                    &diff.name,
                    format!("renamed index {old_name} does not exist in the prior table"),
                ));
            }
        }
        Ok(())
    }
}

impl Platform for SqlServerPlatform {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn quote_single_identifier(&self, identifier: &str) -> String {
        format!("[{}]", identifier.replace(']', "]]"))
    }

    fn is_reserved_keyword(&self, word: &str) -> bool {
        keywords::is_tsql_reserved(word)
    }

    fn type_registry(&self) -> &TypeRegistry {
        &self.types
    }

    fn type_declaration_sql(&self, column: &Column) -> Result<String, SqlGenError> {
        let identity = if column.autoincrement { " IDENTITY" } else { "" };
        Ok(match column.logical_type {
            LogicalType::BigInt => format!("BIGINT{identity}"),
            LogicalType::Integer => format!("INT{identity}"),
            LogicalType::SmallInt => format!("SMALLINT{identity}"),
            LogicalType::Decimal => format!(
                "NUMERIC({}, {})",
                column.precision.unwrap_or(10),
                column.scale.unwrap_or(0)
            ),
            LogicalType::Float => "DOUBLE PRECISION".to_string(),
            LogicalType::Boolean => "BIT".to_string(),
            LogicalType::String => match (column.fixed, column.length) {
                (true, Some(length)) => format!("NCHAR({length})"),
                (false, Some(length)) => format!("NVARCHAR({length})"),
                (true, None) => {
                    return Err(SqlGenError::ColumnLengthRequired { type_name: "NCHAR" })
                }
                (false, None) => {
                    return Err(SqlGenError::ColumnLengthRequired { type_name: "NVARCHAR" })
                }
            },
            LogicalType::Text | LogicalType::Object | LogicalType::Array => {
                "VARCHAR(MAX)".to_string()
            }
            LogicalType::Binary => match (column.fixed, column.length) {
                (true, Some(length)) => format!("BINARY({length})"),
                (false, Some(length)) => format!("VARBINARY({length})"),
                (true, None) => {
                    return Err(SqlGenError::ColumnLengthRequired { type_name: "BINARY" })
                }
                (false, None) => {
                    return Err(SqlGenError::ColumnLengthRequired { type_name: "VARBINARY" })
                }
            },
            LogicalType::Blob => "VARBINARY(MAX)".to_string(),
            LogicalType::Guid => "UNIQUEIDENTIFIER".to_string(),
            LogicalType::DateTime => "DATETIME".to_string(),
            LogicalType::Date => "DATE".to_string(),
            LogicalType::Time => "TIME(0)".to_string(),
        })
    }

    fn current_date_sql(&self) -> &'static str {
        "CONVERT(date, GETDATE())"
    }

    fn current_time_sql(&self) -> &'static str {
        "CONVERT(time, GETDATE())"
    }

    fn concat_expression(&self, parts: &[&str]) -> String {
        format!("({})", parts.join(" + "))
    }

    fn supports_identity_columns(&self) -> bool {
        true
    }

    fn prefers_identity_columns(&self) -> bool {
        true
    }

    fn supports_sequences(&self) -> bool {
        true
    }

    fn supports_schemas(&self) -> bool {
        true
    }

    fn supports_column_collation(&self) -> bool {
        true
    }

    fn create_savepoint_sql(&self, name: &str) -> Result<String, SqlGenError> {
        Ok(format!("SAVE TRANSACTION {name}"))
    }

    fn rollback_savepoint_sql(&self, name: &str) -> Result<String, SqlGenError> {
        Ok(format!("ROLLBACK TRANSACTION {name}"))
    }

    fn list_databases_sql(&self) -> String {
        "SELECT * FROM sys.databases".to_string()
    }

    fn create_table_sql(&self, table: &Table) -> Result<Vec<String>, SqlGenError> {
        assert!(
            !table.columns.is_empty(),
            "table {} must have at least one column",
            table.name
        );
        debug!(table = %table.name, "compiling CREATE TABLE statements");
        let table_sql = table.identifier().sql(self);
        let primary_columns: Vec<&str> = table
            .primary_key
            .as_ref()
            .map(|pk| pk.columns.iter().map(String::as_str).collect())
            .unwrap_or_default();

        let mut declarations = Vec::new();
        let mut comments = Vec::new();
        let mut default_constraints = Vec::new();
        for column in &table.columns {
            let mut column = column.clone();
            let bare_name = column.identifier().name().to_string();
            if primary_columns
                .iter()
                .any(|pk| Identifier::new(pk).name() == bare_name)
            {
                // primary key columns are NOT NULL regardless of declaration
                column.notnull = true;
            }
            let name_sql = column.identifier().sql(self);
            declarations.push(self.column_declaration_sql(&name_sql, &column)?);

            let comment = Self::column_comment(&column);
            if !comment.is_empty() {
                comments.push(self.add_column_comment_sql(&table.name, &name_sql, &comment));
            }
            if column.default.is_some() {
                default_constraints.push(format!(
                    "ALTER TABLE {} ADD{}",
                    table_sql,
                    self.default_constraint_declaration_sql(&table.name, &column)
                ));
            }
        }

        let mut body = declarations.join(", ");
        if let Some(pk) = &table.primary_key {
            let placement = if pk.has_flag(IndexFlag::Nonclustered) {
                " NONCLUSTERED"
            } else {
                ""
            };
            let columns = pk
                .column_identifiers()
                .map(|c| c.sql(self))
                .collect::<Vec<_>>()
                .join(", ");
            body.push_str(&format!(", PRIMARY KEY{placement} ({columns})"));
        }

        let mut sql = vec![format!("CREATE TABLE {table_sql} ({body})")];
        for index in &table.indexes {
            let any_nullable = index
                .column_identifiers()
                .any(|c| table.column(c.name()).map_or(true, |col| !col.notnull));
            let with_filter = index.unique && !index.primary && any_nullable;
            sql.push(self.create_index_body_sql(index, &table.name, with_filter));
        }
        sql.extend(comments);
        sql.extend(default_constraints);
        Ok(sql)
    }

    fn alter_table_sql(&self, diff: &TableDiff) -> Result<Vec<String>, SqlGenError> {
        debug!(table = %diff.name, "compiling ALTER TABLE statements");
        self.validate_diff(diff)?;
        let table_sql = Identifier::new(&diff.name).sql(self);
        let mut clauses: Vec<String> = Vec::new();
        let mut sql: Vec<String> = Vec::new();
        let mut comments: Vec<String> = Vec::new();

        for column in &diff.added_columns {
            let name_sql = column.identifier().sql(self);
            clauses.push(format!(
                "ADD {}",
                self.column_declaration_sql(&name_sql, column)?
            ));
            if column.default.is_some() {
                clauses.push(format!(
                    "ADD{}",
                    self.default_constraint_declaration_sql(&diff.name, column)
                ));
            }
            let comment = Self::column_comment(column);
            if !comment.is_empty() {
                comments.push(self.add_column_comment_sql(&diff.name, &name_sql, &comment));
            }
        }

        for column in &diff.removed_columns {
            if column.default.is_some() {
                // the default constraint would orphan otherwise
                clauses.push(format!(
                    "DROP CONSTRAINT {}",
                    self.default_constraint_name(&diff.name, &column.name)
                ));
            }
            clauses.push(format!("DROP COLUMN {}", column.identifier().sql(self)));
        }

        for column_diff in &diff.changed_columns {
            let column = &column_diff.column;
            let name_sql = column.identifier().sql(self);

            let comment = Self::column_comment(column);
            if let Some(from) = &column_diff.from_column {
                let from_comment = Self::column_comment(from);
                match (!from_comment.is_empty(), !comment.is_empty()) {
                    (true, true) if from_comment != comment => comments.push(
                        self.update_column_comment_sql(&diff.name, &name_sql, &comment),
                    ),
                    (true, false) => {
                        comments.push(self.drop_column_comment_sql(&diff.name, &name_sql))
                    }
                    (false, true) => {
                        comments.push(self.add_column_comment_sql(&diff.name, &name_sql, &comment))
                    }
                    _ => {}
                }
            }
            // comment-only changes need no structural clause
            if column_diff.changed.len() == 1 && column_diff.has_changed(ColumnProperty::Comment) {
                continue;
            }

            let drop_default = Self::requires_drop_default_constraint(column_diff);
            if drop_default {
                clauses.push(format!(
                    "DROP CONSTRAINT {}",
                    self.default_constraint_name(&diff.name, &column_diff.old_name)
                ));
            }
            clauses.push(format!(
                "ALTER COLUMN {}",
                self.column_declaration_sql(&name_sql, column)?
            ));
            if column.default.is_some()
                && (drop_default || column_diff.has_changed(ColumnProperty::Default))
            {
                clauses.push(format!(
                    "ADD{}",
                    self.default_constraint_declaration_sql(&diff.name, column)
                ));
            }
        }

        for (old_name, column) in &diff.renamed_columns {
            sql.push(format!(
                "sp_RENAME '{}.{}', '{}', 'COLUMN'",
                table_sql,
                Identifier::new(old_name).sql(self),
                column.identifier().sql(self)
            ));
            if column.default.is_some() {
                // rebind the default constraint under the new column name
                clauses.push(format!(
                    "DROP CONSTRAINT {}",
                    self.default_constraint_name(&diff.name, old_name)
                ));
                clauses.push(format!(
                    "ADD{}",
                    self.default_constraint_declaration_sql(&diff.name, column)
                ));
            }
        }

        for clause in clauses {
            sql.push(format!("ALTER TABLE {table_sql} {clause}"));
        }
        sql.extend(comments);

        if let Some(new_name) = &diff.new_name {
            let new = Identifier::new(new_name);
            sql.push(format!("sp_RENAME '{}', '{}'", table_sql, new.name()));
            // default constraint names embed the table digest; patch them in
            // a generated batch since the rename invalidated the old digest
            sql.push(format!(
                "DECLARE @sql NVARCHAR(MAX) = N'';\
                 SELECT @sql += N'EXEC sp_rename N''' + dc.name + ''', N''' \
                 + REPLACE(dc.name, '{}', '{}') + ''', ''OBJECT'';' \
                 FROM sys.default_constraints dc \
                 JOIN sys.tables tbl ON dc.parent_object_id = tbl.object_id \
                 WHERE tbl.name = '{}';\
                 EXEC sp_executesql @sql",
                Self::identifier_digest(&diff.name),
                Self::identifier_digest(new_name),
                new.name()
            ));
        }

        for (old_name, index) in &diff.renamed_indexes {
            sql.push(format!(
                "EXEC sp_RENAME N'{}.{}', N'{}', N'INDEX'",
                table_sql,
                Identifier::new(old_name).sql(self),
                index.identifier().sql(self)
            ));
        }
        Ok(sql)
    }

    fn create_index_sql(&self, index: &Index, table: &str) -> String {
        self.create_index_body_sql(index, table, index.unique && !index.primary)
    }

    fn create_primary_key_sql(&self, index: &Index, table: &str) -> String {
        let placement = if index.has_flag(IndexFlag::Nonclustered) {
            " NONCLUSTERED"
        } else {
            ""
        };
        let columns = index
            .column_identifiers()
            .map(|c| c.sql(self))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "ALTER TABLE {} ADD PRIMARY KEY{} ({})",
            Identifier::new(table).sql(self),
            placement,
            columns
        )
    }

    fn create_sequence_sql(&self, sequence: &Sequence) -> Result<String, SqlGenError> {
        Ok(format!(
            "CREATE SEQUENCE {} START WITH {} INCREMENT BY {} MINVALUE {}",
            sequence.identifier().sql(self),
            sequence.start_value,
            sequence.increment_by,
            sequence.start_value
        ))
    }

    fn alter_sequence_sql(&self, sequence: &Sequence) -> Result<String, SqlGenError> {
        Ok(format!(
            "ALTER SEQUENCE {} INCREMENT BY {}",
            sequence.identifier().sql(self),
            sequence.increment_by
        ))
    }

    fn drop_sequence_sql(&self, name: &str) -> Result<String, SqlGenError> {
        Ok(format!("DROP SEQUENCE {}", Identifier::new(name).sql(self)))
    }

    fn sequence_next_val_sql(&self, name: &str) -> Result<String, SqlGenError> {
        Ok(format!(
            "SELECT NEXT VALUE FOR {}",
            Identifier::new(name).sql(self)
        ))
    }

    fn list_table_columns_sql(&self, table: &str) -> String {
        format!(
            "SELECT col.name, \
                    type.name AS type, \
                    col.max_length AS length, \
                    ~col.is_nullable AS notnull, \
                    def.definition AS [default], \
                    col.scale, \
                    col.precision, \
                    col.is_identity AS autoincrement, \
                    col.collation_name AS collation, \
                    CAST(prop.value AS NVARCHAR(MAX)) AS comment \
             FROM sys.columns AS col \
             JOIN sys.types AS type ON col.user_type_id = type.user_type_id \
             JOIN sys.objects AS obj ON col.object_id = obj.object_id \
             JOIN sys.schemas AS scm ON obj.schema_id = scm.schema_id \
             LEFT JOIN sys.default_constraints def \
               ON col.default_object_id = def.object_id \
               AND col.object_id = def.parent_object_id \
             LEFT JOIN sys.extended_properties AS prop \
               ON obj.object_id = prop.major_id \
               AND col.column_id = prop.minor_id \
               AND prop.name = 'MS_Description' \
             WHERE obj.type = 'U' AND {}",
            self.table_where_clause(table, "scm.name", "obj.name")
        )
    }

    fn list_table_indexes_sql(&self, table: &str) -> String {
        format!(
            "SELECT idx.name AS key_name, \
                    col.name AS column_name, \
                    ~idx.is_unique AS non_unique, \
                    idx.is_primary_key AS [primary], \
                    CASE idx.type \
                        WHEN '1' THEN 'clustered' \
                        WHEN '2' THEN 'nonclustered' \
                        ELSE NULL \
                    END AS flags \
             FROM sys.tables AS tbl \
             JOIN sys.schemas AS scm ON tbl.schema_id = scm.schema_id \
             JOIN sys.indexes AS idx ON tbl.object_id = idx.object_id \
             JOIN sys.index_columns AS idxcol \
               ON idx.object_id = idxcol.object_id AND idx.index_id = idxcol.index_id \
             JOIN sys.columns AS col \
               ON idxcol.object_id = col.object_id AND idxcol.column_id = col.column_id \
             WHERE {} ORDER BY idx.index_id, idxcol.key_ordinal",
            self.table_where_clause(table, "scm.name", "tbl.name")
        )
    }

    fn list_table_foreign_keys_sql(&self, table: &str) -> String {
        format!(
            "SELECT f.name AS ForeignKey, \
                    SCHEMA_NAME(f.schema_id) AS SchemaName, \
                    OBJECT_NAME(f.parent_object_id) AS TableName, \
                    COL_NAME(fc.parent_object_id, fc.parent_column_id) AS ColumnName, \
                    SCHEMA_NAME(o.schema_id) AS ReferenceSchemaName, \
                    OBJECT_NAME(f.referenced_object_id) AS ReferenceTableName, \
                    COL_NAME(fc.referenced_object_id, fc.referenced_column_id) AS ReferenceColumnName \
             FROM sys.foreign_keys AS f \
             INNER JOIN sys.foreign_key_columns AS fc \
               ON f.object_id = fc.constraint_object_id \
             INNER JOIN sys.objects AS o \
               ON o.object_id = fc.referenced_object_id \
             WHERE {}",
            self.table_where_clause(table, "SCHEMA_NAME(f.schema_id)", "OBJECT_NAME(f.parent_object_id)")
        )
    }

    fn modify_limit_query(&self, query: &str, limit: u64, offset: u64) -> String {
        limit::modify_limit_query(query, limit, offset)
    }
}
