//! Column model

use crate::schema::Identifier;
use crate::types::LogicalType;

/// A column default value, as supplied by the caller
///
/// Rendering is dialect- and column-type-dependent: an integer column renders
/// its default as a bare number while a string column renders the same value
/// as a quoted literal, so the raw value is carried unrendered.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl DefaultValue {
    pub fn text(value: impl Into<String>) -> Self {
        DefaultValue::Text(value.into())
    }

    /// The value as unquoted SQL text.
    pub fn raw(&self) -> String {
        match self {
            DefaultValue::Int(v) => v.to_string(),
            DefaultValue::Float(v) => v.to_string(),
            DefaultValue::Text(v) => v.clone(),
            DefaultValue::Bool(v) => (if *v { "1" } else { "0" }).to_string(),
        }
    }
}

/// A dialect-neutral column definition
///
/// `name` keeps the caller's raw spelling; explicit quote markers are
/// interpreted at render time via [`Identifier`]. Columns are NOT NULL by
/// default, matching the differencing engine's convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub logical_type: LogicalType,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub fixed: bool,
    pub notnull: bool,
    pub autoincrement: bool,
    pub default: Option<DefaultValue>,
    pub comment: Option<String>,
    pub collation: Option<String>,
}

impl Column {
    pub fn new(name: &str, logical_type: LogicalType) -> Self {
        Column {
            name: name.to_string(),
            logical_type,
            length: None,
            precision: None,
            scale: None,
            fixed: false,
            notnull: true,
            autoincrement: false,
            default: None,
            comment: None,
            collation: None,
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Marks the column as accepting NULL.
    pub fn nullable(mut self) -> Self {
        self.notnull = false;
        self
    }

    pub fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn identifier(&self) -> Identifier {
        Identifier::new(&self.name)
    }
}
