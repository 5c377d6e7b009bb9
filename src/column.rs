//! Column metadata supplied by the schema source.
//!
//! A [`ColumnSet`] keeps the declaration order of the table and is unique by
//! column name. Renderers derive everything they need from the SQL type
//! string through [`ColumnKind`].

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Metadata record for one database table column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub sql_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

impl ColumnDescriptor {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, sql_type: T, nullable: bool) -> Self {
        Self { name: name.into(), sql_type: sql_type.into(), nullable, default: None }
    }

    /// Classifies the column by its SQL type.
    pub fn kind(&self) -> ColumnKind {
        ColumnKind::from_sql_type(&self.sql_type)
    }

    /// Human-readable label, e.g. `created_at` becomes `Created At`.
    pub fn label(&self) -> String {
        crate::naming::to_label(&self.name)
    }
}

/// Ordered columns of one table, unique by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSet {
    columns: IndexMap<String, ColumnDescriptor>,
}

impl ColumnSet {
    /// Builds a set from columns in declaration order.
    ///
    /// # Errors
    /// * `Error::SchemaError` if two columns share a name
    pub fn new<I: IntoIterator<Item = ColumnDescriptor>>(columns: I) -> Result<Self> {
        let mut set = IndexMap::new();
        for column in columns {
            if set.contains_key(&column.name) {
                return Err(Error::SchemaError(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
            set.insert(column.name.clone(), column);
        }
        Ok(Self { columns: set })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.values()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.get(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }
}

/// Rendering-relevant classification of a SQL column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// CHAR / VARCHAR with an optional declared length
    String { max: Option<u32> },
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    Json,
    Other,
}

fn sql_type_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([a-z][a-z0-9 ]*?)\s*(?:\(\s*(\d+)\s*(?:,\s*\d+\s*)?\))?(?:\s+unsigned)?\s*$")
            .expect("valid sql type pattern")
    })
}

impl ColumnKind {
    /// Parses a SQL type such as `varchar(255)`, `bigint unsigned` or `decimal(8,2)`.
    /// Unrecognised types map to [`ColumnKind::Other`].
    pub fn from_sql_type(sql_type: &str) -> Self {
        let lowered = sql_type.to_lowercase();
        let Some(caps) = sql_type_regex().captures(&lowered) else {
            return Self::Other;
        };
        let base = caps.get(1).map_or("", |m| m.as_str());
        let length = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());

        match base {
            "char" | "varchar" | "character varying" | "character" | "string" | "nvarchar" => {
                Self::String { max: length }
            }
            "text" | "tinytext" | "mediumtext" | "longtext" => Self::Text,
            "tinyint" if length == Some(1) => Self::Boolean,
            "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint" | "serial"
            | "bigserial" => Self::Integer,
            "decimal" | "numeric" | "float" | "double" | "double precision" | "real" => {
                Self::Decimal
            }
            "bool" | "boolean" => Self::Boolean,
            "date" => Self::Date,
            "datetime" | "timestamp" | "timestamptz" | "timestamp with time zone"
            | "timestamp without time zone" => Self::DateTime,
            "time" => Self::Time,
            "json" | "jsonb" => Self::Json,
            _ => Self::Other,
        }
    }

    /// HTML input type used for form controls.
    pub fn input_type(self) -> InputType {
        match self {
            Self::Text | Self::Json => InputType::Textarea,
            Self::Integer | Self::Decimal => InputType::Number,
            Self::Boolean => InputType::Checkbox,
            Self::Date => InputType::Date,
            Self::DateTime => InputType::DateTimeLocal,
            Self::Time => InputType::Time,
            Self::String { .. } | Self::Other => InputType::Text,
        }
    }
}

/// Form control shapes emitted by the form renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Textarea,
    Number,
    Checkbox,
    Date,
    DateTimeLocal,
    Time,
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::DateTimeLocal => "datetime-local",
            Self::Time => "time",
        };
        write!(f, "{name}")
    }
}
