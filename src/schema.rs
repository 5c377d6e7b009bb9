//! Table schema sources.
//!
//! Generation only needs table names and ordered column descriptors, so the
//! schema collaborator is a small trait. [`FileSchema`] reads a JSON or YAML
//! document mapping table names to column lists:
//!
//! ```yaml
//! blog_posts:
//!   - { name: id, type: bigint unsigned }
//!   - { name: title, type: varchar(255) }
//!   - { name: body, type: text, nullable: true }
//! ```

use indexmap::IndexMap;
use log::debug;
use std::path::Path;

use crate::column::{ColumnDescriptor, ColumnSet};
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// Provides table names and their columns.
pub trait SchemaSource {
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Columns of `table`, in declaration order.
    fn list_columns(&self, table: &str) -> Result<ColumnSet>;
}

/// Schema loaded from a JSON or YAML file.
#[derive(Debug, Clone, Default)]
pub struct FileSchema {
    tables: IndexMap<String, Vec<ColumnDescriptor>>,
}

impl FileSchema {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::SchemaError(format!(
                "schema file not found: {}",
                path.display()
            )));
        }
        debug!("Loading schema from {}", path.display());
        Self::parse(&std::fs::read_to_string(path)?)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let tables: IndexMap<String, Vec<ColumnDescriptor>> = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| Error::SchemaError(format!("invalid schema format: {e}")))?,
        };
        Ok(Self { tables })
    }
}

impl SchemaSource for FileSchema {
    fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.keys().cloned().collect())
    }

    fn list_columns(&self, table: &str) -> Result<ColumnSet> {
        let columns = self
            .tables
            .get(table)
            .ok_or_else(|| Error::SchemaError(format!("unknown table '{table}'")))?;
        ColumnSet::new(columns.iter().cloned())
    }
}

/// Asks the user to pick one of the tables known to `source`.
pub fn choose_table(source: &dyn SchemaSource, prompter: &dyn Prompter) -> Result<String> {
    let tables = source.list_tables()?;
    if tables.is_empty() {
        return Err(Error::SchemaError("schema contains no tables".to_string()));
    }
    let index = prompter.select("Choose table".to_string(), &tables)?;
    tables
        .get(index)
        .cloned()
        .ok_or_else(|| Error::PromptError(format!("invalid table selection: {index}")))
}
