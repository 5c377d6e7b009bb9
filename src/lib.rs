//! crudgen generates CRUD modules from database table schemas.
//! A template profile is copied into a module directory and its files are
//! renamed and filled with names and field blocks derived from the table's
//! columns.

/// Command-line interface module for the crudgen application
pub mod cli;

/// Column descriptors and SQL type classification
pub mod column;

/// Configuration handling
/// Supports JSON and YAML formats (crudgen.json, crudgen.yml, crudgen.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for the crudgen application
pub mod error;

/// Template file name rewriting
pub mod filename;

pub mod logger;

/// Module generation orchestration
pub mod materializer;

/// Module name spellings derived from table names
pub mod naming;

/// User input and interaction handling
pub mod prompt;

/// Field renderers producing the column-derived blocks
pub mod renderer;

/// Schema sources listing tables and their columns
pub mod schema;

/// Template profile resolution
pub mod template;

/// Literal token substitution
pub mod tokens;
