//! Common constants used throughout crudgen.

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["crudgen.json", "crudgen.yml", "crudgen.yaml"];

/// Schema file read when `--schema` is not given
pub const DEFAULT_SCHEMA_FILE: &str = "schema.yml";

/// Suffix marking a file as a template to be materialized
pub const TEMPLATE_SUFFIX: &str = ".stub";

/// Generic model marker in template file names
pub const MODEL_MARKER: &str = "Model";

/// Generic controller marker in template file names
pub const CONTROLLER_MARKER: &str = "Controller";

/// Templates root shipped with the crate
pub const BUILTIN_TEMPLATES_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/stubs");
