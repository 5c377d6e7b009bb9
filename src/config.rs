//! Generator configuration.
//! Loaded once per run from `crudgen.json`, `crudgen.yml` or `crudgen.yaml`
//! (or an explicit path) and passed to the materializer.

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{BUILTIN_TEMPLATES_ROOT, CONFIG_FILES};
use crate::error::{Error, Result};

/// View settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Base layout the generated views extend
    pub extends: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { extends: "layouts.app".to_string() }
    }
}

/// Route settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub prefix: String,
    pub middleware: Vec<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self { prefix: String::new(), middleware: vec!["web".to_string(), "auth".to_string()] }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base namespace of generated code
    pub namespace: String,
    /// Container directory that receives generated modules
    pub target_dir: PathBuf,
    /// Root for relative template profile paths; the bundled `stubs/` when unset
    pub templates_root: Option<PathBuf>,
    /// Profile used when none is requested
    pub default: String,
    /// Template profile name -> directory
    pub templates: IndexMap<String, String>,
    pub view: ViewConfig,
    pub routes: RoutesConfig,
    /// Columns never offered for search
    pub searchable_excludes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut templates = IndexMap::new();
        templates.insert("laravel".to_string(), "laravel".to_string());

        Self {
            namespace: "Modules".to_string(),
            target_dir: PathBuf::from("modules"),
            templates_root: None,
            default: "laravel".to_string(),
            templates,
            view: ViewConfig::default(),
            routes: RoutesConfig::default(),
            searchable_excludes: ["id", "created_at", "updated_at", "deleted_at"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Root against which relative template profile paths are resolved.
    pub fn templates_root(&self) -> PathBuf {
        self.templates_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(BUILTIN_TEMPLATES_ROOT))
    }

    /// Makes relative directories absolute with respect to `base`.
    pub fn resolve_paths<P: AsRef<Path>>(mut self, base: P) -> Self {
        let base = base.as_ref();
        if self.target_dir.is_relative() {
            self.target_dir = base.join(&self.target_dir);
        }
        self.templates_root = self
            .templates_root
            .map(|root| if root.is_relative() { base.join(root) } else { root });
        self
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the configuration used for a run.
///
/// An explicit path must exist. Without one, the first of [`CONFIG_FILES`]
/// found in `search_dir` is used, falling back to defaults. Relative paths in
/// the result are resolved against `search_dir`.
pub fn load_config<P: AsRef<Path>>(explicit: Option<&Path>, search_dir: P) -> Result<Config> {
    let search_dir = search_dir.as_ref();

    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(Error::ConfigError(format!(
                "Invalid configuration path: {}",
                path.display()
            )))
        }
        Some(path) => Some(path.to_path_buf()),
        None => CONFIG_FILES.iter().map(|f| search_dir.join(f)).find(|p| p.is_file()),
    };

    let config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config(&std::fs::read_to_string(&path)?)?
        }
        None => {
            debug!(
                "No configuration file found (tried: {}), using defaults",
                CONFIG_FILES.join(", ")
            );
            Config::default()
        }
    };

    Ok(config.resolve_paths(search_dir))
}
