//! Template profile resolution.
//!
//! A profile name maps to a directory that is either absolute or relative to
//! the templates root.

use log::debug;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};

/// Represents where a template profile lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Absolute directory configured for the profile
    Absolute(PathBuf),
    /// Directory below the templates root
    Builtin { root: PathBuf, dir: String },
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Absolute(path) => write!(f, "directory: '{}'", path.display()),
            TemplateSource::Builtin { root, dir } => {
                write!(f, "templates root '{}': '{dir}'", root.display())
            }
        }
    }
}

impl TemplateSource {
    pub fn from_config(config: &Config, profile: &str) -> Result<Self> {
        let dir = config
            .templates
            .get(profile)
            .ok_or_else(|| Error::UnknownTemplateProfileError { profile: profile.to_string() })?;

        let path = PathBuf::from(dir);
        if path.is_absolute() {
            Ok(Self::Absolute(path))
        } else {
            Ok(Self::Builtin { root: config.templates_root(), dir: dir.clone() })
        }
    }

    pub fn path(&self) -> PathBuf {
        match self {
            Self::Absolute(path) => path.clone(),
            Self::Builtin { root, dir } => root.join(dir),
        }
    }
}

/// Resolves a profile (or the configured default) to an existing directory.
///
/// # Errors
/// * `Error::UnknownTemplateProfileError` if the profile is not configured
/// * `Error::TemplateDoesNotExistError` if the directory is missing
pub fn resolve_template_dir(config: &Config, profile: Option<&str>) -> Result<PathBuf> {
    let profile = profile.unwrap_or(config.default.as_str());
    let source = TemplateSource::from_config(config, profile)?;
    debug!("Template profile '{}' resolves to {}", profile, source);

    let dir = source.path();
    if !dir.is_dir() {
        return Err(Error::TemplateDoesNotExistError { template_dir: dir.display().to_string() });
    }
    Ok(dir)
}
