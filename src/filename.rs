//! Destination file names for template files.
//!
//! Names are rewritten by an ordered list of [`RenameRule`]s matched against
//! the final path component. Only files carrying the template suffix are
//! materialized; everything else is left alone.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use log::debug;

use crate::constants::{CONTROLLER_MARKER, MODEL_MARKER, TEMPLATE_SUFFIX};
use crate::error::Result;

/// What a matching rule does to the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameAction {
    /// Removes the suffix and marks the source as a template to delete afterwards.
    StripTemplateSuffix(String),
    /// Replaces the last occurrence of `marker` with `replacement`.
    ReplaceLast { marker: String, replacement: String },
}

/// A glob over the file name paired with the rewrite it triggers.
#[derive(Debug, Clone)]
pub struct RenameRule {
    pattern: String,
    matcher: GlobMatcher,
    action: RenameAction,
}

impl RenameRule {
    pub fn new<S: Into<String>>(pattern: S, action: RenameAction) -> Result<Self> {
        let pattern = pattern.into();
        let matcher = Glob::new(&pattern)?.compile_matcher();
        Ok(Self { pattern, matcher, action })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }

    /// Applies the action to `file_name`, or returns `None` if the rule does not match.
    pub fn apply(&self, file_name: &str) -> Option<String> {
        if !self.is_match(file_name) {
            return None;
        }
        match &self.action {
            RenameAction::StripTemplateSuffix(suffix) => {
                file_name.strip_suffix(suffix.as_str()).map(str::to_string)
            }
            RenameAction::ReplaceLast { marker, replacement } => {
                file_name.rfind(marker.as_str()).map(|idx| {
                    format!(
                        "{}{}{}",
                        &file_name[..idx],
                        replacement,
                        &file_name[idx + marker.len()..]
                    )
                })
            }
        }
    }
}

/// Where a template file ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write to `path`; remove the source afterwards when `delete_original` is set.
    Write { path: PathBuf, delete_original: bool },
    /// Not a template file.
    Skip,
}

/// Ordered rename rules for one module.
#[derive(Debug, Clone)]
pub struct FilenameTransformer {
    template_rule: RenameRule,
    rules: Vec<RenameRule>,
}

impl FilenameTransformer {
    /// Standard rules: strip `.stub`, then `Model` -> `<ModuleName>` and
    /// `Controller` -> `<ModuleName>Controller` right before the extension.
    pub fn for_module(module_name: &str) -> Result<Self> {
        let template_rule = RenameRule::new(
            format!("*{TEMPLATE_SUFFIX}"),
            RenameAction::StripTemplateSuffix(TEMPLATE_SUFFIX.to_string()),
        )?;
        let rules = vec![
            RenameRule::new(
                format!("*{MODEL_MARKER}.*"),
                RenameAction::ReplaceLast {
                    marker: MODEL_MARKER.to_string(),
                    replacement: module_name.to_string(),
                },
            )?,
            RenameRule::new(
                format!("*{CONTROLLER_MARKER}.*"),
                RenameAction::ReplaceLast {
                    marker: CONTROLLER_MARKER.to_string(),
                    replacement: format!("{module_name}{CONTROLLER_MARKER}"),
                },
            )?,
        ];
        Ok(Self { template_rule, rules })
    }

    pub fn new(template_rule: RenameRule, rules: Vec<RenameRule>) -> Self {
        Self { template_rule, rules }
    }

    /// Computes the destination name of a single file name.
    pub fn transform_name(&self, file_name: &str) -> Option<String> {
        let stripped = self.template_rule.apply(file_name)?;
        let renamed = self
            .rules
            .iter()
            .fold(stripped, |name, rule| rule.apply(&name).unwrap_or(name));
        Some(renamed)
    }

    /// Computes the destination of a template path. The directory part is kept.
    pub fn transform<P: AsRef<Path>>(&self, template_path: P) -> Destination {
        let template_path = template_path.as_ref();
        let Some(file_name) = template_path.file_name().and_then(|n| n.to_str()) else {
            return Destination::Skip;
        };

        match self.transform_name(file_name) {
            Some(new_name) if !new_name.is_empty() => {
                let path = template_path.with_file_name(new_name);
                debug!("Mapped '{}' to '{}'", template_path.display(), path.display());
                Destination::Write { path, delete_original: true }
            }
            _ => {
                debug!("Skipping non-template file '{}'", template_path.display());
                Destination::Skip
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_last_only_touches_last_occurrence() {
        let rule = RenameRule::new(
            "*Model.*",
            RenameAction::ReplaceLast { marker: "Model".into(), replacement: "Post".into() },
        )
        .unwrap();
        assert_eq!(rule.apply("ModelModel.php").as_deref(), Some("ModelPost.php"));
        assert_eq!(rule.apply("Model.txt.bak").as_deref(), Some("Post.txt.bak"));
        assert_eq!(rule.apply("Models.php"), None);
    }

    #[test]
    fn test_suffix_only_name_is_skipped() {
        let transformer = FilenameTransformer::for_module("Post").unwrap();
        assert_eq!(transformer.transform(".stub"), Destination::Skip);
    }
}
