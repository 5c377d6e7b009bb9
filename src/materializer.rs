//! Module generation.
//!
//! Copies a template profile into the module directory, then rewrites every
//! template file in place: new name from the [`FilenameTransformer`], new
//! content from the module's [`TokenMap`]. A failing file is logged and the
//! remaining files are still processed.

use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::column::ColumnSet;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::filename::{Destination, FilenameTransformer};
use crate::naming::{to_array_elements, ModuleNames};
use crate::prompt::Prompter;
use crate::renderer;
use crate::template::resolve_template_dir;
use crate::tokens::{unresolved_placeholders, TokenMap};

/// Result of a generation run that was not aborted by an error.
#[derive(Debug)]
pub enum Outcome {
    /// The module directory existed and overwriting was declined. Nothing changed.
    Aborted { module_path: PathBuf },
    Generated(Report),
}

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct Report {
    pub module_path: PathBuf,
    pub template_dir: PathBuf,
    /// Destination files written, in processing order
    pub generated: Vec<PathBuf>,
    /// Per-file failures; the run still counts as successful
    pub failures: Vec<Error>,
}

/// Builds the token map for one module, in template declaration order.
pub fn module_tokens(config: &Config, names: &ModuleNames, columns: &ColumnSet) -> TokenMap {
    TokenMap::new()
        .with(":Namespace:", config.namespace.as_str())
        .with(":table:", names.table.as_str())
        .with(":module_name:", names.snake.as_str())
        .with(":module-name:", names.kebab.as_str())
        .with(":module name:", names.lower_words.as_str())
        .with(":Module Name:", names.title_words.as_str())
        .with(":moduleName:", names.camel.as_str())
        .with(":ModuleName:", names.pascal.as_str())
        .with(
            ":SEARCHABLE_COLUMNS:",
            renderer::searchable_columns(columns, &config.searchable_excludes),
        )
        .with(":VALIDATION_RULES:", renderer::validation_rules(columns))
        .with(":LANG_FIELDS:", renderer::lang_fields(columns))
        .with(":TABLE_HEADERS:", renderer::table_headers(columns))
        .with(":TABLE_FIELDS:", renderer::table_fields(columns))
        .with(":DETAIL_FIELDS:", renderer::detail_fields(columns, &names.camel))
        .with(":FORM_CREATE_FIELDS:", renderer::form_create_fields(columns))
        .with(":FORM_EDIT_FIELDS:", renderer::form_edit_fields(columns, &names.camel))
        .with(":TABLE_VIEW_FIELDS:", renderer::table_view_fields(columns))
        .with(":VIEW_EXTENDS:", config.view.extends.as_str())
        .with(":route-prefix:", config.routes.prefix.as_str())
        .with(":route-middleware:", to_array_elements(&config.routes.middleware))
        .with(":route-url-prefix:", names.route_url_prefix(&config.routes.prefix))
}

/// Writes `content` next to `path` first and renames it into place, so a
/// failed write never leaves a truncated destination behind.
fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::ConfigError(format!("Invalid path: {}", path.display())))?;
    let staging = path.with_file_name(format!(".{file_name}.crudgen-tmp"));

    if let Err(e) = fs::write(&staging, content) {
        let _ = fs::remove_file(&staging);
        return Err(Error::IoError(e));
    }
    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        Error::IoError(e)
    })
}

/// Recursively copies `source` into `dest`.
pub fn copy_dir_all<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Substitutes tokens in `source` and saves the result at `dest`.
///
/// Content that is not UTF-8 is written through unchanged.
pub fn replace_and_save(
    source: &Path,
    tokens: &TokenMap,
    dest: &Path,
    delete_original: bool,
) -> Result<()> {
    let content = match String::from_utf8(fs::read(source)?) {
        Ok(text) => {
            let rendered = tokens.substitute(&text);
            let leftover = unresolved_placeholders(&rendered);
            if !leftover.is_empty() {
                warn!(
                    "Unresolved placeholders in '{}': {}",
                    dest.display(),
                    leftover.join(", ")
                );
            }
            rendered.into_bytes()
        }
        Err(e) => {
            debug!("'{}' is not UTF-8, copying content unchanged", source.display());
            e.into_bytes()
        }
    };

    write_file(dest, &content)?;
    if delete_original && source != dest {
        fs::remove_file(source)?;
    }
    Ok(())
}

/// Generates modules from template profiles.
pub struct Materializer<'a> {
    config: &'a Config,
    prompt: &'a dyn Prompter,
}

impl<'a> Materializer<'a> {
    pub fn new(config: &'a Config, prompt: &'a dyn Prompter) -> Self {
        Self { config, prompt }
    }

    /// Runs one generation for `table`.
    ///
    /// # Arguments
    /// * `table` - Source table name
    /// * `columns` - Columns of the table, in declaration order
    /// * `template` - Template profile name; the configured default when `None`
    /// * `force` - Overwrite an existing module directory without asking
    ///
    /// # Errors
    /// * `Error::UnknownTemplateProfileError` / `Error::TemplateDoesNotExistError`
    ///   before anything on disk is touched
    /// * IO errors while clearing or copying the module directory
    pub fn generate(
        &self,
        table: &str,
        columns: &ColumnSet,
        template: Option<&str>,
        force: bool,
    ) -> Result<Outcome> {
        let names = ModuleNames::from_table(table);
        let module_path = names.module_path(&self.config.target_dir);
        let template_dir = resolve_template_dir(self.config, template)?;
        let transformer = FilenameTransformer::for_module(&names.pascal)?;

        if module_path.starts_with(&template_dir) {
            return Err(Error::ConfigError(format!(
                "Module directory {} is inside the template directory {}",
                module_path.display(),
                template_dir.display()
            )));
        }

        if module_path.is_dir() {
            let overwrite = self.prompt.confirm(
                force,
                format!(
                    "Folder {} already exist, do you want to overwrite it?",
                    module_path.display()
                ),
            )?;
            if !overwrite {
                info!("Keeping existing module {}", module_path.display());
                return Ok(Outcome::Aborted { module_path });
            }
            debug!("Removing {}", module_path.display());
            fs::remove_dir_all(&module_path)?;
        }

        println!("Creating modules directory...");
        fs::create_dir_all(&module_path)?;

        println!(
            "Generating code from {} to {}",
            template_dir.display(),
            module_path.display()
        );
        copy_dir_all(&template_dir, &module_path)?;

        let tokens = module_tokens(self.config, &names, columns);
        let files = WalkDir::new(&module_path)
            .sort_by_file_name()
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect::<Vec<_>>();

        let mut report = Report { module_path, template_dir, ..Report::default() };

        for file in files {
            let Destination::Write { path, delete_original } = transformer.transform(&file) else {
                continue;
            };
            println!("{}", path.display());

            match replace_and_save(&file, &tokens, &path, delete_original) {
                Ok(()) => report.generated.push(path),
                Err(e) => {
                    let err = Error::ProcessError {
                        source_path: file.display().to_string(),
                        e_msg: e.to_string(),
                    };
                    error!("{err}");
                    report.failures.push(err);
                }
            }
        }

        Ok(Outcome::Generated(report))
    }
}
