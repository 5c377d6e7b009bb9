//! crudgen's application entry point.
//! Parses arguments, loads configuration and schema, and hands the selected
//! table to the materializer.

use crudgen::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    logger::init_logger,
    materializer::{Materializer, Outcome},
    prompt::DialoguerPrompter,
    schema::{choose_table, FileSchema, SchemaSource},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads configuration and the schema file
/// 2. Picks the table (interactively when `--table` is missing)
/// 3. Generates the module from the template profile
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let config = load_config(args.config.as_deref(), std::env::current_dir()?)?;
    let schema = FileSchema::load(&args.schema)?;

    let table = match args.table {
        Some(table) => table,
        None => choose_table(&schema, &prompt)?,
    };
    let columns = schema.list_columns(&table)?;

    let materializer = Materializer::new(&config, &prompt);
    match materializer.generate(&table, &columns, args.template.as_deref(), args.force)? {
        Outcome::Aborted { module_path } => {
            println!("Module {} left untouched.", module_path.display());
        }
        Outcome::Generated(report) => {
            if !report.failures.is_empty() {
                log::warn!("{} file(s) could not be generated", report.failures.len());
            }
            println!(
                "Module generation completed successfully in {}.",
                report.module_path.display()
            );
        }
    }
    Ok(())
}
