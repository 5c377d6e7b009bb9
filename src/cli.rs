//! Command-line interface implementation for crudgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_SCHEMA_FILE;

/// Command-line arguments structure for crudgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "crudgen: generate a CRUD module from a table schema", long_about = None)]
pub struct Args {
    /// Code will be generated based on this table schema.
    /// When omitted, the table is chosen interactively.
    #[arg(short, long, value_name = "TABLE")]
    pub table: Option<String>,

    /// Template profile to generate from (defaults to the configured profile)
    #[arg(long, value_name = "PROFILE")]
    pub template: Option<String>,

    /// Overwrite the module directory if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Schema file describing the tables (JSON or YAML)
    #[arg(short, long, value_name = "SCHEMA", default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,

    /// Configuration file (defaults to crudgen.json / crudgen.yml / crudgen.yaml)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
