//! Error handling for crudgen.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for crudgen operations.
///
/// A refused overwrite is not represented here: it ends a run with
/// [`crate::materializer::Outcome::Aborted`] and a normal exit status.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while walking a directory tree
    #[error("Directory traversal error: {0}.")]
    WalkDirError(#[from] walkdir::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in reading the table schema
    #[error("Schema error: {0}.")]
    SchemaError(String),

    /// The resolved template profile directory does not exist
    #[error("Invalid template directory: {template_dir}.")]
    TemplateDoesNotExistError { template_dir: String },

    /// The requested template profile is not configured
    #[error("Unknown template profile: '{profile}'.")]
    UnknownTemplateProfileError { profile: String },

    /// Represents failures of interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents invalid filename rule patterns
    #[error("Glob error: {0}.")]
    GlobError(#[from] globset::Error),

    /// A single template file could not be transformed or saved
    #[error("Failed to process '{source_path}': {e_msg}.")]
    ProcessError { source_path: String, e_msg: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
