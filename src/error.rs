//! Error handling for the rtpa application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for rtpa operations.
///
/// This enum represents all possible errors that can occur while scaffolding a project.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// A tool required by the run is not installed or not on the PATH
    #[error("{tool} is not installed or not accessible. {hint}")]
    ToolMissing { tool: String, hint: String },

    /// The project name contains characters outside `[A-Za-z0-9_-]`
    #[error("Invalid project name '{name}'. Project name must contain only letters, numbers, hyphens, and underscores.")]
    InvalidName { name: String },

    /// The project directory is already present in the working directory
    #[error("The folder '{}' already exists. Please choose another name or delete the existing folder.", target.display())]
    TargetExists { target: PathBuf },

    /// An external command exited unsuccessfully or could not be started
    #[error("Command failed: {command}")]
    CommandExecution { command: String, stderr: String },

    /// A generated file could not be written
    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory of the generated project could not be created
    #[error("Failed to create directory '{}': {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The project's package.json could not be read, parsed or patched
    #[error("Failed to update '{}': {reason}", path.display())]
    PackageManifest { path: PathBuf, reason: String },

    /// The repository hosting API answered with a non-success status
    #[error("GitHub API error ({status}): {message}")]
    RemoteApi { status: u16, message: String },

    /// The clone URL returned by the API cannot carry push credentials
    #[error("Unusable repository URL '{url}': {reason}")]
    InvalidRemoteUrl { url: String, reason: String },

    /// The HTTP request to the repository hosting API failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Prompts were requested but stdin/stderr is not an interactive terminal
    #[error("The current environment does not support interactive prompts. Please run this in a compatible terminal (e.g., Bash, Zsh, PowerShell).")]
    PromptUnsupported,

    /// Any other failure reported by the prompt library
    #[error("Prompt error: {0}")]
    Prompt(dialoguer::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::NotConnected => {
                Error::PromptUnsupported
            }
            other => Error::Prompt(other),
        }
    }
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    match &err {
        Error::PromptUnsupported => {
            eprintln!("❌ Error: {err}");
            eprintln!("   Flags such as `--simple <name> --skip-lint --skip-publish` avoid most prompts.");
        }
        Error::CommandExecution { command, .. } => {
            log::debug!("{err:?}");
            eprintln!("\n❌ Error: execution failed: {command}");
        }
        _ => eprintln!("❌ Error: {err}"),
    }
    std::process::exit(1);
}
