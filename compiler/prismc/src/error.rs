//! Errors that stop the CLI before or while reading input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing value for '{0}'")]
    MissingValue(&'static str),

    #[error("invalid line number '{0}'")]
    InvalidLine(String),

    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    #[error("invalid color mode '{0}' (expected auto, always or never)")]
    InvalidColor(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("no input: give a file path or -e <code>")]
    NoInput,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

impl CliError {
    /// Classify an I/O failure on `path`.
    pub(crate) fn read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            _ => CliError::Read { path, source },
        }
    }
}
