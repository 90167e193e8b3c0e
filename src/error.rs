//! Crate-level error type and `Result` alias.
//! Usage mistakes, filesystem failures and transform engine failures are kept
//! apart so the reporter can choose a message and exit status per variant.
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::TransformError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Only one input can be compiled at a time, got {count}")]
    OneAtATime { count: usize },

    #[error("Input given twice: positional {positional:?} and --input {flag:?}")]
    DuplicateImportOptions { positional: PathBuf, flag: PathBuf },

    #[error("Invalid --target value: {value}. Expected name:version[,name:version...]")]
    BadTarget { value: String },

    #[error("{input:?} is a directory, an --output directory is required")]
    MissingOutputDir { input: PathBuf },

    #[error("An --output file is required when writing an external source map")]
    MissingOutputFile,

    #[error("{path:?}: {source}")]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

impl Error {
    pub fn fs<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::Fs {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::OneAtATime { .. } => "ONE_AT_A_TIME",
            Error::DuplicateImportOptions { .. } => "DUPLICATE_IMPORT_OPTIONS",
            Error::BadTarget { .. } => "BAD_TARGET",
            Error::MissingOutputDir { .. } => "MISSING_OUTPUT_DIR",
            Error::MissingOutputFile => "MISSING_OUTPUT_FILE",
            Error::Fs { .. } | Error::Io(_) => "IO_ERROR",
            Error::Transform(_) => "TRANSFORM_ERROR",
        }
    }

    /// True for mistakes in how the command was invoked, as opposed to
    /// failures while doing the work.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::OneAtATime { .. }
                | Error::DuplicateImportOptions { .. }
                | Error::BadTarget { .. }
                | Error::MissingOutputDir { .. }
                | Error::MissingOutputFile
        )
    }
}
