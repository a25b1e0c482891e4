//! Error types for AVPR → reST conversion

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while decoding the shape of a protocol document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A record/enum/fixed definition lacks the attribute its kind requires
    #[error("{kind} `{name}` is missing required attribute `{attribute}`")]
    MissingAttribute {
        kind: &'static str,
        name: String,
        attribute: &'static str,
    },
    /// A kind-specific attribute has the wrong shape
    #[error("{kind} `{name}` has invalid attribute `{attribute}`: {reason}")]
    InvalidAttribute {
        kind: &'static str,
        name: String,
        attribute: &'static str,
        reason: String,
    },
    /// Compound type expression other than `array` or `map`
    #[error("Unsupported compound type `{0}`; only `array` and `map` are recognised")]
    UnsupportedType(String),
    /// Type expression that is neither a string, a list nor a typed object
    #[error("Invalid type expression: {0}")]
    InvalidTypeExpression(String),
}

/// Errors raised by the markdown → reST document converter
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter program could not be started
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// IO error while talking to the converter
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The converter exited unsuccessfully
    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    /// Converter output is not valid UTF-8
    #[error("Invalid UTF-8 in converter output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Failure reported by a custom converter
    #[error("{0}")]
    Other(String),
}

/// Top-level conversion error type
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Output file could not be written
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Input is not valid JSON or not a valid protocol document
    #[error("Invalid protocol in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Input path has no file name to derive the output name from
    #[error("Cannot derive an output name from {0:?}")]
    InvalidInputPath(PathBuf),
    /// Documentation conversion failed
    #[error("Documentation conversion failed: {0}")]
    Convert(#[from] ConvertError),
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;
