//! Error types and handling infrastructure for collection export

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error types for the export process
#[derive(Debug, thiserror::Error)]
pub enum ExportErrorKind {
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        location: Option<(usize, usize)>,
    },

    #[error("Spreadsheet write error: {message}")]
    Write { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Export failed: {message}")]
    ExportFailed { message: String },
}

impl ExportErrorKind {
    pub fn json_parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::JsonParse { message, location }
    }

    pub fn write(message: String) -> Self {
        Self::Write { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    WriteError(#[from] WriteError),

    #[error("{kind}")]
    Export {
        kind: ExportErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ExportError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn write(message: String) -> Self {
        Self::WriteError(WriteError::save_failed(message))
    }

    pub fn export(kind: ExportErrorKind) -> Self {
        Self::Export { kind, source: None }
    }

    pub fn export_with_source(kind: ExportErrorKind, source: anyhow::Error) -> Self {
        Self::Export {
            kind,
            source: Some(source),
        }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::WriteError(err) => {
                format!("Spreadsheet write error: {}", err)
            }
            Self::Export { kind, .. } => match kind {
                ExportErrorKind::Io { message, path } => match path {
                    Some(path) => format!("IO error for {}: {}", path.display(), message),
                    None => format!("IO error: {}", message),
                },
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Spreadsheet emission errors
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to save spreadsheet: {message}")]
    SaveFailed { message: String },

    #[error("Worksheet error: {message}")]
    Worksheet { message: String },

    #[error("CSV error: {message}")]
    Csv { message: String },
}

impl WriteError {
    pub fn save_failed(message: String) -> Self {
        Self::SaveFailed { message }
    }

    pub fn worksheet(message: String) -> Self {
        Self::Worksheet { message }
    }

    pub fn csv(message: String) -> Self {
        Self::Csv { message }
    }
}

impl From<rust_xlsxwriter::XlsxError> for WriteError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::SaveFailed {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for WriteError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience result type for write operations
pub type WriteResult<T> = Result<T, WriteError>;
