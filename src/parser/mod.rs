//! Collection input parsing and typed decoding

pub mod collection;
pub mod directory;

use crate::error::{ParseError, ParseResult};
use std::io::Read;
use std::path::PathBuf;

pub use collection::{decode_collection, CollectionNode, UrlField};

/// Source of a Postman collection document
#[derive(Debug, Clone)]
pub enum CollectionSource {
    /// Raw JSON string input
    String(String),
    /// Single collection file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl CollectionSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CollectionSource::String(_) => "string input".to_string(),
            CollectionSource::File(path) => format!("file: {}", path.display()),
            CollectionSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            CollectionSource::String(_) => true,
            CollectionSource::File(path) => path.exists() && path.is_file(),
            CollectionSource::Stdin => true,
        }
    }

    /// Parse the collection document from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        match self {
            CollectionSource::String(content) => parse_from_string(content),
            CollectionSource::File(path) => parse_from_file(path),
            CollectionSource::Stdin => parse_from_stdin(),
        }
    }

    /// Read content as string (if possible)
    pub fn read_content(&self) -> Result<String, std::io::Error> {
        match self {
            CollectionSource::String(content) => Ok(content.clone()),
            CollectionSource::File(path) => std::fs::read_to_string(path),
            CollectionSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// Parse a collection document from a string
fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON string".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        ParseError::new(e.to_string(), Some((e.line(), e.column())))
    })
}

/// Parse a collection document from a file
fn parse_from_file(path: &PathBuf) -> ParseResult<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ParseError::new(format!("Cannot read {}: {}", path.display(), e), None)
    })?;
    parse_from_string(&content)
}

/// Parse a collection document from standard input
fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Cannot read stdin: {}", e), None))?;
    parse_from_string(&buffer)
}
