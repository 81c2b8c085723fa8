//! Flattening of the collection tree into one record per request

use crate::parser::{CollectionNode, UrlField};

/// Characters that are unsafe as filesystem path components or cell text
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Fallback name for requests without a usable name
pub const UNNAMED_REQUEST: &str = "Unnamed Request";

/// Fallback HTTP method for requests without one
pub const DEFAULT_METHOD: &str = "GET";

/// One flattened output row: folder path plus the three request fields
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    pub folders: Vec<String>,
    pub name: String,
    pub method: String,
    pub url: String,
}

impl FlatRecord {
    /// Folder depth of this record before any padding
    pub fn depth(&self) -> usize {
        self.folders.len()
    }

    /// All cells of the record in output order
    pub fn into_cells(self) -> Vec<String> {
        let mut cells = self.folders;
        cells.push(self.name);
        cells.push(self.method);
        cells.push(self.url);
        cells
    }
}

/// Replace invalid filename characters with `_` and trim whitespace.
///
/// Pure and idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Flatten a decoded collection tree into records, depth-first in document
/// order. A tree with no requests yields an empty vector.
pub fn flatten_collection(nodes: &[CollectionNode]) -> Vec<FlatRecord> {
    let mut records = Vec::new();
    flatten_into(nodes, &[], &mut records);
    records
}

fn flatten_into(nodes: &[CollectionNode], path: &[String], records: &mut Vec<FlatRecord>) {
    for node in nodes {
        match node {
            CollectionNode::Folder { name, children } => {
                // A folder named "A/B" expands into two hierarchy levels;
                // Postman sometimes encodes nested paths in one folder name.
                let mut extended = path.to_vec();
                extended.extend(folder_segments(name));
                flatten_into(children, &extended, records);
            }
            CollectionNode::Request { name, method, url } => {
                let name = match name.as_deref().map(normalize_name) {
                    Some(normalized) if !normalized.is_empty() => normalized,
                    _ => UNNAMED_REQUEST.to_string(),
                };
                let method = method.clone().unwrap_or_else(|| DEFAULT_METHOD.to_string());
                records.push(FlatRecord {
                    folders: path.to_vec(),
                    name,
                    method,
                    url: resolve_url(url.as_ref()),
                });
            }
        }
    }
}

/// Split a folder name on `/` into normalized path segments.
///
/// Empty parts are dropped before normalization; parts that normalize to the
/// empty string are kept as empty segments.
fn folder_segments(name: &str) -> Vec<String> {
    name.trim()
        .split('/')
        .filter(|part| !part.is_empty())
        .map(normalize_name)
        .collect()
}

/// Resolve a request URL field to a single string.
///
/// Precedence: plain string verbatim, then a non-empty `raw` component, then
/// synthesis from protocol/host/path. An empty `raw` is treated the same as an
/// absent one. Absent or unrecognized fields resolve to the empty string.
pub fn resolve_url(url: Option<&UrlField>) -> String {
    match url {
        Some(UrlField::Raw(raw)) => raw.clone(),
        Some(UrlField::Structured {
            raw,
            protocol,
            host,
            path,
        }) => match raw.as_deref() {
            Some(raw) if !raw.is_empty() => raw.to_string(),
            _ => synthesize_url(protocol.as_deref(), host, path),
        },
        None => String::new(),
    }
}

fn synthesize_url(protocol: Option<&str>, host: &[String], path: &[String]) -> String {
    let protocol = protocol.unwrap_or("https");
    let synthesized = format!("{}://{}/{}", protocol, host.join("."), path.join("/"));
    synthesized
        .strip_suffix('/')
        .map(str::to_string)
        .unwrap_or(synthesized)
}
