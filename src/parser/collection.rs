//! Typed decoding of the Postman collection tree
//!
//! The raw document is shape-dispatched once, right after JSON parsing: an
//! object carrying an `item` key is a folder, an object carrying a `request`
//! key is a request, anything else is skipped. Downstream code operates on
//! `CollectionNode` and never re-inspects raw JSON keys.

use serde_json::Value;

/// One node of the decoded collection tree
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionNode {
    /// A folder with a name and ordered child nodes
    Folder {
        name: String,
        children: Vec<CollectionNode>,
    },
    /// A leaf request with name, HTTP method and URL
    Request {
        name: Option<String>,
        method: Option<String>,
        url: Option<UrlField>,
    },
}

/// The URL field of a request, as found in the document
#[derive(Debug, Clone, PartialEq)]
pub enum UrlField {
    /// A single pre-assembled URL string
    Raw(String),
    /// A structured URL broken into components
    Structured {
        raw: Option<String>,
        protocol: Option<String>,
        host: Vec<String>,
        path: Vec<String>,
    },
}

/// Decode the top-level `item` array of a collection document.
///
/// A document without a usable `item` tree decodes to an empty node list;
/// the caller treats zero extracted requests as "nothing to export".
pub fn decode_collection(document: &Value) -> Vec<CollectionNode> {
    match document.get("item").and_then(Value::as_array) {
        Some(items) => decode_items(items),
        None => Vec::new(),
    }
}

/// Decode an ordered sequence of folder/request nodes
pub fn decode_items(items: &[Value]) -> Vec<CollectionNode> {
    items.iter().filter_map(decode_node).collect()
}

fn decode_node(value: &Value) -> Option<CollectionNode> {
    let object = value.as_object()?;

    // "item" wins over "request" when both are present
    if let Some(children) = object.get("item") {
        let children = children
            .as_array()
            .map(|items| decode_items(items))
            .unwrap_or_default();
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Some(CollectionNode::Folder { name, children });
    }

    if let Some(request) = object.get("request") {
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let method = request
            .get("method")
            .and_then(Value::as_str)
            .map(str::to_string);
        let url = request.get("url").and_then(decode_url);
        return Some(CollectionNode::Request { name, method, url });
    }

    None
}

fn decode_url(value: &Value) -> Option<UrlField> {
    match value {
        Value::String(raw) => Some(UrlField::Raw(raw.clone())),
        Value::Object(object) => Some(UrlField::Structured {
            raw: object.get("raw").and_then(Value::as_str).map(str::to_string),
            protocol: object
                .get("protocol")
                .and_then(Value::as_str)
                .map(str::to_string),
            host: decode_segments(object.get("host")),
            path: decode_segments(object.get("path")),
        }),
        // Unrecognized shapes resolve to an empty URL downstream
        _ => None,
    }
}

fn decode_segments(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
