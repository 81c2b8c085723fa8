use pretty_assertions::assert_eq;
use serde_json::json;
use postman2xlsx::{decode_collection, flatten_collection, normalize_name};

fn flatten(document: serde_json::Value) -> Vec<Vec<String>> {
    flatten_collection(&decode_collection(&document))
        .into_iter()
        .map(|record| record.into_cells())
        .collect()
}

#[test]
fn test_normalizer_replaces_each_unsafe_char() {
    for unsafe_char in ['<', '>', ':', '"', '/', '\\', '|', '?', '*'] {
        let name = format!("a{}b", unsafe_char);
        assert_eq!(normalize_name(&name), "a_b");
    }
}

#[test]
fn test_normalizer_result_has_no_surrounding_whitespace() {
    let normalized = normalize_name("\t  name with spaces  \n");
    assert_eq!(normalized, normalized.trim());
    assert_eq!(normalized, "name with spaces");
}

#[test]
fn test_normalizer_is_a_fixed_point() {
    for name in ["plain", "  padded  ", "a/b:c", "<*>", ""] {
        let once = normalize_name(name);
        assert_eq!(normalize_name(&once), once);
    }
}

#[test]
fn test_collection_without_requests_flattens_to_nothing() {
    let document = json!({
        "item": [
            {"name": "Empty", "item": []},
            {"name": "Nested", "item": [{"name": "Deeper", "item": []}]}
        ]
    });
    assert!(flatten(document).is_empty());
}

#[test]
fn test_single_nested_request() {
    let document = json!({
        "item": [{
            "name": "Auth",
            "item": [{
                "name": "Login",
                "request": {"method": "POST", "url": {"raw": "https://api/login"}}
            }]
        }]
    });

    assert_eq!(
        flatten(document),
        vec![vec!["Auth", "Login", "POST", "https://api/login"]]
    );
}

#[test]
fn test_folder_name_with_slash_expands_into_two_levels() {
    let document = json!({
        "item": [{
            "name": "A/B",
            "item": [{
                "name": "R",
                "request": {"method": "GET", "url": "u"}
            }]
        }]
    });

    assert_eq!(flatten(document), vec![vec!["A", "B", "R", "GET", "u"]]);
}

#[test]
fn test_last_three_fields_are_name_method_url() {
    let document = json!({
        "item": [
            {"request": {}},
            {"name": "R", "request": {"method": "DELETE", "url": "https://x"}}
        ]
    });

    let rows = flatten(document);
    assert_eq!(rows[0], vec!["Unnamed Request", "GET", ""]);
    assert_eq!(rows[1], vec!["R", "DELETE", "https://x"]);
}

#[test]
fn test_request_names_are_normalized() {
    let document = json!({
        "item": [{"name": " Get /users ", "request": {"method": "GET"}}]
    });

    let rows = flatten(document);
    assert_eq!(rows[0][0], "Get _users");
}

#[test]
fn test_siblings_at_different_depths_keep_document_order() {
    let document = json!({
        "item": [
            {"name": "first", "request": {"method": "GET", "url": "1"}},
            {"name": "F", "item": [
                {"name": "second", "request": {"method": "GET", "url": "2"}},
                {"name": "G", "item": [
                    {"name": "third", "request": {"method": "GET", "url": "3"}}
                ]}
            ]},
            {"name": "fourth", "request": {"method": "GET", "url": "4"}}
        ]
    });

    let records = flatten_collection(&decode_collection(&document));
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third", "fourth"]);
    assert_eq!(records[0].depth(), 0);
    assert_eq!(records[1].depth(), 1);
    assert_eq!(records[2].depth(), 2);
    assert_eq!(records[3].depth(), 0);
}

#[test]
fn test_whitespace_only_folder_segment_kept_as_empty_cell() {
    let document = json!({
        "item": [{
            "name": "A/ /B",
            "item": [{"name": "R", "request": {"method": "GET", "url": "u"}}]
        }]
    });

    let records = flatten_collection(&decode_collection(&document));
    assert_eq!(records[0].folders, vec!["A", "", "B"]);
}
