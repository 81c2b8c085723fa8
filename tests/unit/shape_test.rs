use pretty_assertions::assert_eq;
use serde_json::json;
use postman2xlsx::{export_collection, ExportConfig};

#[test]
fn test_headers_include_one_column_per_folder_level() {
    let document = json!({
        "item": [{
            "name": "A",
            "item": [{
                "name": "B",
                "item": [{"name": "R", "request": {"method": "GET", "url": "u"}}]
            }]
        }]
    });

    let data = export_collection(&document, &ExportConfig::default()).unwrap();
    assert_eq!(
        data.shaped.headers,
        vec![
            "Folder Level 1",
            "Folder Level 2",
            "Request Name",
            "Method",
            "URL"
        ]
    );
}

#[test]
fn test_shallow_rows_padded_on_the_right() {
    let document = json!({
        "item": [
            {"name": "top", "request": {"method": "GET", "url": "t"}},
            {"name": "A", "item": [
                {"name": "B", "item": [
                    {"name": "deep", "request": {"method": "GET", "url": "d"}}
                ]}
            ]}
        ]
    });

    let data = export_collection(&document, &ExportConfig::default()).unwrap();
    // Deeper folder levels are blank, not the shallow ones
    assert_eq!(data.shaped.rows[0], vec!["", "", "top", "GET", "t"]);
    assert_eq!(data.shaped.rows[1], vec!["A", "B", "deep", "GET", "d"]);
}

#[test]
fn test_every_row_has_folder_path_padded_to_max_depth() {
    let document = json!({
        "item": [
            {"name": "a", "request": {"method": "GET", "url": "1"}},
            {"name": "F1", "item": [
                {"name": "b", "request": {"method": "GET", "url": "2"}},
                {"name": "F2/F3", "item": [
                    {"name": "c", "request": {"method": "GET", "url": "3"}}
                ]}
            ]}
        ]
    });

    let data = export_collection(&document, &ExportConfig::default()).unwrap();
    assert_eq!(data.shaped.folder_depth(), 3);
    for row in &data.shaped.rows {
        assert_eq!(row.len(), data.shaped.column_count());
    }
}

#[test]
fn test_flat_collection_has_no_folder_columns() {
    let document = json!({
        "item": [{"name": "only", "request": {"method": "GET", "url": "u"}}]
    });

    let data = export_collection(&document, &ExportConfig::default()).unwrap();
    assert_eq!(data.shaped.headers, vec!["Request Name", "Method", "URL"]);
    assert_eq!(data.shaped.folder_depth(), 0);
}

#[test]
fn test_column_widths_track_content_plus_margin() {
    let document = json!({
        "item": [{
            "name": "short",
            "request": {"method": "GET", "url": "https://a-very-long-url.example.com/with/path"}
        }]
    });

    let data = export_collection(&document, &ExportConfig::default()).unwrap();
    let widths = data.shaped.column_widths();
    assert_eq!(widths.len(), 3);
    assert_eq!(widths[0], "Request Name".len() + 2);
    assert_eq!(
        widths[2],
        "https://a-very-long-url.example.com/with/path".len() + 2
    );
}

#[test]
fn test_stats_reflect_shaped_output() {
    let document = json!({
        "item": [{
            "name": "A",
            "item": [
                {"name": "r1", "request": {"method": "GET", "url": "1"}},
                {"name": "r2", "request": {"method": "GET", "url": "2"}}
            ]
        }]
    });

    let data = export_collection(&document, &ExportConfig::default()).unwrap();
    assert_eq!(data.stats.request_count, 2);
    assert_eq!(data.stats.max_folder_depth, 1);
    assert_eq!(data.stats.column_count, 4);
    assert_eq!(data.stats.file_count, 1);
}
