//! End-to-end stub composition from JSON stub descriptions

use std::fs;
use stubsmith::{StubComposer, StubInfo};
use tempfile::TempDir;

fn stub(json: serde_json::Value) -> StubInfo {
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_field_override_beats_shape_default() {
    let info = stub(serde_json::json!({
        "package_name": "com.example",
        "class_name": "UserStub",
        "fields": [{ "name": "id", "type": "Long", "default_value": "123L" }]
    }));

    let text = StubComposer::new().compose(&info);
    assert!(text.contains("val id: Long = 123L,"));
    assert!(!text.contains("0L"));
}

#[test]
fn test_list_field_gets_empty_list() {
    let info = stub(serde_json::json!({
        "package_name": "com.example",
        "class_name": "TagStub",
        "fields": [{ "name": "tags", "type": "List<String>" }]
    }));

    let text = StubComposer::new().compose(&info);
    assert!(text.contains("val tags: List<String> = emptyList(),"));
}

#[test]
fn test_nullable_return_body_is_null() {
    let info = stub(serde_json::json!({
        "package_name": "com.example",
        "class_name": "DataStub",
        "methods": [{ "name": "getData", "return_type": "String?" }]
    }));

    let text = StubComposer::new().compose(&info);
    assert!(text.contains("fun getData(): String? = null"));
}

#[test]
fn test_compose_twice_is_byte_identical() {
    let info = stub(serde_json::json!({
        "package_name": "com.example",
        "class_name": "OrderStub",
        "fields": [
            { "name": "lines", "type": "java.util.ArrayList<com.example.model.Line>" },
            { "name": "lookup", "type": "Map<String, List<Int>>" },
            { "name": "note", "type": "Optional<String>" }
        ],
        "methods": [
            { "name": "total", "return_type": "Double" },
            { "name": "first", "return_type": "com.example.model.Line" }
        ]
    }));

    let composer = StubComposer::new();
    assert_eq!(composer.compose(&info), composer.compose(&info));
}

#[test]
fn test_write_to_uses_package_path() {
    let temp = TempDir::new().unwrap();
    let info = stub(serde_json::json!({
        "package_name": "com.example.stubs",
        "class_name": "EmptyStub"
    }));

    let path = StubComposer::new().write_to(&info, temp.path()).unwrap();
    assert_eq!(path, temp.path().join("com/example/stubs/EmptyStub.kt"));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "package com.example.stubs\n\ndata class EmptyStub()\n"
    );
}
