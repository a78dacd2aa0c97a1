/// File-based command operations: render, references and merge, driven
/// through temporary files the way the `noteblocks` binary reads them.
use std::io::Write;
use std::path::PathBuf;

use noteblocks_core::{OutputFormat, RenderConfig};
use noteblocks_kinds::commands::{self, CommandError};
use serde_json::json;
use tempfile::{NamedTempFile, TempDir};
use uuid::Uuid;

const ROOT: &str = "11111111-1111-4111-8111-111111111111";
const CHILD: &str = "22222222-2222-4222-8222-222222222222";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn blocks_fixture() -> serde_json::Value {
    json!([
        {
            "id": ROOT,
            "type": "page",
            "properties": {"title": ["Reading list"]},
            "content": [CHILD, "33333333-3333-4333-8333-333333333333"],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        },
        {
            "id": CHILD,
            "type": "to_do",
            "properties": {"title": ["Finish chapter 3"], "checked": [false]},
            "content": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }
    ])
}

#[test]
fn test_render_markdown_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "blocks.json", &blocks_fixture().to_string());

    let out = commands::render(&input, ROOT.parse().unwrap(), &RenderConfig::default()).unwrap();
    assert_eq!(out, "Reading list\n- [ ] Finish chapter 3");
}

#[test]
fn test_render_pretty_json_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "blocks.json", &blocks_fixture().to_string());
    let config = RenderConfig {
        output: OutputFormat::Json,
        pretty: true,
    };

    let out = commands::render(&input, ROOT.parse().unwrap(), &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["annotation_id"], format!("[[block:{ROOT}]]"));
    assert_eq!(value["child_blocks"][0]["content_type"], "structural");
    assert_eq!(value["child_blocks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_render_rejects_pretty_markdown() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "blocks.json", &blocks_fixture().to_string());
    let config = RenderConfig {
        output: OutputFormat::Markdown,
        pretty: true,
    };

    let err = commands::render(&input, ROOT.parse().unwrap(), &config).unwrap_err();
    assert!(matches!(err, CommandError::Core(noteblocks_core::Error::Config(_))));
}

#[test]
fn test_render_unknown_root() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "blocks.json", &blocks_fixture().to_string());
    let missing = Uuid::new_v4();

    let err = commands::render(&input, missing, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, CommandError::RootNotFound(id) if id == missing));
}

#[test]
fn test_render_malformed_input() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "blocks.json", "{\"not\": \"an array\"}");

    let err = commands::render(&input, Uuid::new_v4(), &RenderConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Core(noteblocks_core::Error::Serialization(_))
    ));
}

#[test]
fn test_references_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "See [[block:{ROOT}]] and [[block:{CHILD}]].").unwrap();
    writeln!(file, "Broken [[block:not-a-uuid]] is ignored.").unwrap();

    let out = commands::references(file.path()).unwrap();
    assert_eq!(out, format!("{ROOT}\n{CHILD}"));
}

#[test]
fn test_merge_from_files() {
    let dir = TempDir::new().unwrap();
    let block = write_file(&dir, "block.json", &blocks_fixture()[1].to_string());
    let patch = write_file(
        &dir,
        "patch.json",
        &json!({
            "properties": {"title": ["Finish chapter 4"], "checked": [true]},
            "lifecycle_status": null,
            "updated_at": "1999-01-01T00:00:00Z"
        })
        .to_string(),
    );

    let out = commands::merge(&block, &patch).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["changed"], json!(["properties", "updated_at"]));
    assert_eq!(value["block"]["properties"]["title"], json!(["Finish chapter 4"]));
    assert_ne!(value["block"]["updated_at"], "1999-01-01T00:00:00Z");
}

#[test]
fn test_merge_rejects_non_object_patch() {
    let dir = TempDir::new().unwrap();
    let block = write_file(&dir, "block.json", &blocks_fixture()[1].to_string());
    let patch = write_file(&dir, "patch.json", "[1, 2, 3]");

    let err = commands::merge(&block, &patch).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Core(noteblocks_core::Error::Serialization(_))
    ));
}
