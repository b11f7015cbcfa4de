use super::*;
use crate::commands::plain_text;
use std::fs;
use tempfile::TempDir;

const DOCUMENT: &str = r#"
defaults:
  visibility: private
  has_wiki: false
repositories:
  - name: api
    visibility: internal
    collaborators:
      - username: alice
        permission: maintain
    branch_protection:
      required_approving_review_count: 2
      required_status_checks: [build, test]
  - name: docs
"#;

fn write_document(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("repositories.yaml");
    fs::write(&path, DOCUMENT).expect("Failed to write document");
    path
}

#[test]
fn test_render_repository_pretty() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir);

    let output = plain_text(&render_repository(&path, "api", OutputFormat::Pretty).unwrap());

    assert!(output.starts_with("api"));
    assert!(output.contains("visibility = \"internal\" (override)"));
    assert!(output.contains("has_wiki = false (defaults)"));
    assert!(output.contains("alice (maintain)"));
    assert!(output.contains("Branch protection: main"));
    assert!(output.contains("Required approving reviews: 2"));
    assert!(output.contains("Required status checks: build, test"));
}

#[test]
fn test_render_repository_without_extras() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir);

    let output = plain_text(&render_repository(&path, "docs", OutputFormat::Pretty).unwrap());

    assert!(!output.contains("Collaborators:"));
    assert!(!output.contains("Branch protection"));
}

#[test]
fn test_render_repository_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir);

    let output = render_repository(&path, "docs", OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["name"], serde_json::json!("docs"));
    assert_eq!(value["sources"]["visibility"], serde_json::json!("defaults"));
}

#[test]
fn test_render_unknown_repository() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir);

    for format in [OutputFormat::Pretty, OutputFormat::Json] {
        match render_repository(&path, "ghost", format) {
            Err(Error::RepositoryNotFound(name)) => assert_eq!(name, "ghost"),
            other => panic!("Expected RepositoryNotFound, got {:?}", other),
        }
    }
}

#[test]
fn test_plain_text_strips_colour_escapes() {
    assert_eq!(
        plain_text("\u{1b}[1mapi\u{1b}[0m\n  x = 1 (\u{1b}[33moverride\u{1b}[0m)"),
        "api\n  x = 1 (override)"
    );
    assert_eq!(plain_text("no escapes"), "no escapes");
}
