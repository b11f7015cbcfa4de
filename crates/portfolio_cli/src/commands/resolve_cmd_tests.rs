use super::*;
use portfolio_config::ConfigurationError;
use std::fs;
use tempfile::TempDir;

fn write_document(temp_dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join("repositories.yaml");
    fs::write(&path, content).expect("Failed to write document");
    path
}

#[test]
fn test_render_portfolio_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(
        &temp_dir,
        r#"
defaults:
  visibility: private
repositories:
  - name: b
    collaborators:
      - username: bob
        permission: admin
    codeowners: "* @bob"
"#,
    );

    let output = render_portfolio(&path, false).expect("Failed to render portfolio");
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        value["repositories"]["b"]["settings"]["visibility"],
        serde_json::json!("private")
    );
    assert_eq!(
        value["collaborators"]["b:bob"]["permission"],
        serde_json::json!("admin")
    );
    assert!(value["codeowners"].get("b").is_some());
    assert!(!output.contains('\n'));
}

#[test]
fn test_render_portfolio_pretty() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir, "repositories:\n  - name: a\n");

    let output = render_portfolio(&path, true).expect("Failed to render portfolio");

    assert!(output.contains('\n'));
    assert!(output.contains("\"repositories\""));
}

#[test]
fn test_render_is_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(
        &temp_dir,
        "repositories:\n  - name: z\n    topics: [b, a]\n  - name: a\n    has_wiki: true\n",
    );

    let first = render_portfolio(&path, false).unwrap();
    let second = render_portfolio(&path, false).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_render_reports_configuration_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir, "repositories:\n  - visibility: public\n");

    match render_portfolio(&path, false) {
        Err(Error::Config(ConfigurationError::RequiredFieldMissing { field, .. })) => {
            assert_eq!(field, "repositories[0].name")
        }
        other => panic!("Expected RequiredFieldMissing, got {:?}", other),
    }
}

#[test]
fn test_render_missing_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("missing.yaml");

    let err = render_portfolio(&path, false).unwrap_err();

    assert!(matches!(err, Error::DocumentNotFound(_)));
    assert_eq!(err.exit_code(), crate::errors::EXIT_IO_ERROR);
}
