use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_explicit_path_wins() {
    let path = resolve_document_path(Some("custom.yaml"), Some("from-env.yaml".to_string()));
    assert_eq!(path, PathBuf::from("custom.yaml"));
}

#[test]
fn test_env_path_used_without_argument() {
    let path = resolve_document_path(None, Some("from-env.yaml".to_string()));
    assert_eq!(path, PathBuf::from("from-env.yaml"));
}

#[test]
fn test_default_path_in_current_directory() {
    let path = resolve_document_path(None, None);
    assert_eq!(path.file_name().unwrap(), DEFAULT_DOCUMENT_FILENAME);
}

#[test]
fn test_empty_env_path_is_ignored() {
    let path = resolve_document_path(None, Some(String::new()));
    assert_eq!(path.file_name().unwrap(), DEFAULT_DOCUMENT_FILENAME);
}

#[test]
fn test_load_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let document_path = temp_dir.path().join(DEFAULT_DOCUMENT_FILENAME);
    fs::write(&document_path, "repositories: []\n").expect("Failed to write document");

    let content = load_document(&document_path).expect("Failed to load document");

    assert_eq!(content, "repositories: []\n");
}

#[test]
fn test_load_nonexistent_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.yaml");

    match load_document(&missing) {
        Err(Error::DocumentNotFound(path)) => assert_eq!(path, missing),
        other => panic!("Expected DocumentNotFound, got {:?}", other),
    }
}

#[test]
fn test_load_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let result = load_document(temp_dir.path());

    assert!(matches!(result, Err(Error::LoadFile(_))));
}
