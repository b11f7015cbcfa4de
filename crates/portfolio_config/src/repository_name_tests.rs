//! Tests for repository name validation.

use super::*;

/// Verify names GitHub accepts are accepted.
#[test]
fn test_valid_repository_names() {
    assert!(RepositoryName::try_new("a").is_ok());
    assert!(RepositoryName::try_new("myrepo").is_ok());
    assert!(RepositoryName::try_new("portfolio-github-management").is_ok());
    assert!(RepositoryName::try_new("Mixed_Case").is_ok());
    assert!(RepositoryName::try_new(".github").is_ok());
    assert!(RepositoryName::try_new("v1.2.3").is_ok());

    let max_length = "a".repeat(MAX_REPOSITORY_NAME_LENGTH);
    assert!(RepositoryName::try_new(max_length).is_ok());
}

#[test]
fn test_invalid_empty_name() {
    let err = RepositoryName::try_new("").unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
}

#[test]
fn test_invalid_too_long() {
    let too_long = "a".repeat(MAX_REPOSITORY_NAME_LENGTH + 1);
    let err = RepositoryName::try_new(too_long).unwrap_err();
    match err {
        ConfigurationError::InvalidValue { field, reason, .. } => {
            assert_eq!(field, "name");
            assert!(reason.contains("too long"));
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_invalid_characters() {
    assert!(RepositoryName::try_new("has space").is_err());
    assert!(RepositoryName::try_new("slash/name").is_err());
    assert!(RepositoryName::try_new("emoji-🚀").is_err());
    assert!(RepositoryName::try_new("colon:name").is_err());
}

/// Relative path components are not valid repository names.
#[test]
fn test_invalid_dot_names() {
    assert!(RepositoryName::try_new(".").is_err());
    assert!(RepositoryName::try_new("..").is_err());
}

#[test]
fn test_string_conversions() {
    let name = RepositoryName::try_new("web").unwrap();

    assert_eq!(name.as_str(), "web");
    assert_eq!(name.to_string(), "web");
    assert_eq!(&*name, "web");
    assert_eq!(name.as_ref() as &str, "web");

    let owned: String = name.clone().into();
    assert_eq!(owned, "web");
    assert_eq!(name.into_string(), "web");
}

#[test]
fn test_serializes_transparently() {
    let name = RepositoryName::try_new("web").unwrap();
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"web\"");
}
