//! Tests for configuration error types.

use super::*;

#[test]
fn test_parse_error_display() {
    let error = ConfigurationError::ParseError {
        reason: "unexpected end of stream".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to parse configuration: unexpected end of stream"
    );
    assert_eq!(error.kind(), ErrorKind::Parse);
}

#[test]
fn test_required_field_missing_is_validation_error() {
    let error = ConfigurationError::RequiredFieldMissing {
        field: "repositories[2].name".to_string(),
        context: "Every repository entry must have a name".to_string(),
    };
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(error.to_string().contains("repositories[2].name"));
}

#[test]
fn test_duplicate_errors_are_validation_errors() {
    let repo = ConfigurationError::DuplicateRepository {
        name: "web".to_string(),
    };
    let collaborator = ConfigurationError::DuplicateCollaborator {
        key: "web:alice".to_string(),
    };

    assert_eq!(repo.kind(), ErrorKind::Validation);
    assert_eq!(collaborator.kind(), ErrorKind::Validation);
    assert_eq!(
        repo.to_string(),
        "Repository 'web' is defined more than once"
    );
    assert_eq!(
        collaborator.to_string(),
        "Collaborator 'web:alice' is defined more than once"
    );
}

#[test]
fn test_invalid_value_display() {
    let error = ConfigurationError::InvalidValue {
        field: "repositories[web].visibility".to_string(),
        value: "secret".to_string(),
        reason: "Must be one of: public, private, internal".to_string(),
    };

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(
        error.to_string(),
        "Invalid value for repositories[web].visibility: 'secret' - Must be one of: public, private, internal"
    );
}

#[test]
fn test_type_mismatch_display() {
    let error = ConfigurationError::TypeMismatch {
        field: "repositories[web].topics".to_string(),
        expected: "sequence".to_string(),
        found: "string".to_string(),
    };

    assert_eq!(error.kind(), ErrorKind::Type);
    assert_eq!(
        error.to_string(),
        "Type mismatch for repositories[web].topics: expected sequence, found string"
    );
}

#[test]
fn test_yaml_error_converts_to_parse_error() {
    let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
    let error: ConfigurationError = yaml_error.into();

    assert!(matches!(error, ConfigurationError::ParseError { .. }));
}

#[test]
fn test_error_kind_display() {
    assert_eq!(ErrorKind::Parse.to_string(), "ParseError");
    assert_eq!(ErrorKind::Validation.to_string(), "ValidationError");
    assert_eq!(ErrorKind::Type.to_string(), "TypeError");
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigurationError>();
}
