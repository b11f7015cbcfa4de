use super::*;

#[test]
fn test_parse_known_visibilities() {
    assert_eq!(
        "public".parse::<RepositoryVisibility>(),
        Ok(RepositoryVisibility::Public)
    );
    assert_eq!(
        "private".parse::<RepositoryVisibility>(),
        Ok(RepositoryVisibility::Private)
    );
    assert_eq!(
        "internal".parse::<RepositoryVisibility>(),
        Ok(RepositoryVisibility::Internal)
    );
}

/// Parsing is case sensitive, matching what the GitHub API accepts.
#[test]
fn test_parse_rejects_unknown_values() {
    assert!("Public".parse::<RepositoryVisibility>().is_err());
    assert!("secret".parse::<RepositoryVisibility>().is_err());
    assert!("".parse::<RepositoryVisibility>().is_err());
}

#[test]
fn test_display_matches_serialization() {
    for visibility in RepositoryVisibility::ALL {
        let json = serde_json::to_string(&visibility).unwrap();
        assert_eq!(json, format!("\"{}\"", visibility));
    }
}
