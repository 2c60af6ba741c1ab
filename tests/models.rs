use github_lookup::types::{Repository, UserProfile};

#[test]
fn test_user_profile_deserialization() {
    // Trimmed-down shape of GET /users/{login}; unknown fields are ignored
    let json = r#"{
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "name": "The Octocat",
        "company": "@github",
        "public_repos": 8,
        "followers": 9999
    }"#;

    let user: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(user.login, "octocat");
    assert_eq!(user.id, 583231);
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.public_repos, 8);
    assert_eq!(user.html_url, "https://github.com/octocat");
}

#[test]
fn test_user_profile_with_null_name() {
    let json = r#"{
        "login": "unoname",
        "id": 12345,
        "avatar_url": null,
        "html_url": "https://github.com/unoname",
        "name": null,
        "public_repos": 0
    }"#;

    let user: UserProfile = serde_json::from_str(json).unwrap();
    assert!(user.name.is_none());
    assert_eq!(user.display_name(), "unoname");
}

#[test]
fn test_display_name_prefers_real_name() {
    let json = r#"{
        "login": "octocat",
        "id": 583231,
        "avatar_url": null,
        "html_url": "https://github.com/octocat",
        "name": "The Octocat",
        "public_repos": 8
    }"#;

    let user: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(user.display_name(), "The Octocat");
}

#[test]
fn test_repository_list_preserves_order() {
    let json = r#"[
        {"id": 3, "name": "zeta", "stargazers_count": 1, "fork": false},
        {"id": 1, "name": "alpha", "stargazers_count": 42, "fork": true},
        {"id": 2, "name": "midway", "stargazers_count": 7, "fork": false}
    ]"#;

    let repos: Vec<Repository> = serde_json::from_str(json).unwrap();
    assert_eq!(repos.len(), 3);
    // Insertion order from the API, not re-sorted
    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "midway"]);
    assert_eq!(repos[1].stargazers_count, 42);
}

#[test]
fn test_empty_repository_list() {
    let repos: Vec<Repository> = serde_json::from_str("[]").unwrap();
    assert!(repos.is_empty());
}

#[test]
fn test_malformed_repository_entry_is_a_parse_error() {
    // stargazers_count is required; its absence must not silently default
    let json = r#"[{"id": 1, "name": "alpha"}]"#;
    let result: Result<Vec<Repository>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
