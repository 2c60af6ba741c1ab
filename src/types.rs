use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub id: u64,
    pub avatar_url: Option<String>,
    pub html_url: String,
    // Null for accounts that never set a display name
    pub name: Option<String>,
    pub public_repos: u32,
}

impl UserProfile {
    /// Display name, falling back to the login when unset.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub stargazers_count: u32,
}
