use crate::app::{Category, FetchPayload, SearchParams};
use crate::error::{GithubLookupError, Result};
use crate::types::{Repository, UserProfile};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: Url, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("GitHub Lookup/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, base_url, token })
    }

    /// Derives the endpoint URL for a set of search parameters.
    pub fn endpoint_url(&self, params: &SearchParams) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        match params.category {
            Category::Users => format!("{}/users/{}", base, params.query),
            Category::Repos => format!("{}/users/{}/repos", base, params.query),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        // Only an exact 200 counts as success
        if response.status() != reqwest::StatusCode::OK {
            return Err(GithubLookupError::BadStatus(response.status()));
        }

        // Read the body first so parse failures stay distinguishable from
        // network failures
        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    pub async fn fetch_user(&self, login: &str) -> Result<UserProfile> {
        let params = SearchParams::new(Category::Users, login);
        self.get_json(&self.endpoint_url(&params)).await
    }

    pub async fn fetch_repos(&self, login: &str) -> Result<Vec<Repository>> {
        let params = SearchParams::new(Category::Repos, login);
        self.get_json(&self.endpoint_url(&params)).await
    }

    /// Performs the single fetch a search requires, dispatching on category.
    pub async fn fetch(&self, params: &SearchParams) -> Result<FetchPayload> {
        match params.category {
            Category::Users => {
                let user = self.fetch_user(&params.query).await?;
                Ok(FetchPayload::User(user))
            }
            Category::Repos => {
                let repos = self.fetch_repos(&params.query).await?;
                Ok(FetchPayload::Repos(repos))
            }
        }
    }
}
