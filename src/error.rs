use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubLookupError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Unexpected response status: {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GithubLookupError>;
