use crate::app::Category;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
#[command(name = "github-lookup")]
#[command(about = "GitHub Lookup - Searches GitHub for a user profile or a user's repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub token for authenticated requests (optional)
    #[arg(long, env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, env = "GITHUB_API_URL", default_value = crate::github::API_BASE_URL)]
    pub api_url: Url,

    /// Login to look up on startup
    #[arg(long, default_value = "unoname")]
    pub query: String,

    /// Search mode on startup
    #[arg(long, value_enum, default_value_t = Category::Users)]
    pub category: Category,

    /// File to write diagnostic logs to (the terminal is owned by the UI)
    #[arg(long, env = "GITHUB_LOOKUP_LOG")]
    pub log_file: Option<PathBuf>,
}
