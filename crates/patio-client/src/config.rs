//! Client configuration from environment.

use std::env;
use std::path::PathBuf;

/// Hosted parking service used when PATIO_API_URL is unset.
pub const DEFAULT_API_URL: &str = "https://parkingapisenai.azurewebsites.net";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub token_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("PATIO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            token_path: env::var_os("PATIO_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_token_path),
        }
    }
}

fn default_token_path() -> PathBuf {
    let home = env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".patio").join("session.json")
}
