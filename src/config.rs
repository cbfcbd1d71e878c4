use std::env;

pub const API_URL_ENV: &str = "STATEMENT_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const UPLOAD_PATH: &str = "/api/upload-statement";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base_url }
    }

    pub fn from_env() -> Self {
        Self::from_value(env::var(API_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        Self::new(value.unwrap_or_default())
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base_url, UPLOAD_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
