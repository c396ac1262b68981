use std::env;
use std::path::PathBuf;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub gemini_api_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub archive_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().map(SecretString::from),
            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            archive_dir: env::var("QUIZ_ARCHIVE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Checks that generation can actually work. Called once at startup; the
    /// server still starts without a key, but every generation call fails fast.
    pub fn validate(&self) -> AppResult<()> {
        if self.gemini_api_key.is_none() {
            return Err(AppError::Configuration(
                "GEMINI_API_KEY environment variable is not set".to_string(),
            ));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test_api_key".to_string())),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            archive_dir: std::env::temp_dir(),
        }
    }
}
