use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const PLACEHOLDER_SERPAPI_KEY: &str = "serpapi_api_key";
const PLACEHOLDER_GENERATION_KEY: &str = "generation_api_key";

#[derive(Clone, Debug)]
pub struct Config {
    pub serpapi_api_key: SecretString,
    pub serpapi_endpoint: String,
    pub search_engine: String,
    pub generation_api_key: SecretString,
    pub generation_api_base: String,
    pub generation_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origin: Option<String>,
    pub search_timeout_secs: u64,
    pub fetch_timeout_secs: u64,
    pub max_page_chars: usize,
    pub max_page_bytes: usize,
    pub pdf_excerpt_pages: usize,
    pub session_idle_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            serpapi_api_key: SecretString::from(
                env::var("SERPAPI_API_KEY").unwrap_or_else(|_| PLACEHOLDER_SERPAPI_KEY.to_string()),
            ),
            serpapi_endpoint: env::var("SERPAPI_ENDPOINT")
                .unwrap_or_else(|_| "https://serpapi.com/search".to_string()),
            search_engine: env::var("SEARCH_ENGINE").unwrap_or_else(|_| "google".to_string()),
            generation_api_key: SecretString::from(
                env::var("GENERATION_API_KEY")
                    .unwrap_or_else(|_| PLACEHOLDER_GENERATION_KEY.to_string()),
            ),
            generation_api_base: env::var("GENERATION_API_BASE").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
            }),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parse_var("WEB_SERVER_PORT").unwrap_or(8080),
            allowed_origin: env::var("ALLOWED_ORIGIN").ok().filter(|o| !o.is_empty()),
            search_timeout_secs: parse_var("SEARCH_TIMEOUT_SECS").unwrap_or(15),
            fetch_timeout_secs: parse_var("FETCH_TIMEOUT_SECS").unwrap_or(10),
            max_page_chars: parse_var("MAX_PAGE_CHARS").unwrap_or(8000),
            max_page_bytes: parse_var("MAX_PAGE_BYTES").unwrap_or(2 * 1024 * 1024),
            pdf_excerpt_pages: parse_var("PDF_EXCERPT_PAGES").unwrap_or(3),
            session_idle_secs: parse_var("SESSION_IDLE_SECS").unwrap_or(3600),
        }
    }

    /// Rejects configurations that still carry placeholder API keys.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        if self.serpapi_api_key.expose_secret() == PLACEHOLDER_SERPAPI_KEY {
            return Err(AppError::ValidationError(
                "SERPAPI_API_KEY is not set".to_string(),
            ));
        }

        if self.generation_api_key.expose_secret() == PLACEHOLDER_GENERATION_KEY {
            return Err(AppError::ValidationError(
                "GENERATION_API_KEY is not set".to_string(),
            ));
        }

        if self.fetch_timeout_secs == 0 || self.search_timeout_secs == 0 {
            return Err(AppError::ValidationError(
                "timeouts must be at least one second".to_string(),
            ));
        }

        if self.session_idle_secs == 0 {
            return Err(AppError::ValidationError(
                "SESSION_IDLE_SECS must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            serpapi_api_key: SecretString::from("test_serpapi_key".to_string()),
            serpapi_endpoint: "http://127.0.0.1:9/search".to_string(),
            search_engine: "google".to_string(),
            generation_api_key: SecretString::from("test_generation_key".to_string()),
            generation_api_base: "http://127.0.0.1:9/v1".to_string(),
            generation_model: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            allowed_origin: None,
            search_timeout_secs: 1,
            fetch_timeout_secs: 1,
            max_page_chars: 8000,
            max_page_bytes: 2 * 1024 * 1024,
            pdf_excerpt_pages: 3,
            session_idle_secs: 3600,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.serpapi_endpoint.is_empty());
        assert!(!config.search_engine.is_empty());
        assert!(config.max_page_chars > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.search_engine, "google");
        assert_eq!(config.max_page_chars, 8000);
        assert_eq!(config.pdf_excerpt_pages, 3);
        assert!(config.validate_for_production().is_ok());
    }

    #[test]
    fn test_placeholder_keys_fail_validation() {
        let mut config = Config::test_config();
        config.serpapi_api_key = SecretString::from(PLACEHOLDER_SERPAPI_KEY.to_string());

        let err = config.validate_for_production().unwrap_err();
        assert!(err.to_string().contains("SERPAPI_API_KEY"));
    }

    #[test]
    fn test_zero_session_idle_fails_validation() {
        let mut config = Config::test_config();
        config.session_idle_secs = 0;

        let err = config.validate_for_production().unwrap_err();
        assert!(err.to_string().contains("SESSION_IDLE_SECS"));
    }
}
