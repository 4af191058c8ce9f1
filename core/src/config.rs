//! Client configuration, resolved once at startup.
//!
//! The environment decides one thing only: whether failed calls are logged.

use std::env;

use ureq::http::Uri;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const BASE_URL_VAR: &str = "VOCAB_API_URL";
const ENVIRONMENT_VAR: &str = "VOCAB_ENV";

/// Hosts treated as a developer machine.
const DEVELOPMENT_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    pub fn from_hostname(host: &str) -> Self {
        if DEVELOPMENT_HOSTS.contains(&host) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl std::str::FromStr for Environment {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            other => Err(ApiError::InvalidConfig(format!(
                "{ENVIRONMENT_VAR} must be production or development, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub environment: Environment,
}

impl ClientConfig {
    /// Derive the environment from the host of `base_url`. A base URL with
    /// no parseable host counts as production.
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let environment = base_url
            .parse::<Uri>()
            .ok()
            .and_then(|uri| uri.host().map(Environment::from_hostname))
            .unwrap_or(Environment::Production);
        Self {
            base_url,
            environment,
        }
    }

    /// Read `VOCAB_API_URL` and the optional `VOCAB_ENV` override.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let config = Self::new(&base_url);
        match env::var(ENVIRONMENT_VAR) {
            Ok(value) => Ok(config.with_environment(value.parse()?)),
            Err(_) => Ok(config),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Resolve `url` against the base URL. Absolute URLs are returned as is.
    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        if url.starts_with('/') {
            format!("{}{url}", self.base_url)
        } else {
            format!("{}/{url}", self.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_are_development() {
        assert_eq!(Environment::from_hostname("localhost"), Environment::Development);
        assert_eq!(Environment::from_hostname("127.0.0.1"), Environment::Development);
        assert_eq!(Environment::from_hostname("vocab.example.com"), Environment::Production);
    }

    #[test]
    fn environment_follows_base_url_host() {
        assert_eq!(
            ClientConfig::new("http://localhost:8000").environment,
            Environment::Development
        );
        assert_eq!(
            ClientConfig::new("https://vocab.example.com").environment,
            Environment::Production
        );
        assert_eq!(ClientConfig::new("").environment, Environment::Production);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn resolve_joins_relative_and_keeps_absolute() {
        let config = ClientConfig::new("http://localhost:3000");
        assert_eq!(config.resolve("/words"), "http://localhost:3000/words");
        assert_eq!(config.resolve("words"), "http://localhost:3000/words");
        assert_eq!(
            config.resolve("https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn explicit_environment_wins() {
        let config =
            ClientConfig::new("http://localhost:3000").with_environment(Environment::Production);
        assert!(config.environment.is_production());
    }

    /// Every case lives in one test so parallel tests never race on the
    /// process environment.
    #[test]
    fn from_env_reads_url_and_override() {
        env::remove_var(BASE_URL_VAR);
        env::remove_var(ENVIRONMENT_VAR);
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.environment, Environment::Development);

        env::set_var(BASE_URL_VAR, "https://vocab.example.com/");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://vocab.example.com");
        assert_eq!(config.environment, Environment::Production);

        env::set_var(ENVIRONMENT_VAR, "Development");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://vocab.example.com");
        assert_eq!(config.environment, Environment::Development);

        env::set_var(ENVIRONMENT_VAR, "staging");
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)), "{err}");

        env::remove_var(BASE_URL_VAR);
        env::remove_var(ENVIRONMENT_VAR);
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" dev ".parse::<Environment>().unwrap(), Environment::Development);
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(ApiError::InvalidConfig(_))
        ));
    }
}
