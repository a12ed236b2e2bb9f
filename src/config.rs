//! Server configuration.

use std::path::PathBuf;

use crate::error::{Result, SlangError};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;
pub const DEFAULT_DICTIONARY_PATH: &str = "slang.txt";

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated origin list.
    pub fn parse(value: &str) -> Self {
        let origins: Vec<String> = value
            .split(',')
            .map(|o| o.trim().trim_end_matches('/'))
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        match self {
            CorsOrigins::Any => true,
            CorsOrigins::List(list) => list.iter().any(|o| o == origin),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub cors_origins: CorsOrigins,
    pub max_text_length: usize,
    pub dictionary_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            cors_origins: CorsOrigins::Any,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_text_length == 0 {
            return Err(SlangError::Config(
                "max_text_length must be greater than zero".to_string(),
            ));
        }
        if let CorsOrigins::List(list) = &self.cors_origins {
            if list.is_empty() {
                return Err(SlangError::Config(
                    "CORS origin list is empty; use \"*\" to allow all origins".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_cors_any() {
        assert_eq!(CorsOrigins::parse("*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse("http://a.test, *"), CorsOrigins::Any);
    }

    #[test]
    fn test_parse_cors_list() {
        let origins = CorsOrigins::parse("http://localhost:3000, https://app.test/");
        assert_eq!(
            origins,
            CorsOrigins::List(vec![
                "http://localhost:3000".to_string(),
                "https://app.test".to_string()
            ])
        );
        assert!(origins.allows("https://app.test"));
        assert!(!origins.allows("https://evil.test"));
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let config = ServerConfig {
            max_text_length: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SlangError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_cors_list() {
        let config = ServerConfig {
            cors_origins: CorsOrigins::parse(" , "),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
