use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend origin, e.g. "https://portal.example.com". Empty means the page origin.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_submissions_path")]
    pub submissions_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                submissions_path: default_submissions_path(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

fn default_submissions_path() -> String {
    "/api/submissions".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Configuration embedded into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

/// Load configuration from the embedded config.toml
///
/// There is no filesystem in the browser, so the file is baked in at build time.
/// The caller decides how to fall back, since logging is not initialised yet.
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    parse_config(EMBEDDED_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.submissions_path, "/api/submissions");
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[api]\nbase_url = \"http://127.0.0.1:3000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.api.submissions_path, "/api/submissions");
        assert_eq!(config.logging.log_level(), log::Level::Info);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(logging.log_level(), log::Level::Info);
        let logging = LoggingConfig {
            level: "debug".into(),
        };
        assert_eq!(logging.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[api").is_err());
    }
}
