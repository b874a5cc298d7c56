use serde::Deserialize;
use std::env;

use crate::error::AppError;
use crate::infrastructure::raindrop::DEFAULT_API_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // Raindrop API
    pub raindrop_api_token: String,
    pub raindrop_api_base_url: String,
    // Artifact publishing
    pub bucket_name: String,
    pub object_key: String,
    pub legacy_js_key: Option<String>,
    // Collection selection
    pub collection_id: Option<i64>,
    pub collection_title: String,
    pub reverse_order: bool,
    // AWS
    pub aws_region: String,
    pub s3_endpoint_url: Option<String>,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing credential: {0} must be set to a non-empty value")]
    MissingCredential(&'static str),

    #[error("Invalid numeric value in environment: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingCredential(name) => AppError::MissingCredential(name.to_string()),
            ConfigError::InvalidNumber(e) => AppError::Unknown(e.to_string()),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // The token is the one credential without a workable default. An
        // empty value would only fail later with a confusing 401 upstream.
        let raindrop_api_token = env::var("RAINDROP_API_TOKEN").unwrap_or_default();
        if raindrop_api_token.trim().is_empty() {
            return Err(ConfigError::MissingCredential("RAINDROP_API_TOKEN"));
        }

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            raindrop_api_token,
            raindrop_api_base_url: env::var("RAINDROP_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            bucket_name: env::var("BUCKET_NAME").unwrap_or_else(|_| "tracked-reads".to_string()),
            object_key: env::var("OBJECT_KEY")
                .unwrap_or_else(|_| "assets/latest.json".to_string()),
            legacy_js_key: optional_var("LEGACY_JS_KEY"),
            collection_id: match optional_var("COLLECTION_ID") {
                Some(raw) => Some(raw.parse()?),
                None => None,
            },
            collection_title: env::var("COLLECTION_TITLE")
                .unwrap_or_else(|_| "tracked-reads".to_string()),
            reverse_order: env::var("REVERSE_ORDER")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                == "true",
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            s3_endpoint_url: optional_var("S3_ENDPOINT_URL"),
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Read a variable, treating absent and blank values the same way.
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
