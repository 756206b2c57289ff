use crate::{env_or_default, ConfigError, FromEnv};

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Cross-origin policy: the front-end is served from exactly one origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGIN)
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ALLOWED_ORIGIN`, defaulting to the local front-end.
    fn from_env() -> Result<Self, ConfigError> {
        let origin = env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN);
        let origin = origin.trim();

        if origin.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "origin cannot be empty".to_string(),
            });
        }

        Ok(Self::new(origin))
    }
}
