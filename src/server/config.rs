use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const DEFAULT_DATABASE_URL: &str = "sqlite://staybook.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_GOOGLE_REDIRECT_URL: &str = "http://localhost:8000/auth/google/callback";
const DEFAULT_SWEEP_SCHEDULE: &str = "0 0 * * * *";

/// Credentials and endpoints for Google sign-in.
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,

    pub auth_url: String,
    pub token_url: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub frontend_base_url: String,

    /// `None` when `GOOGLE_CLIENT_ID` and `GOOGLE_CLIENT_SECRET` are both unset.
    pub google: Option<GoogleOAuthConfig>,

    /// Six-field cron expression for the booking expiry sweep.
    pub sweep_schedule: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - Only one of the Google credentials is set
    /// - `Err(AppError::ConfigErr(InvalidUrl))` - A URL variable does not parse
    pub fn from_env() -> Result<Self, AppError> {
        let frontend_base_url = env_or("FRONTEND_BASE_URL", DEFAULT_FRONTEND_BASE_URL);
        validate_url("FRONTEND_BASE_URL", &frontend_base_url)?;

        let google = match (
            std::env::var("GOOGLE_CLIENT_ID").ok(),
            std::env::var("GOOGLE_CLIENT_SECRET").ok(),
        ) {
            (Some(client_id), Some(client_secret)) => {
                let redirect_url = env_or("GOOGLE_REDIRECT_URL", DEFAULT_GOOGLE_REDIRECT_URL);
                validate_url("GOOGLE_REDIRECT_URL", &redirect_url)?;

                Some(GoogleOAuthConfig {
                    client_id,
                    client_secret,
                    redirect_url,
                    auth_url: GOOGLE_AUTH_URL.to_string(),
                    token_url: GOOGLE_TOKEN_URL.to_string(),
                })
            }
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("GOOGLE_CLIENT_SECRET".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("GOOGLE_CLIENT_ID".to_string()).into())
            }
            (None, None) => None,
        };

        Ok(Self {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            frontend_base_url,
            google,
            sweep_schedule: env_or("SWEEP_SCHEDULE", DEFAULT_SWEEP_SCHEDULE),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidUrl {
            name: name.to_string(),
            reason: e.to_string(),
        })
}
