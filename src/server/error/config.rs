use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A URL-valued variable could not be parsed.
    #[error("Invalid URL in {name}: {reason}")]
    InvalidUrl {
        /// The environment variable holding the URL
        name: String,
        /// Parser error message
        reason: String,
    },
}
