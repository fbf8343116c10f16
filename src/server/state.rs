//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool,
//! the HTTP client for Google requests, the optional Google OAuth2 client, and the
//! frontend URL used for post-login redirects.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool handle and
/// `reqwest::Client` is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Google token exchange and userinfo requests.
    ///
    /// Configured with redirects disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for Google sign-in, absent when not configured.
    pub oauth_client: Option<OAuth2Client>,

    /// Base URL of the frontend, used for the post-login redirect.
    pub frontend_base_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - Google OAuth2 client, if configured
    /// - `frontend_base_url` - Frontend base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: Option<OAuth2Client>,
        frontend_base_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            frontend_base_url,
        }
    }
}
