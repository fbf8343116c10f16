//! Google OAuth2 sign-in.
//!
//! Wraps the authorization URL and code exchange provided by the `oauth2` crate
//! and the userinfo lookup needed to resolve a Google account to an email.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::GoogleUserInfo,
    state::OAuth2Client,
};

const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Service for the Google OAuth2 login flow.
pub struct GoogleAuthService<'a> {
    /// HTTP client for token exchange and userinfo requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client configured with Google's endpoints and credentials.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> GoogleAuthService<'a> {
    /// Creates a new GoogleAuthService instance.
    ///
    /// # Arguments
    /// - `http_client` - Reference to the HTTP client
    /// - `oauth_client` - Reference to the configured OAuth2 client
    ///
    /// # Returns
    /// - `GoogleAuthService` - New service instance
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates a Google consent URL with CSRF protection.
    ///
    /// Requests the `openid`, `email` and `profile` scopes.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state token to store
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Exchanges an authorization code and fetches the Google profile.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the OAuth callback query
    ///
    /// # Returns
    /// - `Ok(GoogleUserInfo)` - Profile of the signed-in Google account
    /// - `Err(AppError::AuthErr(TokenExchange))` - Google rejected the code
    /// - `Err(AppError::ReqwestErr)` - Userinfo request or decoding failed
    pub async fn callback(&self, authorization_code: String) -> Result<GoogleUserInfo, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let info = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await?;

        Ok(info)
    }
}
