use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations, which also seed
/// the initial property listings.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite file and expire after seven days
/// without activity.
///
/// # Arguments
/// - `db` - Connected database
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for Google requests.
///
/// Redirects are disabled so OAuth endpoints cannot bounce requests elsewhere.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialise
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Google OAuth2 client if credentials are configured.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Some(OAuth2Client))` - Google sign-in is available
/// - `Ok(None)` - No Google credentials; sign-in endpoints will answer 500
/// - `Err(AppError::ConfigErr(InvalidUrl))` - An OAuth URL does not parse
pub fn setup_oauth_client(config: &Config) -> Result<Option<OAuth2Client>, AppError> {
    let Some(google) = &config.google else {
        tracing::warn!("GOOGLE_CLIENT_ID/GOOGLE_CLIENT_SECRET not set, Google sign-in disabled");
        return Ok(None);
    };

    let invalid_url = |name: &str, e: url::ParseError| ConfigError::InvalidUrl {
        name: name.to_string(),
        reason: e.to_string(),
    };

    let client = BasicClient::new(ClientId::new(google.client_id.clone()))
        .set_client_secret(ClientSecret::new(google.client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(google.auth_url.clone()).map_err(|e| invalid_url("auth_url", e))?,
        )
        .set_token_uri(
            TokenUrl::new(google.token_url.clone()).map_err(|e| invalid_url("token_url", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(google.redirect_url.clone())
                .map_err(|e| invalid_url("GOOGLE_REDIRECT_URL", e))?,
        );

    Ok(Some(client))
}
