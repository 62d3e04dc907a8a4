use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::PasswordService,
    database::queries::UserQueries,
    errors::{AppError, Result},
};

/// Identity returned by the credential store. Never carries the hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: Uuid,
    pub username: String,
}

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct CredentialService;

impl CredentialService {
    pub async fn register(pool: &PgPool, username: &str, password: &str) -> Result<Identity> {
        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || PasswordService::hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

        let user = UserQueries::create_user(pool, username, &password_hash).await?;
        tracing::info!(user_id = %user.id, "Created user");

        Ok(Identity { id: user.id, username: user.username })
    }

    /// Unknown usernames and wrong passwords fail identically.
    pub async fn authenticate(pool: &PgPool, username: &str, password: &str) -> Result<Identity> {
        let user = UserQueries::find_by_username(pool, username).await?;
        let password = password.to_string();

        let Some(user) = user else {
            tokio::task::spawn_blocking(move || PasswordService::burn_verification(&password))
                .await
                .map_err(|e| AppError::Internal(e.into()))?;
            tracing::debug!("Sign in rejected: unknown user");
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        };

        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || PasswordService::verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

        if !matches {
            tracing::debug!(user_id = %user.id, "Sign in rejected: wrong password");
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        }

        Ok(Identity { id: user.id, username: user.username })
    }
}
