use crate::models::User;
use crate::services::storage::{Storage, StorageError, StorageKey};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during mock authentication
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid registration data")]
    InvalidRegistration,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Mock session authority
///
/// Accepts any non-empty email with a long enough password. Each email maps
/// to one account under `account:<email>`, so the user id (and with it the
/// user's favorites and adoptions) is the same across logins. Every login
/// opens a fresh `session:<id>` entry that expires with the token; the token
/// only proves which session to look up, so deleting the entry logs the user
/// out even while the token itself is still unexpired.
#[derive(Clone)]
pub struct AuthService {
    storage: Storage,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_ttl_secs: i64,
    min_password_len: usize,
}

impl AuthService {
    pub fn new(
        storage: Storage,
        jwt_secret: &str,
        session_ttl_secs: u64,
        min_password_len: usize,
    ) -> Self {
        Self {
            storage,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            session_ttl_secs: i64::try_from(session_ttl_secs).unwrap_or(i64::MAX),
            min_password_len,
        }
    }

    /// Create a user from the given details and start a session
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(String, User), AuthError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.chars().count() < self.min_password_len {
            return Err(AuthError::InvalidRegistration);
        }

        let user = match self.find_account(email).await? {
            Some(existing) => User {
                name: name.to_string(),
                avatar: Some(avatar_url(name)),
                ..existing
            },
            None => new_user(name, email),
        };
        self.storage
            .set(&StorageKey::account(&account_key(email)), &user)
            .await?;

        let token = self.start_session(&user).await?;
        tracing::info!("Registered user {}", user.id);
        Ok((token, user))
    }

    /// Start a session for any well-formed email/password pair
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        let email = email.trim();
        if email.is_empty() || password.chars().count() < self.min_password_len {
            return Err(AuthError::InvalidCredentials);
        }

        let user = match self.find_account(email).await? {
            Some(existing) => existing,
            None => {
                let name = email.split('@').next().unwrap_or(email);
                let user = new_user(name, email);
                self.storage
                    .set(&StorageKey::account(&account_key(email)), &user)
                    .await?;
                user
            }
        };
        let token = self.start_session(&user).await?;
        tracing::info!("Logged in user {}", user.id);
        Ok((token, user))
    }

    /// Resolve a token to its live session
    pub async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        let session_id = self.verify(token)?;

        self.storage
            .get::<User>(&StorageKey::session(&session_id))
            .await?
            .ok_or(AuthError::Unauthenticated)
    }

    /// End the session behind a token; repeated calls are harmless
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let session_id = self.verify(token)?;
        self.storage.remove(&StorageKey::session(&session_id)).await?;
        tracing::info!("Ended session {}", session_id);
        Ok(())
    }

    async fn find_account(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self
            .storage
            .get::<User>(&StorageKey::account(&account_key(email)))
            .await?)
    }

    async fn start_session(&self, user: &User) -> Result<String, AuthError> {
        let session_id = uuid::Uuid::new_v4().simple().to_string();
        let ttl = Duration::from_secs(self.session_ttl_secs.unsigned_abs());
        self.storage
            .set_with_ttl(&StorageKey::session(&session_id), user, ttl)
            .await?;

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: session_id,
            iat: now,
            exp: now.saturating_add(self.session_ttl_secs),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    fn verify(&self, token: &str) -> Result<String, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(data.claims.sub),
            Err(e) => {
                tracing::debug!("Rejected session token: {}", e);
                Err(AuthError::Unauthenticated)
            }
        }
    }
}

/// Emails differing only in case or surrounding whitespace share an account
fn account_key(email: &str) -> String {
    email.trim().to_lowercase()
}

fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        urlencoding::encode(name)
    )
}

fn new_user(name: &str, email: &str) -> User {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    User {
        id: format!("user-{}-{}", chrono::Utc::now().timestamp_millis(), &suffix[..8]),
        name: name.to_string(),
        email: email.to_string(),
        avatar: Some(avatar_url(name)),
    }
}
