use std::sync::Arc;

use async_trait::async_trait;
use credentials::BiometricKeyHasher;
use credentials::PasswordHasher;
use credentials::TokenIssuer;
use credentials::TokenPair;

use crate::auth::errors::AuthError;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::UserStore;
use crate::domain::auth::models::AuthPayload;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::PublicUser;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;

/// Domain service implementation for authentication operations.
///
/// Orchestrates the user store, password hasher, biometric key hasher, and
/// token issuer. Never touches storage beyond the [`UserStore`] port.
pub struct AuthService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    biometric_hasher: BiometricKeyHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<S> AuthService<S>
where
    S: UserStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `password_hasher` - Configured password hasher
    /// * `token_issuer` - Configured access/refresh token issuer
    pub fn new(
        store: Arc<S>,
        password_hasher: PasswordHasher,
        token_issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            store,
            password_hasher,
            biometric_hasher: BiometricKeyHasher::new(),
            token_issuer,
        }
    }

    fn mint_pair(&self, user_id: &UserId) -> Result<TokenPair, AuthError> {
        Ok(self.token_issuer.issue_pair(&user_id.to_string())?)
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: UserStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthPayload, AuthError> {
        // Pre-check to avoid hashing work on an obvious duplicate; under a
        // race the store's unique constraint still decides.
        if self.store.find_by_email(&command.email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = self
            .store
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        let tokens = self.mint_pair(&user.id)?;

        Ok(AuthPayload {
            user: user.into(),
            tokens,
        })
    }

    async fn login(&self, email: &EmailAddress, password: &str) -> Result<AuthPayload, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::NotFound(email.as_str().to_string()))?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredential);
        }

        let tokens = self.mint_pair(&user.id)?;

        Ok(AuthPayload {
            user: user.into(),
            tokens,
        })
    }

    async fn biometric_login(&self, biometric_token: &str) -> Result<AuthPayload, AuthError> {
        let key_hash = self.biometric_hasher.hash(biometric_token);

        let user = self
            .store
            .find_by_biometric_key_hash(&key_hash)
            .await?
            .ok_or_else(|| AuthError::Unauthorized("invalid biometric key".to_string()))?;

        let tokens = self.mint_pair(&user.id)?;

        Ok(AuthPayload {
            user: user.into(),
            tokens,
        })
    }

    async fn bind_biometric_key(
        &self,
        user_id: &UserId,
        biometric_token: &str,
    ) -> Result<PublicUser, AuthError> {
        let key_hash = self.biometric_hasher.hash(biometric_token);

        // Pre-check only; the store's unique constraint decides under races.
        if let Some(owner) = self.store.find_by_biometric_key_hash(&key_hash).await? {
            if owner.id != *user_id {
                return Err(AuthError::Unauthorized(
                    "biometric key already in use".to_string(),
                ));
            }
        }

        let user = self
            .store
            .update_biometric_key_hash(user_id, &key_hash)
            .await
            .map_err(|e| match e {
                AuthError::BiometricKeyTaken => {
                    AuthError::Unauthorized("biometric key already in use".to_string())
                }
                other => other,
            })?;

        tracing::info!(user_id = %user.id, "Biometric key bound");

        Ok(user.into())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self
            .token_issuer
            .verify_refresh(refresh_token)
            .map_err(|_| AuthError::Unauthorized("invalid or expired refresh token".to_string()))?;

        // Mint a brand-new pair over the same subject. The presented token
        // is not invalidated; it stays valid until its own expiry since
        // there is no revocation list.
        Ok(self.token_issuer.issue_pair(&claims.sub)?)
    }

    async fn validate_user(&self, user_id: &UserId) -> Result<PublicUser, AuthError> {
        self.store
            .find_by_id(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AuthError::NotFound(user_id.to_string()))
    }
}
