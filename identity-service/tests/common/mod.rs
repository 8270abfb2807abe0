use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use credentials::PasswordHasher;
use credentials::TokenIssuer;
use identity_service::auth::errors::AuthError;
use identity_service::domain::auth::models::EmailAddress;
use identity_service::domain::auth::models::NewUser;
use identity_service::domain::auth::models::User;
use identity_service::domain::auth::models::UserId;
use identity_service::domain::auth::ports::UserStore;
use identity_service::domain::auth::service::AuthService;

pub const ACCESS_SECRET: &[u8] = b"test_access_secret_32_bytes_long!!";
pub const REFRESH_SECRET: &[u8] = b"test_refresh_secret_32_bytes_long!";

/// In-memory user store mirroring the database uniqueness constraints.
///
/// Lets flow tests exercise the real hashers and token issuer end to end
/// without Postgres.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.email == new_user.email) {
            return Err(AuthError::EmailTaken);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            biometric_key_hash: None,
            created_at: now,
            updated_at: now,
        };

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == *email).cloned())
    }

    async fn find_by_biometric_key_hash(&self, hash: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.biometric_key_hash.as_deref() == Some(hash))
            .cloned())
    }

    async fn update_biometric_key_hash(
        &self,
        id: &UserId,
        hash: &str,
    ) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();

        if users
            .values()
            .any(|u| u.id != *id && u.biometric_key_hash.as_deref() == Some(hash))
        {
            return Err(AuthError::BiometricKeyTaken);
        }

        let user = users
            .get_mut(id)
            .ok_or_else(|| AuthError::NotFound(id.to_string()))?;

        user.biometric_key_hash = Some(hash.to_string());
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}

pub fn test_issuer() -> Arc<TokenIssuer> {
    Arc::new(TokenIssuer::new(
        ACCESS_SECRET,
        REFRESH_SECRET,
        Duration::minutes(15),
        Duration::days(7),
    ))
}

pub fn test_service() -> AuthService<InMemoryUserStore> {
    AuthService::new(
        Arc::new(InMemoryUserStore::default()),
        PasswordHasher::new(),
        test_issuer(),
    )
}
