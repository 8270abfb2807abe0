use async_trait::async_trait;
use credentials::TokenPair;

use crate::auth::errors::AuthError;
use crate::domain::auth::models::AuthPayload;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::PublicUser;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for the authentication service.
///
/// The only component with branching business logic: it owns every policy
/// decision (what counts as a valid credential, what token pair to mint,
/// what error to surface).
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and mint their first token pair.
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered (pre-check or store
    ///   constraint)
    /// * `Unexpected` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthPayload, AuthError>;

    /// Authenticate with email and password.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `InvalidCredential` - Password does not match
    /// * `Unexpected` - Store operation failed
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<AuthPayload, AuthError>;

    /// Authenticate with a biometric token.
    ///
    /// # Errors
    /// * `Unauthorized` - No user bound to this biometric key
    /// * `Unexpected` - Store operation failed
    async fn biometric_login(&self, biometric_token: &str) -> Result<AuthPayload, AuthError>;

    /// Bind a biometric key to an already-authenticated user.
    ///
    /// # Errors
    /// * `Unauthorized` - Another user already owns this biometric key
    /// * `NotFound` - User does not exist
    /// * `Unexpected` - Store operation failed
    async fn bind_biometric_key(
        &self,
        user_id: &UserId,
        biometric_token: &str,
    ) -> Result<PublicUser, AuthError>;

    /// Exchange a valid refresh token for a brand-new token pair.
    ///
    /// # Errors
    /// * `Unauthorized` - Refresh token is invalid or expired
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Resolve a user id to its record, for token-subject resolution.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Unexpected` - Store operation failed
    async fn validate_user(&self, user_id: &UserId) -> Result<PublicUser, AuthError>;
}

/// Persistence operations for the user record.
///
/// Each method is a single atomic operation. The store is the sole source
/// of truth for uniqueness: `create` and `update_biometric_key_hash` must
/// reject on the relevant constraint violation rather than silently
/// overwrite.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user; the store assigns id and timestamps.
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `Unexpected` - Store operation failed
    async fn create(&self, new_user: NewUser) -> Result<User, AuthError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `Unexpected` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by normalized email address.
    ///
    /// # Errors
    /// * `Unexpected` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by biometric key hash.
    ///
    /// # Errors
    /// * `Unexpected` - Store operation failed
    async fn find_by_biometric_key_hash(&self, hash: &str) -> Result<Option<User>, AuthError>;

    /// Set a user's biometric key hash and return the updated record.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `BiometricKeyTaken` - Another user already owns this hash
    /// * `Unexpected` - Store operation failed
    async fn update_biometric_key_hash(
        &self,
        id: &UserId,
        hash: &str,
    ) -> Result<User, AuthError>;
}
