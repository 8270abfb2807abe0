use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::auth::errors::AuthError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserStore;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, biometric_key_hash, created_at, updated_at";

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> Result<User, AuthError> {
    Ok(User {
        id: UserId(get(&row, "id")?),
        name: get(&row, "name")?,
        email: EmailAddress::new(get::<String>(&row, "email")?)?,
        password_hash: get(&row, "password_hash")?,
        biometric_key_hash: get(&row, "biometric_key_hash")?,
        created_at: get(&row, "created_at")?,
        updated_at: get(&row, "updated_at")?,
    })
}

fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, AuthError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| AuthError::Unexpected(e.to_string()))
}

// The database constraints are the source of truth for uniqueness; anything
// not matching a known constraint propagates unmodified as Unexpected.
fn into_store_error(e: sqlx::Error) -> AuthError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("users_email_key") {
                return AuthError::EmailTaken;
            }
            if db_err.constraint() == Some("users_biometric_key_hash_key") {
                return AuthError::BiometricKeyTaken;
            }
        }
    }
    AuthError::Unexpected(e.to_string())
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AuthError> {
        let query = format!(
            "INSERT INTO users (id, name, email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(Uuid::new_v4())
            .bind(&new_user.name)
            .bind(new_user.email.as_str())
            .bind(&new_user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(into_store_error)?;

        map_row(row)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let row = sqlx::query(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(into_store_error)?;

        row.map(map_row).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        let row = sqlx::query(&query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(into_store_error)?;

        row.map(map_row).transpose()
    }

    async fn find_by_biometric_key_hash(&self, hash: &str) -> Result<Option<User>, AuthError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE biometric_key_hash = $1");

        let row = sqlx::query(&query)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(into_store_error)?;

        row.map(map_row).transpose()
    }

    async fn update_biometric_key_hash(
        &self,
        id: &UserId,
        hash: &str,
    ) -> Result<User, AuthError> {
        let query = format!(
            "UPDATE users SET biometric_key_hash = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(id.0)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(into_store_error)?;

        row.map(map_row)
            .transpose()?
            .ok_or_else(|| AuthError::NotFound(id.to_string()))
    }
}
