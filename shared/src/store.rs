use async_trait::async_trait;
use thiserror::Error;

use crate::types::{House, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dynamodb error: {0}")]
    Dynamo(#[from] aws_sdk_dynamodb::Error),
    #[error("malformed item for {email}: {reason}")]
    Malformed { email: String, reason: String },
    #[error("no item for {0} after update")]
    Missing(String),
}

/// Point operations on the users table, keyed by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// `Ok(None)` when no item matches the key.
    async fn get(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Unconditional upsert of the full record.
    async fn put(&self, user: &User) -> Result<(), StoreError>;

    /// Sets `hogwartsHouse` and `updatedAt` on the key, creating it if absent.
    async fn set_fields(
        &self,
        email: &str,
        house: House,
        updated_at: &str,
    ) -> Result<(), StoreError>;

    /// Applies `set_fields` and returns the record as read back afterwards.
    /// A failed or empty re-read is an error.
    async fn update_fields(
        &self,
        email: &str,
        house: House,
        updated_at: &str,
    ) -> Result<User, StoreError> {
        self.set_fields(email, house, updated_at).await?;
        self.get(email)
            .await?
            .ok_or_else(|| StoreError::Missing(email.to_string()))
    }
}
