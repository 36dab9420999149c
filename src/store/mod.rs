use async_trait::async_trait;
use thiserror::Error;

use crate::model::profile::{Profile, ProfileInput, ProfilePatch};

pub mod document;
pub mod local;
pub mod seed;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Backend I/O error: {0}")]
    BackendIo(String),

    #[error("Malformed profile data: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::BackendIo(err.to_string())
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        StoreError::BackendIo(err.to_string())
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::BackendIo(err.to_string())
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<serde_json::Error>() {
            Ok(err) => StoreError::Serialization(err),
            Err(err) => StoreError::BackendIo(err.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage capability shared by every profile backend.
///
/// Implementations own their medium and are safe to share between request
/// handlers. No operation retries and none is fenced against concurrent
/// writers: the last write to a record wins.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert a new record, assigning its id and both timestamps.
    async fn add(&self, input: ProfileInput) -> StoreResult<Profile>;

    async fn get_all(&self) -> StoreResult<Vec<Profile>>;

    /// Fails with [`StoreError::NotFound`] when no record has `id`.
    async fn get_by_id(&self, id: &str) -> StoreResult<Profile>;

    /// Merge `patch` into the record and refresh `updated_at`.
    /// Fails with [`StoreError::NotFound`] when no record has `id`.
    async fn update(&self, id: &str, patch: ProfilePatch) -> StoreResult<Profile>;

    /// Remove the record. Removing an absent id is not an error.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    async fn search(&self, term: &str) -> StoreResult<Vec<Profile>> {
        let profiles = self.get_all().await?;
        Ok(profiles
            .into_iter()
            .filter(|profile| profile.data.matches_term(term))
            .collect())
    }

    /// True when the medium holds no records at all.
    async fn is_empty(&self) -> StoreResult<bool>;

    /// Write this backend's seed set. Callers check [`ProfileStore::is_empty`] first.
    async fn seed(&self) -> StoreResult<Vec<Profile>>;
}
