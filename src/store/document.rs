use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::{
    model::profile::{Profile, ProfileInput, ProfilePatch},
    repository::profile::{
        count_profile, create_profile, delete_profile, get_all_profile, get_profile_by_id,
        update_profile,
    },
};

use super::{
    seed::{seed_profiles, SeedVariant},
    ProfileStore, StoreError, StoreResult,
};

/// Profiles kept as JSONB documents in the Postgres `profiles` table.
pub struct DocumentStore {
    db: Pool<Postgres>,
}

impl DocumentStore {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for DocumentStore {
    async fn add(&self, input: ProfileInput) -> StoreResult<Profile> {
        let mut tx = self.db.begin().await?;
        let row = create_profile(&mut tx, None, &input, None).await?;
        tx.commit().await?;
        debug!("document store added profile {}", row.id);
        Ok(row.into())
    }

    async fn get_all(&self) -> StoreResult<Vec<Profile>> {
        let mut tx = self.db.begin().await?;
        let rows = get_all_profile(&mut tx).await?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Profile> {
        let mut tx = self.db.begin().await?;
        match get_profile_by_id(&mut tx, id).await? {
            Some(row) => Ok(row.into()),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn update(&self, id: &str, patch: ProfilePatch) -> StoreResult<Profile> {
        let mut tx = self.db.begin().await?;
        let row = update_profile(&mut tx, id, &patch, None).await?;
        let row = match row {
            Some(val) => val,
            None => return Err(StoreError::NotFound(id.to_string())),
        };
        tx.commit().await?;
        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut tx = self.db.begin().await?;
        let removed = delete_profile(&mut tx, id).await?;
        tx.commit().await?;
        debug!("document store removed {} row(s) for {}", removed, id);
        Ok(())
    }

    async fn is_empty(&self) -> StoreResult<bool> {
        let mut tx = self.db.begin().await?;
        Ok(count_profile(&mut tx).await? == 0)
    }

    async fn seed(&self) -> StoreResult<Vec<Profile>> {
        let mut tx = self.db.begin().await?;
        let mut seeded = vec![];
        for input in seed_profiles(SeedVariant::Document) {
            let row = create_profile(&mut tx, None, &input, None).await?;
            seeded.push(Profile::from(row));
        }
        tx.commit().await?;
        Ok(seeded)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::factory::profile::ProfileFactory;

    #[sqlx::test]
    #[ignore = "requires a postgres DATABASE_URL"]
    async fn test_document_store_round_trip(pool: PgPool) -> anyhow::Result<()> {
        let store = DocumentStore::new(pool);
        let input = ProfileFactory::new().build_one(());
        let created = store.add(input.clone()).await?;
        let fetched = store.get_by_id(&created.id.to_string()).await?;
        assert_eq!(fetched.data, input);
        assert!(fetched.created_at.is_some());
        assert_eq!(fetched.created_at, fetched.updated_at);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a postgres DATABASE_URL"]
    async fn test_document_store_missing_ids(pool: PgPool) -> anyhow::Result<()> {
        let store = DocumentStore::new(pool);
        assert!(matches!(
            store.get_by_id("nonexistent").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.update("nonexistent", ProfilePatch::default()).await,
            Err(StoreError::NotFound(_))
        ));
        store.delete("nonexistent").await?;
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a postgres DATABASE_URL"]
    async fn test_document_store_seed(pool: PgPool) -> anyhow::Result<()> {
        let store = DocumentStore::new(pool);
        assert!(store.is_empty().await?);
        let seeded = store.seed().await?;
        assert_eq!(seeded.len(), 5);
        assert!(!store.is_empty().await?);
        assert_eq!(store.search("mumbai").await?.len(), 1);
        Ok(())
    }
}
