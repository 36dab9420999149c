use std::sync::Arc;

use tracing::{error, info};

use crate::{
    model::profile::{Profile, ProfileInput, ProfilePatch},
    store::{ProfileStore, StoreResult},
};

/// Data-access facade used by the HTTP layer and the CLI.
///
/// Every operation reports failures as a [`crate::store::StoreError`]; an
/// empty list always means the backend holds no matching records.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

fn logged<T>(operation: &str, res: StoreResult<T>) -> StoreResult<T> {
    if let Err(err) = &res {
        error!("profile service {} failed: {}", operation, err);
    }
    res
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Seed the backend when it holds no records. A no-op otherwise.
    pub async fn initialize(&self) -> StoreResult<Vec<Profile>> {
        let res: StoreResult<Vec<Profile>> = async {
            if self.store.is_empty().await? {
                let seeded = self.store.seed().await?;
                info!("seeded {} profiles into empty store", seeded.len());
            }
            self.store.get_all().await
        }
        .await;
        logged("initialize", res)
    }

    pub async fn get_all(&self) -> StoreResult<Vec<Profile>> {
        logged("get_all", self.store.get_all().await)
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Profile> {
        logged("get_by_id", self.store.get_by_id(id).await)
    }

    pub async fn add(&self, input: ProfileInput) -> StoreResult<Profile> {
        logged("add", self.store.add(input).await)
    }

    pub async fn update(&self, id: &str, patch: ProfilePatch) -> StoreResult<Profile> {
        logged("update", self.store.update(id, patch).await)
    }

    pub async fn delete(&self, id: &str) -> StoreResult<String> {
        logged("delete", self.store.delete(id).await).map(|_| id.to_string())
    }

    /// Blank terms list everything.
    pub async fn search(&self, term: &str) -> StoreResult<Vec<Profile>> {
        if term.trim().is_empty() {
            return self.get_all().await;
        }
        logged("search", self.store.search(term).await)
    }
}
