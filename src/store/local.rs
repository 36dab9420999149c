use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use r2d2::Pool;
use redis::Client;
use tracing::debug;

use crate::{
    core::kv::{get_blob, set_blob},
    model::profile::{Profile, ProfileId, ProfileInput, ProfilePatch},
};

use super::{
    seed::{seed_profiles, SeedVariant},
    ProfileStore, StoreError, StoreResult,
};

pub const DEFAULT_STORAGE_KEY: &str = "profile_mapper_profiles";

/// A single named value holding the whole serialized collection.
pub trait BlobSlot: Send + Sync {
    fn read(&self) -> StoreResult<Option<String>>;
    fn write(&self, blob: &str) -> StoreResult<()>;
}

pub struct RedisSlot {
    pool: Pool<Client>,
    key: String,
}

impl RedisSlot {
    pub fn new(pool: Pool<Client>, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }
}

impl BlobSlot for RedisSlot {
    fn read(&self) -> StoreResult<Option<String>> {
        let mut conn = self.pool.get()?;
        Ok(get_blob(&mut *conn, &self.key)?)
    }

    fn write(&self, blob: &str) -> StoreResult<()> {
        let mut conn = self.pool.get()?;
        set_blob(&mut *conn, &self.key, blob)?;
        Ok(())
    }
}

/// Process-local slot. Used for dev mode and tests; contents vanish on exit.
#[derive(Default)]
pub struct MemorySlot {
    blob: Mutex<Option<String>>,
    simulate_failure: AtomicBool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
            simulate_failure: AtomicBool::new(false),
        }
    }

    /// Make every read and write fail, to exercise error paths.
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(StoreError::BackendIo("simulated storage failure".to_string()));
        }
        Ok(())
    }
}

impl BlobSlot for MemorySlot {
    fn read(&self) -> StoreResult<Option<String>> {
        self.check()?;
        let blob = self
            .blob
            .lock()
            .map_err(|err| StoreError::BackendIo(err.to_string()))?;
        Ok(blob.clone())
    }

    fn write(&self, blob: &str) -> StoreResult<()> {
        self.check()?;
        let mut slot = self
            .blob
            .lock()
            .map_err(|err| StoreError::BackendIo(err.to_string()))?;
        *slot = Some(blob.to_string());
        Ok(())
    }
}

/// Profiles kept as one JSON array in a [`BlobSlot`].
///
/// Every operation deserializes the whole blob and every mutation rewrites
/// it. Lookups are linear scans on the textual id.
pub struct LocalStore<S: BlobSlot> {
    slot: S,
}

impl<S: BlobSlot> LocalStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Stored records, or the seed records when the slot was never written.
    fn load(&self) -> StoreResult<Vec<Profile>> {
        match self.slot.read()? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(seed_records()),
        }
    }

    fn save(&self, profiles: &[Profile]) -> StoreResult<()> {
        let blob = serde_json::to_string(profiles)?;
        self.slot.write(&blob)
    }
}

fn seed_records() -> Vec<Profile> {
    seed_profiles(SeedVariant::Local)
        .into_iter()
        .enumerate()
        .map(|(idx, data)| Profile {
            id: ProfileId::Numeric(idx as i64 + 1),
            data,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

/// Millisecond timestamp, bumped past every numeric id already in use.
fn next_id(profiles: &[Profile]) -> StoreResult<ProfileId> {
    let now = Utc::now().timestamp_millis();
    let highest = profiles.iter().filter_map(|p| p.id.as_numeric()).max();
    match highest {
        Some(highest) if highest >= now => highest
            .checked_add(1)
            .map(ProfileId::Numeric)
            .ok_or_else(|| StoreError::BackendIo(format!("no id left above {highest}"))),
        _ => Ok(ProfileId::Numeric(now)),
    }
}

#[async_trait]
impl<S: BlobSlot> ProfileStore for LocalStore<S> {
    async fn add(&self, input: ProfileInput) -> StoreResult<Profile> {
        let mut profiles = self.load()?;
        let now = Utc::now();
        let profile = Profile {
            id: next_id(&profiles)?,
            data: input,
            created_at: Some(now),
            updated_at: Some(now),
        };
        profiles.push(profile.clone());
        self.save(&profiles)?;
        debug!("local store added profile {}", profile.id);
        Ok(profile)
    }

    async fn get_all(&self) -> StoreResult<Vec<Profile>> {
        self.load()
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Profile> {
        self.load()?
            .into_iter()
            .find(|p| p.id.matches(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, patch: ProfilePatch) -> StoreResult<Profile> {
        let mut profiles = self.load()?;
        let profile = match profiles.iter_mut().find(|p| p.id.matches(id)) {
            Some(val) => val,
            None => return Err(StoreError::NotFound(id.to_string())),
        };
        patch.apply(&mut profile.data);
        profile.updated_at = Some(Utc::now());
        let updated = profile.clone();
        self.save(&profiles)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut profiles = self.load()?;
        let before = profiles.len();
        profiles.retain(|p| !p.id.matches(id));
        if profiles.len() != before {
            self.save(&profiles)?;
        }
        debug!("local store removed {} record(s) for {}", before - profiles.len(), id);
        Ok(())
    }

    async fn is_empty(&self) -> StoreResult<bool> {
        match self.slot.read()? {
            Some(blob) => {
                let profiles: Vec<Profile> = serde_json::from_str(&blob)?;
                Ok(profiles.is_empty())
            }
            None => Ok(true),
        }
    }

    async fn seed(&self) -> StoreResult<Vec<Profile>> {
        let profiles = seed_records();
        self.save(&profiles)?;
        Ok(profiles)
    }
}
