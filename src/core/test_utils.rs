use std::sync::Arc;

use crate::{
    service::profile::ProfileService,
    settings::{Backend, Config},
    store::local::{LocalStore, MemorySlot},
    AppState,
};

pub fn test_config() -> Config {
    Config {
        env: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        prefix: Some("/api".to_string()),
        backend: Backend::Memory,
        database_url: None,
        redis_url: None,
        storage_key: None,
        seed_on_start: Some(false),
    }
}

pub struct TestApp {
    pub state: Arc<AppState>,
    pub store: Arc<LocalStore<MemorySlot>>,
}

/// App state over an in-memory local store holding `blob`, or nothing at all.
pub fn generate_test_app(blob: Option<&str>) -> TestApp {
    let slot = match blob {
        Some(blob) => MemorySlot::with_blob(blob),
        None => MemorySlot::new(),
    };
    let store = Arc::new(LocalStore::new(slot));
    let state = Arc::new(AppState {
        profiles: ProfileService::new(store.clone()),
    });
    TestApp { state, store }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProfileStore;

    #[tokio::test]
    async fn test_generate_test_app_shares_store() -> anyhow::Result<()> {
        let app = generate_test_app(Some("[]"));
        assert!(app.store.is_empty().await?);
        app.state.profiles.initialize().await?;
        assert!(!app.store.is_empty().await?);
        Ok(())
    }
}
