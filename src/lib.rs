use std::sync::Arc;

use anyhow::Context;
use poem::{
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
    EndpointExt, Route,
};
use poem_openapi::OpenApiService;
use route::profile::ApiProfile;
use service::profile::ProfileService;
use settings::{Backend, Config};
use store::{
    document::DocumentStore,
    local::{LocalStore, MemorySlot, RedisSlot},
    ProfileStore,
};

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod service;
pub mod settings;
pub mod store;

pub struct AppState {
    pub profiles: ProfileService,
}

/// Construct the backend selected by `config.backend`.
pub async fn init_store(config: &Config) -> anyhow::Result<Arc<dyn ProfileStore>> {
    let store: Arc<dyn ProfileStore> = match config.backend {
        Backend::Document => {
            let pool = crate::core::db::init_pool(config).await?;
            Arc::new(DocumentStore::new(pool))
        }
        Backend::Local => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the local backend")?;
            let pool = crate::core::kv::init_redis_pool(redis_url)?;
            Arc::new(LocalStore::new(RedisSlot::new(pool, config.storage_key())))
        }
        Backend::Memory => Arc::new(LocalStore::new(MemorySlot::new())),
    };
    Ok(store)
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>> {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    let openapi_route =
        OpenApiService::new(ApiProfile, "Profile Mapper", "1.0").server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .with(AddData::new(app_state))
        .with(Cors::new())
}
