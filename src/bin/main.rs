use std::sync::Arc;

use poem::listener::TcpListener;
use profile_mapper::{
    init_openapi_route, init_store, service::profile::ProfileService, settings::get_config,
    AppState,
};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_level = Level::DEBUG;
    // Logging to File
    let file_appender = tracing_appender::rolling::daily("./logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();

    // Logging to Console
    // tracing_subscriber::fmt().with_max_level(log_level).init();

    let config = get_config()?;
    tracing::info!("run with config: {:?}", config);

    // Init profile backend
    tracing::info!("Init {:?} profile backend", config.backend);
    let store = init_store(&config).await?;
    let profiles = ProfileService::new(store);
    if config.seed_on_start() {
        let count = profiles.initialize().await?.len();
        tracing::info!("store holds {} profile(s) after initialize", count);
    }
    // Init App State
    let app_state = Arc::new(AppState { profiles });

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;
    Ok(())
}
