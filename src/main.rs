use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use outfit_api::{
    cache::{create_redis_client, Cache},
    config::Config,
    engine::{EngineConfig, RecommendationEngine},
    routes::{create_router, AppState},
    services::providers::open_weather::OpenWeatherProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let redis_client = create_redis_client(&config.redis_url)?;
    let (cache, _cache_writer) = Cache::new(redis_client);

    let provider = Arc::new(OpenWeatherProvider::new(
        cache,
        config.openweather_api_key.clone(),
        config.openweather_api_url.clone(),
    ));
    let engine = RecommendationEngine::new(EngineConfig::default());
    let state = AppState::new(provider, engine);

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
