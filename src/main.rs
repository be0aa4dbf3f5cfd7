use std::sync::Arc;
use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use tokio::net::TcpListener;

use lectern::application::services::GenerationService;
use lectern::infrastructure::avatar::DidClient;
use lectern::infrastructure::extraction::DocxAdapter;
use lectern::infrastructure::observability::{TracingConfig, init_tracing};
use lectern::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .parse()
        .expect("Failed to parse APP_ENVIRONMENT");

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(TracingConfig::from(&settings.logging), settings.server.port);

    tracing::info!(environment = %environment, "Application starting");

    let extractor = Arc::new(DocxAdapter::new());
    let avatar_client = Arc::new(DidClient::new(settings.avatar.clone()));

    let generation_service = Arc::new(GenerationService::new(
        extractor,
        Arc::clone(&avatar_client),
        avatar_client,
        Duration::from_secs(settings.polling.interval_secs),
        settings.polling.max_attempts,
    ));

    let state = AppState {
        generation_service,
        server: settings.server.clone(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
