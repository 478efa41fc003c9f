use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use fca_api::{create_router, views::Views, AppState};
use fca_infrastructure::{
    create_pool, PgCampaignRepository, PgImportSessionFactory, PgLogRepository,
    PgLookupRepository,
};
use fca_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    fca_shared::telemetry::init_telemetry();

    info!("FCA console starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database (schema {})...", config.database.schema);
    let pool = create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout_seconds,
    )
    .await?;
    info!("Database connection established.");

    let schema = config.database.schema.clone();
    let views = Views::new().map_err(|e| anyhow::anyhow!("Failed to load page templates: {}", e))?;

    // Create App State
    let state = AppState {
        campaigns: Arc::new(PgCampaignRepository::new(pool.clone(), schema.clone())),
        lookups: Arc::new(PgLookupRepository::new(pool.clone(), schema.clone())),
        logs: Arc::new(PgLogRepository::new(pool.clone(), schema.clone())),
        import_sessions: Arc::new(PgImportSessionFactory::new(pool, schema)),
        views: Arc::new(views),
        config: config.clone(),
    };

    let app = create_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("{} listening on {}", config.app.name, addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
