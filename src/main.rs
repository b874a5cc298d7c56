use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracked_reads_backend::infrastructure::config::{Config, LogFormat};
use tracked_reads_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Tracked Reads Backend on {}:{}",
        config.host,
        config.port
    );

    // Create AWS S3 client
    tracing::info!(
        region = %config.aws_region,
        bucket = %config.bucket_name,
        "Initializing S3 client"
    );

    // Publishing needs AWS credentials from the ambient chain; missing keys
    // only surface later as a failed put, so flag them up front.
    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    if !has_access_key || !has_secret_key {
        tracing::warn!(
            "AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)"
        );
    }

    let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()));
    // Local S3 stand-ins (minio, localstack) need an explicit endpoint
    if let Some(endpoint_url) = &config.s3_endpoint_url {
        aws_config_loader = aws_config_loader.endpoint_url(endpoint_url);
    }
    let aws_config = aws_config_loader.load().await;
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the artifact store (inject S3 client)
    let store: Arc<dyn tracked_reads_backend::infrastructure::storage::ArtifactStore> =
        Arc::new(tracked_reads_backend::infrastructure::storage::S3ArtifactStore::new(
            s3_client,
            config.bucket_name.clone(),
        ));

    // 2. Instantiate the Raindrop API client
    let raindrop: Arc<dyn tracked_reads_backend::infrastructure::raindrop::RaindropApi> =
        Arc::new(tracked_reads_backend::infrastructure::raindrop::RaindropClient::new(
            &config.raindrop_api_token,
            &config.raindrop_api_base_url,
        )?);

    // 3. Instantiate services (inject client and store)
    let reads_service = Arc::new(tracked_reads_backend::domain::reads::ReadsService::new(
        raindrop,
        store.clone(),
        tracked_reads_backend::domain::reads::PublishTargets::from_config(&config),
    ));

    // 4. Instantiate controllers (inject services)
    let reads_controller = Arc::new(
        tracked_reads_backend::controllers::reads::ReadsController::new(reads_service),
    );

    // Start HTTP server with all routes
    start_http_server(config, store, reads_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "tracked_reads_backend=debug,tower_http=debug"
    } else {
        "tracked_reads_backend=info"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
