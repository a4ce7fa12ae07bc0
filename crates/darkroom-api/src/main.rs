use darkroom_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    darkroom_api::telemetry::init_tracing();
    tracing::info!("Configuration loaded and validated successfully");

    // Initialize the application (storage, state, routes)
    let (_state, router) = darkroom_api::setup::initialize_app(config.clone())?;

    // Start the server
    darkroom_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
