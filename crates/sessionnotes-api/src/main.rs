use sessionnotes_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (tracing, upload directory, routes)
    let (_state, router) = sessionnotes_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    sessionnotes_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
