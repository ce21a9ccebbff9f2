use anyhow::Result;
use chefmate_core::OpenRouterClient;
use chefmate_server::config::ServerConfig;
use chefmate_server::{api, app, telemetry};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    telemetry::init_telemetry();

    let config = ServerConfig::from_env()?;

    let ai_client = OpenRouterClient::new(config.ai.clone());
    tracing::info!(
        model = ai_client.model(),
        base_url = %config.ai.base_url,
        "AI client configured"
    );

    let app = app(Arc::new(ai_client));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
