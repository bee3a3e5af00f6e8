use advice_mind::{config::Config, server::AdviceMindServer};
use anyhow::Result;
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    advice_mind::load_env();

    // Load configuration using the typed config system
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Initialize tracing with configurable log level
    let log_level = config
        .runtime
        .log_level
        .as_deref()
        .unwrap_or("advice_mind=info,rmcp=info");
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_ansi(false)
        .init();

    info!("Starting Advice Mind MCP Server");
    info!(
        max_transcript_chars = config.pipeline.max_transcript_chars,
        top_chart_items = config.pipeline.top_chart_items,
        "Configuration loaded"
    );

    let server = AdviceMindServer::new(&config);

    info!("Available tools: generate_advice, advantage_increment, record_progress, detailed_help");

    // Start MCP server with stdio transport
    let service = server.serve(stdio()).await.map_err(|e| {
        eprintln!("Failed to start MCP service: {}", e);
        e
    })?;

    info!("MCP Server ready - waiting for requests...");
    service.waiting().await?;

    Ok(())
}
