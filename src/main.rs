use pokeapi_mcp::utils::logger;
use pokeapi_mcp::PokeApiServer;
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_server_logger();

    tracing::info!("Starting PokeAPI MCP server...");

    let server = PokeApiServer::new()?;
    let service = server.serve(stdio()).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    service.waiting().await?;

    tracing::info!("PokeAPI MCP server stopped");
    Ok(())
}
