use label_server::{Config, Server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env + logging
    setup_environment()?;

    // 2. Configuration
    let config = Config::from_env();
    tracing::info!(
        port = config.http_port,
        database = %config.database_path,
        "Label server starting..."
    );

    // 3. Serve until Ctrl-C
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
