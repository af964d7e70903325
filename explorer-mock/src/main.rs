/// Explorer Mock Server
///
/// A lightweight mock of the WhatsOnChain address/transaction endpoints,
/// serving fixtures from memory. Designed for local testing of utxo-export.
use anyhow::{Context, Result};
use explorer_mock::{run_server, FixtureStore};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
struct Config {
    // Fixtures
    fixtures_path: Option<PathBuf>,

    // Server
    server_host: String,
    server_port: u16,
}

impl Config {
    fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let fixtures_path = env::var("FIXTURES_PATH").ok().map(PathBuf::from);

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("Invalid SERVER_PORT")?;

        Ok(Self {
            fixtures_path,
            server_host,
            server_port,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Explorer Mock Server...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    log::info!(
        "Server will listen on {}:{}",
        config.server_host,
        config.server_port
    );

    let store = match &config.fixtures_path {
        Some(path) => FixtureStore::load(path)?,
        None => {
            log::info!("No FIXTURES_PATH set, starting empty");
            FixtureStore::new()
        }
    };

    // Run server
    run_server(Arc::new(store), config.server_host, config.server_port)
        .await
        .context("Server error")?;

    Ok(())
}
