use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use utxo_export::input::{read_address_file, read_pasted_addresses};
use utxo_export::{ExplorerNetwork, ExportConfig, ScriptFormat, UtxoExporter};

/// Export the unspent outputs of BSV addresses, with the locking script of
/// each output, as JSON.
///
/// Addresses are taken from --file, else from the ADDRESS argument, else
/// pasted on stdin (one per line, ending with a blank line).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with one address per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Explorer network: main, test or stn (overrides WOC_NETWORK)
    #[arg(long)]
    network: Option<ExplorerNetwork>,

    /// Explorer API base URL (overrides EXPLORER_URL)
    #[arg(long)]
    explorer_url: Option<String>,

    /// Locking script rendering: hex or asm (overrides SCRIPT_FORMAT)
    #[arg(long)]
    script_format: Option<ScriptFormat>,

    /// Milliseconds between explorer requests (overrides REQUEST_INTERVAL_MS)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Single address to process
    address: Option<String>,
}

impl Cli {
    fn config(&self) -> ExportConfig {
        let mut config = ExportConfig::from_env();
        if let Some(network) = self.network {
            config = config.with_network(network);
        }
        if let Some(url) = &self.explorer_url {
            config.explorer_url = url.trim_end_matches('/').to_string();
        }
        if let Some(format) = self.script_format {
            config.script_format = format;
        }
        if let Some(ms) = self.interval_ms {
            config.request_interval = Duration::from_millis(ms);
        }
        config
    }

    fn addresses(&self) -> anyhow::Result<Vec<String>> {
        let addresses = if let Some(path) = &self.file {
            read_address_file(path)
                .with_context(|| format!("Failed to read addresses from {}", path.display()))?
        } else if let Some(address) = &self.address {
            vec![address.trim().to_string()]
        } else {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Please paste a list of addresses, one per line, followed by a blank line:");
            }
            read_pasted_addresses(stdin.lock()).context("Failed to read addresses from stdin")?
        };

        if addresses.iter().all(|a| a.is_empty()) {
            bail!("No addresses given");
        }
        Ok(addresses)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logger (set RUST_LOG=debug for verbose output, RUST_LOG=info for normal)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();
    let addresses = cli.addresses()?;

    log::info!(
        "Exporting UTXOs of {} addresses from {}",
        addresses.len(),
        config.explorer_url
    );

    let mut exporter =
        UtxoExporter::from_config(config).context("Failed to create explorer client")?;
    let report = exporter
        .export(&addresses)
        .await
        .context("UTXO export failed")?;

    let json = report.to_json_pretty()?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            log::info!(
                "Output written to {} ({} UTXOs, {} sats)",
                path.display(),
                report.utxo_count(),
                report.total_satoshis()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
