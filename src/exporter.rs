//! Report assembly
//!
//! Runs the whole pipeline: validate every address, then for each address in
//! order list its unspent outputs and, for each output in order, fetch the
//! source transaction and pull out the locking script. The first error
//! aborts the run.

use std::sync::Arc;

use crate::address::validate_addresses;
use crate::config::ExportConfig;
use crate::explorer::{ExplorerClient, HttpTransport, Transport};
use crate::fetcher::{FetchStats, TransactionFetcher};
use crate::report::{Report, UtxoList, UtxoRecord};
use crate::resolver::UtxoResolver;
use crate::script::locking_script;
use crate::Result;

pub struct UtxoExporter<T: Transport> {
    config: ExportConfig,
    resolver: UtxoResolver<T>,
    fetcher: TransactionFetcher<T>,
}

impl UtxoExporter<HttpTransport> {
    /// Exporter talking HTTP to the configured explorer
    pub fn from_config(config: ExportConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new()?, config))
    }
}

impl<T: Transport> UtxoExporter<T> {
    pub fn new(transport: T, config: ExportConfig) -> Self {
        let explorer = Arc::new(ExplorerClient::new(transport, &config));
        Self {
            resolver: UtxoResolver::new(explorer.clone()),
            fetcher: TransactionFetcher::new(explorer),
            config,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn fetch_stats(&self) -> FetchStats {
        self.fetcher.stats()
    }

    pub fn fetcher(&self) -> &TransactionFetcher<T> {
        &self.fetcher
    }

    pub async fn export<S: AsRef<str>>(&mut self, addresses: &[S]) -> Result<Report> {
        self.export_with_progress(addresses, |_, _, _| {}).await
    }

    /// Export, calling `on_progress(index, total, address)` before each address
    pub async fn export_with_progress<S, F>(
        &mut self,
        addresses: &[S],
        mut on_progress: F,
    ) -> Result<Report>
    where
        S: AsRef<str>,
        F: FnMut(usize, usize, &str),
    {
        let validated = validate_addresses(addresses, self.config.network)?;
        let total = validated.len();

        log::info!("Processing {} addresses", total);

        let mut report = Report::new();
        for (index, address) in validated.iter().enumerate() {
            let address_str = address.to_string();
            on_progress(index, total, &address_str);
            log::info!(
                "Fetching UTXOs for address {} ({} out of {})",
                address_str,
                index + 1,
                total
            );

            let mut list = UtxoList::new(address_str);
            for output in self.resolver.resolve(address).await? {
                let tx = self.fetcher.fetch_transaction(&output.tx_hash).await?;
                let script = locking_script(tx, output.tx_pos, self.config.script_format)?;

                list.utxos.push(UtxoRecord {
                    tx_id: output.tx_hash,
                    vout: output.tx_pos,
                    previous_tx_script: script,
                    satoshis: output.value,
                });
            }

            log::debug!(
                "{}: {} UTXOs, {} sats",
                list.address,
                list.utxos.len(),
                list.total_satoshis()
            );
            report.push(list);
        }

        let stats = self.fetcher.stats();
        log::info!(
            "Processing done: {} UTXOs across {} addresses ({} transactions fetched, {} cache hits)",
            report.utxo_count(),
            report.len(),
            stats.misses,
            stats.hits
        );

        Ok(report)
    }
}
