use bitcoin::{Address, Txid};

use super::throttle::Throttle;
use super::types::{UnspentOutput, UnspentResponse};
use super::Transport;
use crate::config::ExportConfig;
use crate::error::UtxoExportError;
use crate::Result;

/// Client for a WhatsOnChain-compatible explorer API
///
/// Every request goes through the throttle, so the client on its own keeps
/// the pipeline under the explorer's rate limit.
#[derive(Debug)]
pub struct ExplorerClient<T: Transport> {
    transport: T,
    base_url: String,
    throttle: Throttle,
}

impl<T: Transport> ExplorerClient<T> {
    pub fn new(transport: T, config: &ExportConfig) -> Self {
        Self {
            transport,
            base_url: config.explorer_url.trim_end_matches('/').to_string(),
            throttle: Throttle::new(config.request_interval),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List all unspent outputs of an address
    ///
    /// GET {base}/address/{address}/unspent/all
    pub async fn unspent_outputs(&self, address: &Address) -> Result<Vec<UnspentOutput>> {
        let url = format!("{}/address/{}/unspent/all", self.base_url, address);
        let body = self.get(&url).await?;

        let response: UnspentResponse = serde_json::from_str(&body).map_err(|e| {
            UtxoExportError::decode(format!(
                "Unexpected unspent outputs response for {}: {}",
                address, e
            ))
        })?;

        log::debug!(
            "Explorer reported {} unspent outputs for {}",
            response.result.len(),
            address
        );

        Ok(response.result)
    }

    /// Raw transaction hex, whitespace trimmed
    ///
    /// GET {base}/tx/{txid}/hex
    pub async fn raw_transaction(&self, txid: &Txid) -> Result<String> {
        let url = format!("{}/tx/{}/hex", self.base_url, txid);
        let body = self.get(&url).await?;
        Ok(body.trim().to_string())
    }

    async fn get(&self, url: &str) -> Result<String> {
        self.throttle.wait().await;
        log::debug!("GET {}", url);
        self.transport.get(url).await
    }
}
