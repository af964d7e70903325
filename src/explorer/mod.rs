//! Block explorer access
//!
//! - `Transport`: the single "GET a URL, return the body" capability
//! - `HttpTransport`: reqwest implementation of it
//! - `ExplorerClient`: URL building, request pacing and response decoding
//!   for the WhatsOnChain-style API

pub mod client;
pub mod throttle;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::UtxoExportError;
use crate::Result;

// Re-export main types
pub use client::ExplorerClient;
pub use throttle::Throttle;
pub use types::{UnspentOutput, UnspentResponse};

/// Read-only request/response capability used for every explorer call
///
/// Implementations return the body of a successful response and map
/// transport failures and non-success statuses to `UtxoExportError::Network`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

/// HTTP transport backed by a shared reqwest client
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("utxo-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                UtxoExportError::network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UtxoExportError::network(format!(
                "GET {} failed with status {}: {}",
                url,
                status,
                error_text.trim()
            )));
        }

        Ok(response.text().await?)
    }
}
