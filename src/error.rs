//! Error types for UTXO export operations
//!
//! Every variant aborts the run: there is no retry and no partial report.

use bitcoin::Txid;
use thiserror::Error;

/// Core error type for the export pipeline
#[derive(Error, Debug)]
pub enum UtxoExportError {
    /// Input string is not a valid address for the configured network
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Nothing to process
    #[error("No addresses given")]
    NoAddresses,

    /// Transport failure or non-success response from the explorer
    #[error("Network error: {0}")]
    Network(String),

    /// Explorer JSON or transaction encoding does not match what we expect
    #[error("Decode error: {0}")]
    Decode(String),

    /// Explorer reported an output index the transaction does not have
    #[error("Output index {vout} out of range for transaction {txid} ({outputs} outputs)")]
    IndexOutOfRange {
        txid: Txid,
        vout: u32,
        outputs: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UtxoExportError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<reqwest::Error> for UtxoExportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
