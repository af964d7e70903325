/// Explorer API response types
///
/// These mirror the WhatsOnChain JSON format. Unknown fields are ignored so
/// schema additions on the explorer side do not break decoding.
use bitcoin::Txid;
use serde::{Deserialize, Serialize};

/// Response from /address/{address}/unspent/all
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnspentResponse {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
    pub result: Vec<UnspentOutput>,
}

/// One unspent output as reported by the explorer
///
/// Only `tx_hash`, `tx_pos` and `value` feed the report; the confirmation
/// fields are kept for completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutput {
    #[serde(default)]
    pub height: u32,
    pub tx_pos: u32,
    pub tx_hash: Txid,
    pub value: u64,
    #[serde(rename = "isSpentInMempoolTx", default)]
    pub is_spent_in_mempool_tx: bool,
    #[serde(default)]
    pub status: String,
}
