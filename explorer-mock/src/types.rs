/// Explorer API response types
///
/// These match the WhatsOnChain format so clients can consume them transparently.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response from /address/{address}/unspent/all
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnspentResponse {
    pub address: String,
    pub script: String,
    pub result: Vec<UnspentEntry>,
    pub error: String,
}

/// One unspent output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentEntry {
    pub height: u32,
    pub tx_pos: u32,
    pub tx_hash: String,
    pub value: u64,
    #[serde(rename = "isSpentInMempoolTx", default)]
    pub is_spent_in_mempool_tx: bool,
    #[serde(default = "confirmed")]
    pub status: String,
}

fn confirmed() -> String {
    "confirmed".to_string()
}

/// Body of POST /fixtures/address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressFixture {
    pub address: String,
    pub utxos: Vec<UnspentEntry>,
}

/// Body of POST /fixtures/tx
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionFixture {
    pub txid: String,
    pub hex: String,
}

/// Fixture file layout (FIXTURES_PATH)
///
/// ```json
/// {
///   "addresses": { "1LY2M3RC...": [ { "height": 1, "tx_pos": 0, "tx_hash": "...", "value": 1000 } ] },
///   "transactions": { "<txid>": "<raw hex>" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub addresses: HashMap<String, Vec<UnspentEntry>>,
    #[serde(default)]
    pub transactions: HashMap<String, String>,
}
