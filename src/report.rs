//! Report types
//!
//! The JSON layout is consumed by wallet import tooling, so field names are
//! fixed: `tx_id`, `vout`, `previous_tx_script`, `satoshis`.

use bitcoin::Txid;
use serde::{Deserialize, Serialize};

use crate::Result;

/// One spendable output with the script needed to spend it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoRecord {
    pub tx_id: Txid,
    pub vout: u32,
    pub previous_tx_script: String,
    pub satoshis: u64,
}

/// Unspent outputs of one address, in explorer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoList {
    pub address: String,
    pub utxos: Vec<UtxoRecord>,
}

impl UtxoList {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            utxos: Vec::new(),
        }
    }

    pub fn total_satoshis(&self) -> u64 {
        self.utxos
            .iter()
            .fold(0u64, |acc, u| acc.saturating_add(u.satoshis))
    }
}

/// Export result: one list per input address, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(pub Vec<UtxoList>);

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, list: UtxoList) {
        self.0.push(list);
    }

    pub fn lists(&self) -> &[UtxoList] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn utxo_count(&self) -> usize {
        self.0.iter().map(|l| l.utxos.len()).sum()
    }

    pub fn total_satoshis(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.total_satoshis()))
    }

    /// Pretty JSON, two-space indent
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
