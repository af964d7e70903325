/// In-memory fixture store
///
/// Holds the unspent outputs and raw transactions the mock serves, and
/// counts requests per path so tests can assert on traffic.
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, RwLock};

use crate::types::*;

#[derive(Default)]
pub struct FixtureStore {
    addresses: RwLock<HashMap<String, Vec<UnspentEntry>>>,
    transactions: RwLock<HashMap<String, String>>,
    requests: Mutex<HashMap<String, u64>>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from parsed fixtures
    pub fn from_fixtures(fixtures: FixtureFile) -> Self {
        let store = Self::new();
        for (address, utxos) in fixtures.addresses {
            store.add_address(address, utxos);
        }
        for (txid, hex) in fixtures.transactions {
            store.add_transaction(txid, hex);
        }
        store
    }

    /// Load fixtures from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures from {}", path.display()))?;
        let fixtures: FixtureFile =
            serde_json::from_str(&contents).context("Invalid fixture file")?;

        log::info!(
            "Loaded {} addresses and {} transactions from {}",
            fixtures.addresses.len(),
            fixtures.transactions.len(),
            path.display()
        );

        Ok(Self::from_fixtures(fixtures))
    }

    /// Replace the unspent outputs of an address
    pub fn add_address(&self, address: impl Into<String>, utxos: Vec<UnspentEntry>) {
        self.addresses
            .write()
            .unwrap()
            .insert(address.into(), utxos);
    }

    pub fn add_transaction(&self, txid: impl Into<String>, hex: impl Into<String>) {
        self.transactions
            .write()
            .unwrap()
            .insert(txid.into().to_lowercase(), hex.into());
    }

    /// Unspent outputs of an address; unknown addresses have none
    pub fn unspent(&self, address: &str) -> Vec<UnspentEntry> {
        self.addresses
            .read()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_default()
    }

    pub fn transaction_hex(&self, txid: &str) -> Option<String> {
        self.transactions
            .read()
            .unwrap()
            .get(&txid.to_lowercase())
            .cloned()
    }

    pub fn record_request(&self, path: &str) {
        *self
            .requests
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert(0) += 1;
    }

    pub fn request_count(&self, path: &str) -> u64 {
        self.requests
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_requests(&self) -> u64 {
        self.requests.lock().unwrap().values().sum()
    }

    pub fn request_counts(&self) -> HashMap<String, u64> {
        self.requests.lock().unwrap().clone()
    }
}
