#![allow(dead_code)]

/// Common test utilities for utxo-export integration tests
///
/// This module provides shared test infrastructure including:
/// - An in-process explorer mock bound to a random local port
/// - Deterministic funding transactions
/// - Export configuration pointing at the mock
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use bitcoin::absolute::LockTime;
use bitcoin::transaction::Version;
use bitcoin::{
    Address, Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness,
};
use explorer_mock::{FixtureStore, UnspentEntry};
use tokio::task::JoinHandle;
use utxo_export::ExportConfig;

pub const ALICE: &str = "1LY2M3RCkEVKo82ym1SQ1iZGQhM5Lf5Pkf";
pub const BOB: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
pub const CAROL: &str = "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2";
pub const P2SH: &str = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";

/// Explorer mock running for the duration of a test
pub struct MockExplorer {
    pub store: Arc<FixtureStore>,
    pub url: String,
    handle: JoinHandle<()>,
}

impl MockExplorer {
    pub fn start() -> anyhow::Result<Self> {
        let store = Arc::new(FixtureStore::new());
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let (addr, handle) = explorer_mock::spawn_on_listener(listener, store.clone())?;

        Ok(Self {
            store,
            url: format!("http://{}", addr),
            handle,
        })
    }

    /// Export configuration pointing at this mock, without pacing
    pub fn config(&self) -> ExportConfig {
        ExportConfig {
            explorer_url: self.url.clone(),
            request_interval: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Serve `tx` from the raw transaction endpoint
    pub fn add_transaction(&self, tx: &Transaction) -> Txid {
        let txid = tx.compute_txid();
        self.store
            .add_transaction(txid.to_string(), bitcoin::consensus::encode::serialize_hex(tx));
        txid
    }

    /// Serve `(txid, vout, value)` entries as the unspent outputs of `address`
    pub fn add_unspent(&self, address: &str, entries: &[(Txid, u32, u64)]) {
        let utxos = entries
            .iter()
            .map(|(txid, vout, value)| UnspentEntry {
                height: 863_675,
                tx_pos: *vout,
                tx_hash: txid.to_string(),
                value: *value,
                is_spent_in_mempool_tx: false,
                status: "confirmed".to_string(),
            })
            .collect();
        self.store.add_address(address, utxos);
    }

    pub fn tx_requests(&self, txid: &Txid) -> u64 {
        self.store.request_count(&format!("/tx/{}/hex", txid))
    }

    pub fn unspent_requests(&self, address: &str) -> u64 {
        self.store
            .request_count(&format!("/address/{}/unspent/all", address))
    }
}

impl Drop for MockExplorer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn script_for(address: &str) -> ScriptBuf {
    Address::from_str(address)
        .expect("Valid address")
        .assume_checked()
        .script_pubkey()
}

pub fn script_hex(address: &str) -> String {
    hex::encode(script_for(address).as_bytes())
}

/// Transaction paying each (address, sats) pair in output order
///
/// `nonce` goes into the input script so otherwise identical payments get
/// distinct txids.
pub fn funding_tx(nonce: u8, payees: &[(&str, u64)]) -> Transaction {
    Transaction {
        version: Version::ONE,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig: ScriptBuf::from_bytes(vec![0x01, nonce]),
            sequence: Sequence::MAX,
            witness: Witness::new(),
        }],
        output: payees
            .iter()
            .map(|(address, sats)| TxOut {
                value: Amount::from_sat(*sats),
                script_pubkey: script_for(address),
            })
            .collect(),
    }
}
