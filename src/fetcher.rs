//! Raw transaction fetching with a run-scoped cache
//!
//! Several UTXOs of the same address (or of different addresses) often come
//! from one transaction. The cache makes sure each transaction is requested
//! from the explorer, and decoded, at most once per fetcher.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use bitcoin::{Transaction, Txid};

use crate::error::UtxoExportError;
use crate::explorer::{ExplorerClient, Transport};
use crate::script::decode_transaction;
use crate::Result;

#[derive(Debug, Clone)]
struct CachedTransaction {
    raw_hex: String,
    tx: Transaction,
}

/// Fetched transactions by txid, kept both as raw hex and decoded
///
/// Unbounded and never evicted; transactions are immutable so an entry
/// never goes stale.
#[derive(Debug, Default, Clone)]
pub struct TransactionCache {
    entries: HashMap<Txid, CachedTransaction>,
}

impl TransactionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, txid: &Txid) -> Option<&str> {
        self.entries.get(txid).map(|entry| entry.raw_hex.as_str())
    }

    pub fn transaction(&self, txid: &Txid) -> Option<&Transaction> {
        self.entries.get(txid).map(|entry| &entry.tx)
    }

    /// Cache `tx` under its computed txid
    pub fn insert(&mut self, tx: Transaction) -> Txid {
        let txid = tx.compute_txid();
        let raw_hex = bitcoin::consensus::encode::serialize_hex(&tx);
        self.entries.insert(txid, CachedTransaction { raw_hex, tx });
        txid
    }

    pub fn contains(&self, txid: &Txid) -> bool {
        self.entries.contains_key(txid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub hits: usize,
    pub misses: usize,
}

pub struct TransactionFetcher<T: Transport> {
    explorer: Arc<ExplorerClient<T>>,
    cache: TransactionCache,
    stats: FetchStats,
}

impl<T: Transport> TransactionFetcher<T> {
    pub fn new(explorer: Arc<ExplorerClient<T>>) -> Self {
        Self::with_cache(explorer, TransactionCache::new())
    }

    /// Start from a pre-populated cache
    pub fn with_cache(explorer: Arc<ExplorerClient<T>>, cache: TransactionCache) -> Self {
        Self {
            explorer,
            cache,
            stats: FetchStats::default(),
        }
    }

    /// Raw hex of `txid`, from cache or explorer
    pub async fn fetch_hex(&mut self, txid: &Txid) -> Result<String> {
        Ok(self.load(txid).await?.raw_hex.clone())
    }

    /// Decoded transaction `txid`, from cache or explorer
    pub async fn fetch_transaction(&mut self, txid: &Txid) -> Result<&Transaction> {
        Ok(&self.load(txid).await?.tx)
    }

    /// A freshly fetched body is only cached once it decodes to a
    /// transaction whose id matches the one requested, so an error page
    /// served with a success status can't poison the cache.
    async fn load(&mut self, txid: &Txid) -> Result<&CachedTransaction> {
        match self.cache.entries.entry(*txid) {
            Entry::Occupied(entry) => {
                log::debug!("Transaction cache hit: {}", txid);
                self.stats.hits += 1;
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(slot) => {
                log::debug!("Transaction cache miss: {}", txid);
                self.stats.misses += 1;

                let raw_hex = self.explorer.raw_transaction(txid).await?;

                let tx = decode_transaction(&raw_hex).map_err(|e| {
                    UtxoExportError::decode(format!(
                        "Explorer returned bad hex for {}: {}",
                        txid, e
                    ))
                })?;
                let computed = tx.compute_txid();
                if computed != *txid {
                    return Err(UtxoExportError::decode(format!(
                        "Explorer returned transaction {} when asked for {}",
                        computed, txid
                    )));
                }

                Ok(&*slot.insert(CachedTransaction { raw_hex, tx }))
            }
        }
    }

    pub fn cache(&self) -> &TransactionCache {
        &self.cache
    }

    pub fn stats(&self) -> FetchStats {
        self.stats
    }

    pub fn explorer(&self) -> &ExplorerClient<T> {
        &self.explorer
    }
}
