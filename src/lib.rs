//! utxo-export: unspent outputs and locking scripts for BSV addresses
//!
//! This crate resolves the unspent outputs of a list of addresses through a
//! WhatsOnChain-compatible block explorer and recovers the locking script of
//! each output from its source transaction, producing a JSON report that
//! wallet tooling can import and sign against.
//!
//! # Architecture
//!
//! - **Address validation**: every address is checked before any request
//! - **UTXO resolver**: one explorer call per address
//! - **Transaction fetcher**: raw transaction download with a run-scoped cache
//! - **Script extraction**: decode the transaction, render the output script
//! - **Exporter**: sequences all of the above into a `Report`
//!
//! # Example
//!
//! ```ignore
//! use utxo_export::{ExportConfig, UtxoExporter};
//!
//! let mut exporter = UtxoExporter::from_config(ExportConfig::from_env())?;
//! let report = exporter.export(&["1LY2M3RCkEVKo82ym1SQ1iZGQhM5Lf5Pkf"]).await?;
//! println!("{}", report.to_json_pretty()?);
//! ```

// Public modules
pub mod address;
pub mod config;
pub mod error;
pub mod explorer;
pub mod exporter;
pub mod fetcher;
pub mod input;
pub mod report;
pub mod resolver;
pub mod script;

// Re-exports for convenience
pub use address::{validate_address, validate_addresses};
pub use config::{ExplorerNetwork, ExportConfig};
pub use error::UtxoExportError;
pub use explorer::{ExplorerClient, HttpTransport, Transport, UnspentOutput};
pub use exporter::UtxoExporter;
pub use fetcher::{FetchStats, TransactionCache, TransactionFetcher};
pub use report::{Report, UtxoList, UtxoRecord};
pub use resolver::UtxoResolver;
pub use script::{extract_locking_script, ScriptFormat};

// Common result type
pub type Result<T> = std::result::Result<T, UtxoExportError>;
