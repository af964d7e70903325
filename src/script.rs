//! Locking script extraction from raw transactions

use std::fmt;
use std::str::FromStr;

use bitcoin::{Script, Transaction};

use crate::error::UtxoExportError;
use crate::Result;

/// How locking scripts are rendered in the report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScriptFormat {
    /// Lowercase hex of the script bytes
    #[default]
    Hex,
    /// Opcode mnemonics, e.g. `OP_DUP OP_HASH160 OP_PUSHBYTES_20 ... OP_CHECKSIG`
    Asm,
}

impl ScriptFormat {
    pub fn render(&self, script: &Script) -> String {
        match self {
            Self::Hex => hex::encode(script.as_bytes()),
            Self::Asm => script.to_asm_string(),
        }
    }
}

impl fmt::Display for ScriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
            Self::Asm => f.write_str("asm"),
        }
    }
}

impl FromStr for ScriptFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "asm" => Ok(Self::Asm),
            other => Err(format!("unknown script format '{}'", other)),
        }
    }
}

/// Decode a hex consensus-encoded transaction
pub fn decode_transaction(raw_hex: &str) -> Result<Transaction> {
    let raw_hex = raw_hex.trim();
    if raw_hex.is_empty() {
        return Err(UtxoExportError::decode("Empty transaction hex"));
    }

    let bytes = hex::decode(raw_hex)
        .map_err(|e| UtxoExportError::decode(format!("Transaction is not valid hex: {}", e)))?;

    bitcoin::consensus::deserialize(&bytes)
        .map_err(|e| UtxoExportError::decode(format!("Failed to decode transaction: {}", e)))
}

/// Locking script of output `vout`, rendered in `format`
pub fn extract_locking_script(raw_hex: &str, vout: u32, format: ScriptFormat) -> Result<String> {
    let tx = decode_transaction(raw_hex)?;
    locking_script(&tx, vout, format)
}

/// Same as `extract_locking_script` for an already decoded transaction
pub fn locking_script(tx: &Transaction, vout: u32, format: ScriptFormat) -> Result<String> {
    let output = tx
        .output
        .get(vout as usize)
        .ok_or_else(|| UtxoExportError::IndexOutOfRange {
            txid: tx.compute_txid(),
            vout,
            outputs: tx.output.len(),
        })?;

    Ok(format.render(&output.script_pubkey))
}
