//! Address validation
//!
//! All input addresses are checked up front so a typo at the end of a long
//! list fails the run before a single explorer request is made.

use std::str::FromStr;

use bitcoin::address::{Address, AddressType, NetworkUnchecked};

use crate::config::ExplorerNetwork;
use crate::error::UtxoExportError;
use crate::Result;

/// Parse one address and check it belongs to `network`
///
/// Only base58check P2PKH encodings are accepted. P2SH went away with the
/// Genesis upgrade and BSV has no segwit, so `3...` and bech32 strings are
/// rejected even though they parse.
pub fn validate_address(raw: &str, network: ExplorerNetwork) -> Result<Address> {
    let invalid = || UtxoExportError::InvalidAddress(raw.to_string());

    let unchecked = Address::<NetworkUnchecked>::from_str(raw).map_err(|_| invalid())?;
    let address = unchecked
        .require_network(network.bitcoin_network())
        .map_err(|_| invalid())?;

    match address.address_type() {
        Some(AddressType::P2pkh) => Ok(address),
        _ => Err(invalid()),
    }
}

/// Validate every address, failing on the first invalid one
pub fn validate_addresses<S: AsRef<str>>(
    raw: &[S],
    network: ExplorerNetwork,
) -> Result<Vec<Address>> {
    if raw.is_empty() {
        return Err(UtxoExportError::NoAddresses);
    }

    raw.iter()
        .map(|address| validate_address(address.as_ref(), network))
        .collect()
}
