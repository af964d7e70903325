/// Export configuration from environment variables
///
/// Controls which BSV network addresses are validated against, which
/// explorer the pipeline talks to, and how requests are paced.
/// Defaults to mainnet on WhatsOnChain.
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::script::ScriptFormat;

/// WhatsOnChain API root; the network name is appended
pub const WHATSONCHAIN_API: &str = "https://api.whatsonchain.com/v1/bsv";

/// WhatsOnChain allows 3 requests per second without an API key
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(350);

/// Explorer network name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorerNetwork {
    Main,
    Test,
    Stn,
}

impl ExplorerNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Stn => "stn",
        }
    }

    /// Address encoding rules for this network
    ///
    /// BSV shares the legacy base58 version bytes with Bitcoin; the scaling
    /// test network uses the testnet prefixes.
    pub fn bitcoin_network(&self) -> bitcoin::Network {
        match self {
            Self::Main => bitcoin::Network::Bitcoin,
            Self::Test | Self::Stn => bitcoin::Network::Testnet,
        }
    }

    /// Default explorer base URL for this network
    pub fn default_explorer_url(&self) -> String {
        format!("{}/{}", WHATSONCHAIN_API, self.as_str())
    }
}

impl fmt::Display for ExplorerNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExplorerNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Main),
            "test" | "testnet" => Ok(Self::Test),
            "stn" => Ok(Self::Stn),
            other => Err(format!("unknown network '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// Network addresses must belong to
    pub network: ExplorerNetwork,
    /// Explorer API base URL (no trailing slash)
    pub explorer_url: String,
    /// Minimum spacing between two explorer requests
    pub request_interval: Duration,
    /// Rendering of locking scripts in the report
    pub script_format: ScriptFormat,
}

impl ExportConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WOC_NETWORK`: "main" (default), "test" or "stn"
    /// - `EXPLORER_URL`: explorer API base URL (defaults to WhatsOnChain for the network)
    /// - `REQUEST_INTERVAL_MS`: pacing between requests in milliseconds (default 350)
    /// - `SCRIPT_FORMAT`: "hex" (default) or "asm"
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Mainnet on WhatsOnChain (default)
    /// cargo run -- 1LY2M3RCkEVKo82ym1SQ1iZGQhM5Lf5Pkf
    ///
    /// # Local mock explorer, no pacing
    /// EXPLORER_URL=http://localhost:3000 REQUEST_INTERVAL_MS=0 cargo run -- --file addresses.txt
    /// ```
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup("WOC_NETWORK") {
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("{}, defaulting to main", e);
                ExplorerNetwork::Main
            }),
            None => ExplorerNetwork::Main,
        };

        let explorer_url = lookup("EXPLORER_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| network.default_explorer_url());

        let request_interval = match lookup("REQUEST_INTERVAL_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    log::warn!(
                        "Invalid REQUEST_INTERVAL_MS '{}', defaulting to {} ms",
                        value,
                        DEFAULT_REQUEST_INTERVAL.as_millis()
                    );
                    DEFAULT_REQUEST_INTERVAL
                }
            },
            None => DEFAULT_REQUEST_INTERVAL,
        };

        let script_format = match lookup("SCRIPT_FORMAT") {
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("{}, defaulting to hex", e);
                ScriptFormat::Hex
            }),
            None => ScriptFormat::Hex,
        };

        log::debug!(
            "Explorer: {} (network {}, {} ms between requests)",
            explorer_url,
            network,
            request_interval.as_millis()
        );

        Self {
            network,
            explorer_url,
            request_interval,
            script_format,
        }
    }

    /// Switch network, moving the explorer URL along if it was the default
    pub fn with_network(mut self, network: ExplorerNetwork) -> Self {
        if self.explorer_url == self.network.default_explorer_url() {
            self.explorer_url = network.default_explorer_url();
        }
        self.network = network;
        self
    }
}

impl Default for ExportConfig {
    /// Mainnet on WhatsOnChain
    fn default() -> Self {
        Self {
            network: ExplorerNetwork::Main,
            explorer_url: ExplorerNetwork::Main.default_explorer_url(),
            request_interval: DEFAULT_REQUEST_INTERVAL,
            script_format: ScriptFormat::Hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_mainnet_whatsonchain() {
        let config = ExportConfig::default();
        assert_eq!(config.network, ExplorerNetwork::Main);
        assert_eq!(
            config.explorer_url,
            "https://api.whatsonchain.com/v1/bsv/main"
        );
        assert_eq!(config.request_interval, Duration::from_millis(350));
        assert_eq!(config.script_format, ScriptFormat::Hex);
    }

    #[test]
    fn test_empty_environment_matches_default() {
        let config = ExportConfig::from_lookup(|_| None);
        let default = ExportConfig::default();
        assert_eq!(config.network, default.network);
        assert_eq!(config.explorer_url, default.explorer_url);
        assert_eq!(config.request_interval, default.request_interval);
    }

    #[test]
    fn test_overrides() {
        let config = ExportConfig::from_lookup(lookup_from(&[
            ("WOC_NETWORK", "test"),
            ("EXPLORER_URL", "http://localhost:3000/"),
            ("REQUEST_INTERVAL_MS", "0"),
            ("SCRIPT_FORMAT", "asm"),
        ]));
        assert_eq!(config.network, ExplorerNetwork::Test);
        assert_eq!(config.explorer_url, "http://localhost:3000");
        assert_eq!(config.request_interval, Duration::ZERO);
        assert_eq!(config.script_format, ScriptFormat::Asm);
    }

    #[test]
    fn test_network_selects_default_url() {
        let config = ExportConfig::from_lookup(lookup_from(&[("WOC_NETWORK", "stn")]));
        assert_eq!(config.explorer_url, "https://api.whatsonchain.com/v1/bsv/stn");
        assert!(matches!(
            config.network.bitcoin_network(),
            bitcoin::Network::Testnet
        ));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ExportConfig::from_lookup(lookup_from(&[
            ("WOC_NETWORK", "regtest"),
            ("REQUEST_INTERVAL_MS", "fast"),
            ("SCRIPT_FORMAT", "json"),
        ]));
        assert_eq!(config.network, ExplorerNetwork::Main);
        assert_eq!(config.request_interval, DEFAULT_REQUEST_INTERVAL);
        assert_eq!(config.script_format, ScriptFormat::Hex);
    }

    #[test]
    fn test_with_network_keeps_custom_url() {
        let custom = ExportConfig {
            explorer_url: "http://localhost:3000".to_string(),
            ..Default::default()
        }
        .with_network(ExplorerNetwork::Test);
        assert_eq!(custom.explorer_url, "http://localhost:3000");

        let default = ExportConfig::default().with_network(ExplorerNetwork::Test);
        assert_eq!(default.explorer_url, "https://api.whatsonchain.com/v1/bsv/test");
    }
}
