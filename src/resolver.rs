//! Per-address unspent output lookup

use std::sync::Arc;

use bitcoin::Address;

use crate::explorer::{ExplorerClient, Transport, UnspentOutput};
use crate::Result;

pub struct UtxoResolver<T: Transport> {
    explorer: Arc<ExplorerClient<T>>,
}

impl<T: Transport> UtxoResolver<T> {
    pub fn new(explorer: Arc<ExplorerClient<T>>) -> Self {
        Self { explorer }
    }

    /// Unspent outputs of `address`, in explorer response order
    pub async fn resolve(&self, address: &Address) -> Result<Vec<UnspentOutput>> {
        let outputs = self.explorer.unspent_outputs(address).await?;

        let total = outputs
            .iter()
            .fold(0u64, |acc, o| acc.saturating_add(o.value));
        log::debug!(
            "{}: {} unspent outputs, {} sats",
            address,
            outputs.len(),
            total
        );

        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportConfig;
    use crate::error::UtxoExportError;
    use crate::explorer::testing::FixtureTransport;
    use std::str::FromStr;
    use std::time::Duration;

    const ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

    fn resolver(transport: FixtureTransport) -> UtxoResolver<FixtureTransport> {
        let config = ExportConfig {
            explorer_url: "http://explorer.test".to_string(),
            request_interval: Duration::ZERO,
            ..Default::default()
        };
        UtxoResolver::new(Arc::new(ExplorerClient::new(transport, &config)))
    }

    fn address() -> Address {
        Address::from_str(ADDRESS).unwrap().assume_checked()
    }

    fn url() -> String {
        format!("http://explorer.test/address/{}/unspent/all", ADDRESS)
    }

    #[tokio::test]
    async fn test_preserves_response_order() {
        let body = r#"{"result":[
            {"height":10,"tx_pos":1,"tx_hash":"1111111111111111111111111111111111111111111111111111111111111111","value":5,"isSpentInMempoolTx":false,"status":"confirmed"},
            {"height":0,"tx_pos":0,"tx_hash":"2222222222222222222222222222222222222222222222222222222222222222","value":7,"isSpentInMempoolTx":false,"status":"unconfirmed"},
            {"height":9,"tx_pos":4,"tx_hash":"1111111111111111111111111111111111111111111111111111111111111111","value":9,"isSpentInMempoolTx":true,"status":"confirmed"}
        ]}"#;
        let resolver = resolver(FixtureTransport::new().with(&url(), body));

        let outputs = resolver.resolve(&address()).await.unwrap();
        let positions: Vec<(u32, u64)> = outputs.iter().map(|o| (o.tx_pos, o.value)).collect();
        assert_eq!(positions, vec![(1, 5), (0, 7), (4, 9)]);
    }

    #[tokio::test]
    async fn test_empty_result() {
        let resolver = resolver(FixtureTransport::new().with(&url(), r#"{"result":[]}"#));
        assert!(resolver.resolve(&address()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_values_summing_past_u64_max() {
        let body = r#"{"result":[
            {"height":1,"tx_pos":0,"tx_hash":"1111111111111111111111111111111111111111111111111111111111111111","value":18446744073709551615},
            {"height":1,"tx_pos":1,"tx_hash":"2222222222222222222222222222222222222222222222222222222222222222","value":1}
        ]}"#;
        let resolver = resolver(FixtureTransport::new().with(&url(), body));

        let outputs = resolver.resolve(&address()).await.unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].value, u64::MAX);
    }

    #[tokio::test]
    async fn test_wrong_schema_is_decode_error() {
        let resolver = resolver(
            FixtureTransport::new().with(&url(), r#"{"result":[{"tx_pos":"zero"}]}"#),
        );
        assert!(matches!(
            resolver.resolve(&address()).await,
            Err(UtxoExportError::Decode(_))
        ));
    }
}
