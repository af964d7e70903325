//! In-memory transport for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::Transport;
use crate::error::UtxoExportError;
use crate::Result;

/// Serves fixed bodies by URL and records every request
#[derive(Debug, Default)]
pub(crate) struct FixtureTransport {
    responses: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FixtureTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| UtxoExportError::network(format!("GET {} failed with status 404", url)))
    }
}
