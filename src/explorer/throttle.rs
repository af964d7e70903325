//! Request pacing
//!
//! Keeps consecutive explorer requests at least `interval` apart. The first
//! request goes out immediately.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next request is allowed, then claim the slot
    pub async fn wait(&self) {
        let mut last_request = self.last_request.lock().await;

        if let Some(last) = *last_request {
            let ready_at = last + self.interval;
            if ready_at > Instant::now() {
                log::trace!("Pacing explorer request for {:?}", ready_at - Instant::now());
                sleep_until(ready_at).await;
            }
        }

        *last_request = Some(Instant::now());
    }
}
