//! HTTP reachability probing.

use async_trait::async_trait;
use tracing::debug;

use crate::config::PollConfig;

/// Answers the single question "is the internet reachable right now?".
///
/// Probe failures are folded into `false`; there is no error channel, per
/// the detector's contract that unreachable is a valid steady state rather
/// than a failure.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn check(&self) -> bool;
}

/// Probes an ordered list of well-known endpoints with HTTP HEAD requests.
///
/// Short-circuits on the first 2xx response. A timeout, DNS failure or
/// refused connection only rules out that endpoint; the overall result is
/// `false` only when every endpoint failed.
pub struct HttpProbe {
    client: reqwest::Client,
    endpoints: Vec<String>,
}

impl HttpProbe {
    pub fn new(config: &PollConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoints: config.endpoints.clone(),
        }
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn check(&self) -> bool {
        for url in &self.endpoints {
            match self.client.head(url).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(url = %url, "probe endpoint answered");
                    return true;
                }
                Ok(response) => {
                    debug!(url = %url, status = %response.status(), "probe endpoint answered non-2xx");
                }
                Err(err) => {
                    debug!(url = %url, error = %err, "probe endpoint unreachable");
                }
            }
        }
        false
    }
}
