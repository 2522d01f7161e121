//! Polling detector configuration.

use std::time::Duration;

/// Tunables for the polling detector.
///
/// The defaults carry the detector's standard cadence; hosts that need a
/// different poll rate or their own probe endpoints construct the monitor
/// with an explicit config instead of patching constants.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// How often the background task re-evaluates connectivity.
    pub poll_interval: Duration,
    /// How long a completed probe result is reused before re-probing.
    pub cache_ttl: Duration,
    /// TCP connect timeout per probe endpoint.
    pub connect_timeout: Duration,
    /// Total request timeout per probe endpoint.
    pub request_timeout: Duration,
    /// Probe endpoints, tried in order until one answers 2xx.
    pub endpoints: Vec<String>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(3),
            cache_ttl: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(2),
            endpoints: vec![
                "https://clients3.google.com/generate_204".to_string(),
                "https://www.cloudflare.com".to_string(),
                "https://www.amazon.com".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cadence() {
        let config = PollConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(3));
        assert_eq!(config.cache_ttl, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(!config.endpoints.is_empty());
    }
}
