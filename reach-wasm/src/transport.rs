//! Transport heuristic over the user-agent string.

use reach_traits::status::TransportType;

/// Substrings that mark a mobile browser. Matched case-insensitively.
const MOBILE_HINTS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "mobile",
    "windows phone",
    "opera mini",
];

/// Infers the transport type from the browser environment.
///
/// A mobile user agent is taken to mean a cellular connection and anything
/// else WiFi. This is a heuristic, not a measurement: a phone on WiFi or a
/// tethered laptop will be misclassified. While offline no transport claim
/// is made at all.
pub fn transport_from_user_agent(online: bool, user_agent: &str) -> TransportType {
    if !online {
        return TransportType::Unknown;
    }
    let ua = user_agent.to_ascii_lowercase();
    if MOBILE_HINTS.iter().any(|hint| ua.contains(hint)) {
        TransportType::Cellular
    } else {
        TransportType::Wifi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

    #[wasm_bindgen_test]
    fn test_mobile_user_agents_read_as_cellular() {
        assert_eq!(
            transport_from_user_agent(true, ANDROID_UA),
            TransportType::Cellular
        );
        assert_eq!(
            transport_from_user_agent(true, IPHONE_UA),
            TransportType::Cellular
        );
    }

    #[wasm_bindgen_test]
    fn test_desktop_user_agent_reads_as_wifi() {
        assert_eq!(
            transport_from_user_agent(true, DESKTOP_UA),
            TransportType::Wifi
        );
    }

    #[wasm_bindgen_test]
    fn test_offline_is_unknown_regardless_of_user_agent() {
        assert_eq!(
            transport_from_user_agent(false, ANDROID_UA),
            TransportType::Unknown
        );
        assert_eq!(
            transport_from_user_agent(false, DESKTOP_UA),
            TransportType::Unknown
        );
    }

    #[wasm_bindgen_test]
    fn test_empty_user_agent_defaults_to_wifi() {
        assert_eq!(transport_from_user_agent(true, ""), TransportType::Wifi);
    }
}
