//! Display helpers
//!
//! Client-side twins of the gateway's pure utilities. Duplicated rather
//! than shared; the gateway crate does not build for WASM.

/// Shorten a 42-character address to `first6...last4`
pub fn shorten_address(address: &str) -> String {
    if address.len() != 42 || !address.is_char_boundary(6) || !address.is_char_boundary(38) {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[38..])
}

/// 2021-08-13T00:00:00Z, the start of cycle 1
const GENESIS_UNIX: i64 = 1_628_812_800;

/// Length of one governance cycle, in seconds
const CYCLE_SECS: i64 = 14 * 24 * 60 * 60;

/// Governance cycle number containing the given unix timestamp
pub fn cycle_at(unix: i64) -> i64 {
    if unix < GENESIS_UNIX {
        return 0;
    }
    (unix - GENESIS_UNIX) / CYCLE_SECS + 1
}

/// The governance cycle number right now
pub fn current_cycle() -> i64 {
    cycle_at(chrono::Utc::now().timestamp())
}

/// Human label for a space's network id
pub fn network_label(network: Option<&str>) -> &'static str {
    match network {
        Some("1") | None => "Ethereum",
        Some("5") => "Goerli",
        Some("10") => "Optimism",
        Some("137") => "Polygon",
        Some("42161") => "Arbitrum",
        _ => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[test]
    #[wasm_bindgen_test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x25910143C255828F623786f46fe9A8941B7983bB"),
            "0x2591...83bB"
        );
        assert_eq!(shorten_address("jbdao.eth"), "jbdao.eth");
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_cycle_at() {
        assert_eq!(cycle_at(GENESIS_UNIX), 1);
        assert_eq!(cycle_at(GENESIS_UNIX + CYCLE_SECS - 1), 1);
        assert_eq!(cycle_at(GENESIS_UNIX + CYCLE_SECS), 2);
        assert_eq!(cycle_at(GENESIS_UNIX - 1), 0);
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_network_label() {
        assert_eq!(network_label(Some("1")), "Ethereum");
        assert_eq!(network_label(None), "Ethereum");
        assert_eq!(network_label(Some("9999")), "Other");
    }
}
