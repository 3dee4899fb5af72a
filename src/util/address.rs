//! Wallet address helpers

/// The all-zero Ethereum address
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Shorten a 42-character address to `first6...last4`
///
/// Anything that is not exactly 42 bytes long is returned unchanged.
pub fn shorten_address(address: &str) -> String {
    if address.len() != 42 || !address.is_char_boundary(6) || !address.is_char_boundary(38) {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[38..])
}

/// Treat the all-zero address as "not set"
pub fn invalidate_zero_address(address: &str) -> Option<&str> {
    if address == ZERO_ADDRESS {
        None
    } else {
        Some(address)
    }
}

/// Build an Etherscan address URL for the given network id
pub fn etherscan_url(network: &str, address: &str) -> String {
    let base = match network {
        "5" | "goerli" => "https://goerli.etherscan.io",
        "11155111" | "sepolia" => "https://sepolia.etherscan.io",
        _ => "https://etherscan.io",
    };
    format!("{}/address/{}", base, urlencoding::encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_full_address() {
        let addr = "0x25910143C255828F623786f46fe9A8941B7983bB";
        assert_eq!(shorten_address(addr), "0x2591...83bB");
    }

    #[test]
    fn test_shorten_other_lengths_unchanged() {
        assert_eq!(shorten_address(""), "");
        assert_eq!(shorten_address("0xabc"), "0xabc");
        assert_eq!(shorten_address("jbdao.eth"), "jbdao.eth");
    }

    #[test]
    fn test_invalidate_zero_address() {
        assert_eq!(invalidate_zero_address(ZERO_ADDRESS), None);
        assert_eq!(invalidate_zero_address("0xabc"), Some("0xabc"));
        assert_eq!(invalidate_zero_address(""), Some(""));
    }

    #[test]
    fn test_etherscan_url() {
        assert_eq!(
            etherscan_url("1", "0xabc"),
            "https://etherscan.io/address/0xabc"
        );
        assert_eq!(
            etherscan_url("goerli", "0xabc"),
            "https://goerli.etherscan.io/address/0xabc"
        );
    }
}
