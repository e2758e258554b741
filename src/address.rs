// SPDX-License-Identifier: AGPL-3.0-or-later

//! Ethereum address validation.
//!
//! Applied before any network call; the only defense against spending a
//! remote call on garbage input.

use std::str::FromStr;

use alloy::primitives::Address;

/// Parse a canonical Ethereum address: `0x` followed by exactly 40 hex
/// digits, any case. The EIP-55 checksum is not enforced.
pub fn parse_address(s: &str) -> Option<Address> {
    if s.len() != 42 || !s.starts_with("0x") {
        return None;
    }
    Address::from_str(s).ok()
}

/// Whether a string is a well-formed Ethereum address.
pub fn is_valid_address(s: &str) -> bool {
    parse_address(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
    const BINANCE: &str = "0x47ac0Fb4F2D84898e4D9E7b4DaB3C24507a6D503";

    #[test]
    fn accepts_valid_addresses() {
        assert!(is_valid_address(USDT));
        assert!(is_valid_address(BINANCE));
        // Case-insensitive.
        assert!(is_valid_address(&USDT.to_lowercase()));
        assert!(is_valid_address(&USDT.to_uppercase().replace("0X", "0x")));
        assert!(is_valid_address("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0x"));
        assert!(!is_valid_address("0xdAC17F958D2ee523a2206206994597C13D831ec")); // 39 digits
        assert!(!is_valid_address("0xdAC17F958D2ee523a2206206994597C13D831ec77")); // 41 digits
    }

    #[test]
    fn rejects_missing_prefix_and_bad_characters() {
        assert!(!is_valid_address("dAC17F958D2ee523a2206206994597C13D831ec7aa"));
        assert!(!is_valid_address("0xdAC17F958D2ee523a2206206994597C13D831eZZ"));
        assert!(!is_valid_address("not-an-address"));
    }
}
