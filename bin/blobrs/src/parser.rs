//! Parser functions for CLI arguments.

use alloy_signer_local::PrivateKeySigner;
use num_bigint::BigInt;

/// Parse a hex string (with or without `0x` prefix) into a [PrivateKeySigner].
pub(crate) fn parse_signer(s: &str) -> Result<PrivateKeySigner, String> {
    s.trim_start_matches("0x")
        .parse()
        .map_err(|e| format!("not a valid secp256k1 key: {e}"))
}

/// Converts a gwei amount into wei. Negative amounts are passed through so
/// the transaction builder can report the offending field.
pub(crate) fn gwei_to_wei(gwei: i64) -> BigInt {
    BigInt::from(gwei) * 1_000_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signer_accepts_prefixed_keys() {
        let key = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
        let plain = parse_signer(key).unwrap();
        let prefixed = parse_signer(&format!("0x{key}")).unwrap();
        assert_eq!(plain.address(), prefixed.address());
    }

    #[test]
    fn test_parse_signer_rejects_garbage() {
        assert!(parse_signer("not-a-key").is_err());
    }

    #[test]
    fn test_gwei_to_wei() {
        assert_eq!(gwei_to_wei(30), BigInt::from(30_000_000_000u64));
        assert_eq!(gwei_to_wei(-2), BigInt::from(-2_000_000_000i64));
    }
}
