//! The chain guard.

use crate::errors::PublishError;
use num_bigint::BigInt;

/// Ensures the remote node's chain id matches the caller's expectation.
///
/// A mismatch is fatal and must abort the run before anything is signed, so
/// a transaction bound to the wrong network is never constructed.
pub fn ensure_chain_id_matches(got: u64, expected: &BigInt) -> Result<(), PublishError> {
    if BigInt::from(got) != *expected {
        return Err(PublishError::ChainIdMismatch { got, expected: expected.clone() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_chain_ids() {
        assert!(ensure_chain_id_matches(11155111, &BigInt::from(11155111)).is_ok());
    }

    #[test]
    fn test_mismatched_chain_ids() {
        assert_eq!(
            ensure_chain_id_matches(1, &BigInt::from(11155111)),
            Err(PublishError::ChainIdMismatch { got: 1, expected: BigInt::from(11155111) })
        );
    }
}
