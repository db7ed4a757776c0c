//! Versioned hash derivation for blob commitments.

use alloy_eips::eip4844::Bytes48;
use alloy_primitives::B256;
use sha2::{Digest, Sha256};

/// The version byte for EIP-4844 blob versioned hashes.
pub const VERSIONED_HASH_VERSION: u8 = 0x01;

/// Derives the versioned hash for a blob commitment:
/// `versioned_hash = version_byte || sha256(commitment)[1..32]`.
pub fn commitment_to_versioned_hash(commitment: &Bytes48) -> B256 {
    let mut hash = B256::from_slice(Sha256::digest(commitment.as_slice()).as_slice());
    hash[0] = VERSIONED_HASH_VERSION;
    hash
}
