//! The [CommitmentEngine] trait.

use alloy_eips::eip4844::{Blob, Bytes48};

/// An opaque KZG commitment engine.
///
/// Implementations own the polynomial commitment math; callers only rely on
/// the three operations below. Blobs are passed by reference and never
/// mutated by the engine.
pub trait CommitmentEngine {
    /// The error type for [CommitmentEngine] implementations.
    type Error: core::fmt::Display;

    /// Computes the KZG commitment for a blob.
    fn blob_to_commitment(&self, blob: &Blob) -> Result<Bytes48, Self::Error>;

    /// Computes the blob proof for a blob and its commitment.
    fn blob_proof(&self, blob: &Blob, commitment: &Bytes48) -> Result<Bytes48, Self::Error>;

    /// Verifies a blob proof against the blob and commitment, returning the
    /// verification verdict.
    fn verify_blob_proof(
        &self,
        blob: &Blob,
        commitment: &Bytes48,
        proof: &Bytes48,
    ) -> Result<bool, Self::Error>;
}
