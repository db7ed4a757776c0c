//! Commitment artifact computation for a packed blob.

use crate::{
    commitment_to_versioned_hash, engine::CommitmentEngine, errors::CommitmentError,
};
use alloy_eips::eip4844::{Blob, Bytes48};
use alloy_primitives::B256;

/// The commitment artifacts for a single blob, as carried by a type-3
/// transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitmentArtifacts {
    /// The KZG commitment to the blob.
    pub commitment: Bytes48,
    /// The blob proof for the commitment.
    pub proof: Bytes48,
    /// The versioned hash derived from the commitment.
    pub versioned_hash: B256,
}

/// Computes the commitment, proof, and versioned hash for a blob.
///
/// The proof is verified immediately after it is computed; a negative verdict
/// fails with [CommitmentError::ProofVerificationFailed]. This guards against
/// silent corruption in the engine or its inputs rather than serving as a
/// diagnostic.
pub fn compute_artifacts<E: CommitmentEngine>(
    engine: &E,
    blob: &Blob,
) -> Result<CommitmentArtifacts, CommitmentError> {
    let commitment = engine
        .blob_to_commitment(blob)
        .map_err(|e| CommitmentError::computation("blob_to_commitment", e))?;
    let proof = engine
        .blob_proof(blob, &commitment)
        .map_err(|e| CommitmentError::computation("blob_proof", e))?;

    match engine.verify_blob_proof(blob, &commitment, &proof) {
        Ok(true) => {}
        Ok(false) => return Err(CommitmentError::ProofVerificationFailed),
        Err(e) => return Err(CommitmentError::computation("verify_blob_proof", e)),
    }

    let versioned_hash = commitment_to_versioned_hash(&commitment);
    Ok(CommitmentArtifacts { commitment, proof, versioned_hash })
}
