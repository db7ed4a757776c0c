//! A [CommitmentEngine] backed by the `c-kzg` library.

use crate::engine::CommitmentEngine;
use alloy_eips::eip4844::{env_settings::EnvKzgSettings, Blob, Bytes48};
use thiserror::Error;

/// An error returned by the `c-kzg` library.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("c-kzg: {0}")]
pub struct CkzgError(String);

impl From<c_kzg::Error> for CkzgError {
    fn from(err: c_kzg::Error) -> Self {
        Self(format!("{err:?}"))
    }
}

/// A [CommitmentEngine] implementation over the `c-kzg` library, using the
/// embedded mainnet trusted setup by default.
#[derive(Debug, Default)]
pub struct CkzgEngine {
    /// The KZG settings holding the trusted setup points.
    settings: EnvKzgSettings,
}

impl CkzgEngine {
    /// Creates a new [CkzgEngine] with the given settings.
    pub const fn new(settings: EnvKzgSettings) -> Self {
        Self { settings }
    }
}

impl CommitmentEngine for CkzgEngine {
    type Error = CkzgError;

    fn blob_to_commitment(&self, blob: &Blob) -> Result<Bytes48, Self::Error> {
        let blob = c_kzg::Blob::from_bytes(blob.as_slice())?;
        let commitment = c_kzg::KzgCommitment::blob_to_kzg_commitment(&blob, self.settings.get())?;
        Ok(Bytes48::from(commitment.to_bytes().into_inner()))
    }

    fn blob_proof(&self, blob: &Blob, commitment: &Bytes48) -> Result<Bytes48, Self::Error> {
        let blob = c_kzg::Blob::from_bytes(blob.as_slice())?;
        let commitment = c_kzg::Bytes48::from_bytes(commitment.as_slice())?;
        let proof =
            c_kzg::KzgProof::compute_blob_kzg_proof(&blob, &commitment, self.settings.get())?;
        Ok(Bytes48::from(proof.to_bytes().into_inner()))
    }

    fn verify_blob_proof(
        &self,
        blob: &Blob,
        commitment: &Bytes48,
        proof: &Bytes48,
    ) -> Result<bool, Self::Error> {
        let blob = c_kzg::Blob::from_bytes(blob.as_slice())?;
        let commitment = c_kzg::Bytes48::from_bytes(commitment.as_slice())?;
        let proof = c_kzg::Bytes48::from_bytes(proof.as_slice())?;
        Ok(c_kzg::KzgProof::verify_blob_kzg_proof(
            &blob,
            &commitment,
            &proof,
            self.settings.get(),
        )?)
    }
}
