//! Test utilities for the KZG boundary.

use crate::engine::CommitmentEngine;
use alloy_eips::eip4844::{Blob, Bytes48};
use core::convert::Infallible;

/// A deterministic [CommitmentEngine] stub returning fixed artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubEngine {
    /// The commitment to return.
    pub commitment: Bytes48,
    /// The proof to return.
    pub proof: Bytes48,
    /// The verdict returned by proof verification.
    pub verify: bool,
}

impl Default for StubEngine {
    fn default() -> Self {
        Self { commitment: Bytes48::from([0x11; 48]), proof: Bytes48::from([0x22; 48]), verify: true }
    }
}

impl CommitmentEngine for StubEngine {
    type Error = Infallible;

    fn blob_to_commitment(&self, _: &Blob) -> Result<Bytes48, Self::Error> {
        Ok(self.commitment)
    }

    fn blob_proof(&self, _: &Blob, _: &Bytes48) -> Result<Bytes48, Self::Error> {
        Ok(self.proof)
    }

    fn verify_blob_proof(&self, _: &Blob, _: &Bytes48, _: &Bytes48) -> Result<bool, Self::Error> {
        Ok(self.verify)
    }
}
