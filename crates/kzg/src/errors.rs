//! Error types for the KZG boundary.

use thiserror::Error;

/// An error crossing the [crate::CommitmentEngine] boundary.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CommitmentError {
    /// The engine failed while computing a commitment or proof.
    #[error("{stage} failed: {message}")]
    ComputationFailed {
        /// The engine operation that failed.
        stage: &'static str,
        /// The engine's error text.
        message: String,
    },
    /// The freshly computed proof did not verify against its blob and
    /// commitment.
    #[error("blob proof verification failed")]
    ProofVerificationFailed,
}

impl CommitmentError {
    /// Creates a [CommitmentError::ComputationFailed] for the given stage.
    pub fn computation(stage: &'static str, err: impl core::fmt::Display) -> Self {
        Self::ComputationFailed { stage, message: err.to_string() }
    }
}
