//! Error types for the publish pipeline.

use alloy_primitives::B256;
use blobrs_blob::BlobError;
use blobrs_kzg::CommitmentError;
use blobrs_tx::TxError;
use num_bigint::BigInt;
use thiserror::Error;

/// An error aborting a publish run.
///
/// Every variant is terminal for the run; only receipt retrieval is retried
/// internally, all other steps are one-shot.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PublishError {
    /// Packing the payload into a blob failed.
    #[error(transparent)]
    Blob(#[from] BlobError),
    /// Computing or verifying the commitment artifacts failed.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
    /// Fetching the remote chain id failed.
    #[error("rpc chainId: {0}")]
    ChainIdFetch(String),
    /// The remote chain id does not match the caller's expectation.
    #[error("chainId mismatch: rpc={got} expected={expected}")]
    ChainIdMismatch {
        /// The chain id reported by the remote node.
        got: u64,
        /// The chain id the caller expected.
        expected: BigInt,
    },
    /// Fetching the pending nonce failed.
    #[error("fetch pending nonce: {0}")]
    NonceFetch(String),
    /// Validating, assembling, or signing the transaction failed.
    #[error(transparent)]
    Tx(#[from] TxError),
    /// Submitting the signed transaction failed.
    ///
    /// Whether blob-carrying transactions need a submission method distinct
    /// from plain transactions is transport-dependent; the hint below
    /// surfaces that instead of retrying an alternate path.
    #[error("send tx: {0}; if this mentions the blob sidecar, the node may require a blob-specific send path")]
    SendFailed(String),
    /// The receipt did not arrive before the polling deadline.
    #[error("timeout waiting for receipt: {0}")]
    ReceiptTimeout(B256),
}
