//! The [PublisherTransport] trait.

use alloy_primitives::{Address, Bytes, B256};
use async_trait::async_trait;

/// A minimal inclusion receipt for a submitted transaction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// The execution status (1 = success).
    #[serde(with = "alloy_serde::quantity")]
    pub status: u64,
    /// The number of the block the transaction was included in.
    #[serde(with = "alloy_serde::quantity")]
    pub block_number: u64,
}

/// The execution-layer operations consumed by the publish pipeline.
///
/// The pipeline imposes no framing requirements beyond these four semantic
/// operations; wire-protocol compatibility is the implementation's concern.
#[async_trait]
pub trait PublisherTransport {
    /// The error type for [PublisherTransport] implementations.
    type Error: core::fmt::Display + ToString;

    /// Returns the remote node's chain id.
    async fn chain_id(&self) -> Result<u64, Self::Error>;

    /// Returns the pending nonce for the given address.
    async fn pending_nonce(&self, address: Address) -> Result<u64, Self::Error>;

    /// Submits a signed, network-encoded transaction and returns its hash.
    async fn send_raw_transaction(&self, encoded: Bytes) -> Result<B256, Self::Error>;

    /// Returns the inclusion receipt for a transaction, or `None` while the
    /// transaction is not yet included.
    async fn transaction_receipt(&self, tx_hash: B256) -> Result<Option<TxReceipt>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes_quantity_fields() {
        let raw = r#"{"status":"0x1","blockNumber":"0x6f9","transactionIndex":"0x0"}"#;
        let receipt: TxReceipt = serde_json::from_str(raw).unwrap();
        assert_eq!(receipt, TxReceipt { status: 1, block_number: 0x6f9 });
    }

    #[test]
    fn test_absent_receipt_deserializes_as_none() {
        let receipt: Option<TxReceipt> = serde_json::from_str("null").unwrap();
        assert!(receipt.is_none());
    }
}
