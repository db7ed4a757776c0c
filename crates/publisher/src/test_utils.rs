//! Test utilities for the publish pipeline.

use crate::transport::{PublisherTransport, TxReceipt};
use alloy_primitives::{Address, Bytes, B256};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};
use thiserror::Error;

/// A scripted [PublisherTransport] for tests.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// The chain id to report.
    pub chain_id: Option<u64>,
    /// The pending nonce to report.
    pub nonce: Option<u64>,
    /// The hash returned on submission. Defaults to [B256::ZERO].
    pub send_hash: Option<B256>,
    /// When set, submission fails with this message.
    pub send_error: Option<String>,
    /// The receipt eventually returned by receipt lookups.
    pub receipt: Option<TxReceipt>,
    /// How many receipt lookups fail before any receipt is reported.
    pub receipt_errors: usize,
    /// How many receipt lookups report "absent" before the receipt.
    pub absent_polls: usize,
    /// The number of receipt lookups performed so far.
    pub polls: AtomicUsize,
    /// The raw transactions submitted so far.
    pub sent: Mutex<Vec<Bytes>>,
}

/// A mock transport error.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MockTransportError {
    /// The chain id is not set.
    #[error("chain_id not set")]
    ChainIdNotSet,
    /// The nonce is not set.
    #[error("nonce not set")]
    NonceNotSet,
    /// The scripted submission failure.
    #[error("{0}")]
    SendRejected(String),
    /// The scripted receipt lookup failure.
    #[error("receipt lookup failed")]
    ReceiptLookupFailed,
}

#[async_trait]
impl PublisherTransport for MockTransport {
    type Error = MockTransportError;

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        self.chain_id.ok_or(MockTransportError::ChainIdNotSet)
    }

    async fn pending_nonce(&self, _: Address) -> Result<u64, Self::Error> {
        self.nonce.ok_or(MockTransportError::NonceNotSet)
    }

    async fn send_raw_transaction(&self, encoded: Bytes) -> Result<B256, Self::Error> {
        if let Some(msg) = &self.send_error {
            return Err(MockTransportError::SendRejected(msg.clone()));
        }
        self.sent.lock().expect("poisoned").push(encoded);
        Ok(self.send_hash.unwrap_or(B256::ZERO))
    }

    async fn transaction_receipt(&self, _: B256) -> Result<Option<TxReceipt>, Self::Error> {
        let n = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
        if n <= self.receipt_errors {
            return Err(MockTransportError::ReceiptLookupFailed);
        }
        match self.receipt {
            Some(receipt) if n > self.receipt_errors + self.absent_polls => Ok(Some(receipt)),
            _ => Ok(None),
        }
    }
}
