//! The receipt poller.

use crate::{
    errors::PublishError,
    transport::{PublisherTransport, TxReceipt},
};
use alloy_primitives::B256;
use std::time::Duration;
use tokio::time::Instant;

/// Timing configuration for the receipt poller: a flat bounded retry loop
/// with no backoff and no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// The fixed interval between polls.
    pub interval: Duration,
    /// The overall deadline for the poll loop.
    pub deadline: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(2), deadline: Duration::from_secs(120) }
    }
}

/// Polls the transport for the inclusion receipt of `tx_hash` until it
/// arrives or the deadline elapses.
///
/// Transport errors and absent receipts are both treated as "not yet
/// included"; the loop keeps polling until [PollConfig::deadline] is
/// exhausted, at which point it fails with [PublishError::ReceiptTimeout].
pub async fn await_receipt<T>(
    transport: &T,
    tx_hash: B256,
    cfg: PollConfig,
) -> Result<TxReceipt, PublishError>
where
    T: PublisherTransport + Sync,
{
    let deadline = Instant::now() + cfg.deadline;

    while Instant::now() < deadline {
        if let Ok(Some(receipt)) = transport.transaction_receipt(tx_hash).await {
            return Ok(receipt);
        }
        tokio::time::sleep(cfg.interval).await;
    }
    Err(PublishError::ReceiptTimeout(tx_hash))
}
