//! The linear publish pipeline.

use crate::{
    chain::ensure_chain_id_matches,
    errors::PublishError,
    poller::{await_receipt, PollConfig},
    transport::{PublisherTransport, TxReceipt},
};
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{Address, Bytes, B256};
use alloy_signer_local::PrivateKeySigner;
use blobrs_kzg::CommitmentEngine;
use blobrs_tx::{build_and_sign, BuildParams};
use num_bigint::BigInt;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

/// The timeout bounding each one-shot network operation (chain id check,
/// nonce fetch, submission). Receipt polling runs under its own deadline.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(15);

/// The caller's intent for a single publish run.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// The chain id the transaction must be bound to.
    pub chain_id: BigInt,
    /// The recipient address.
    pub to: Address,
    /// The transferred value in wei. Defaults to zero.
    pub value: Option<BigInt>,
    /// The call data. Defaults to empty.
    pub data: Option<Bytes>,
    /// The gas limit. Defaults to [blobrs_tx::DEFAULT_GAS_LIMIT].
    pub gas_limit: Option<u64>,
    /// The EIP-1559 base fee cap in wei.
    pub max_fee_per_gas: BigInt,
    /// The EIP-1559 priority fee cap in wei.
    pub max_priority_fee_per_gas: BigInt,
    /// The blob fee cap in wei.
    pub max_fee_per_blob_gas: BigInt,
    /// The timeout for one-shot network operations.
    pub rpc_timeout: Duration,
    /// The receipt poller timing.
    pub poll: PollConfig,
}

impl PublishRequest {
    /// Creates a new [PublishRequest] with default value, data, gas limit,
    /// and timing.
    pub fn new(
        chain_id: BigInt,
        to: Address,
        max_fee_per_gas: BigInt,
        max_priority_fee_per_gas: BigInt,
        max_fee_per_blob_gas: BigInt,
    ) -> Self {
        Self {
            chain_id,
            to,
            value: None,
            data: None,
            gas_limit: None,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            max_fee_per_blob_gas,
            rpc_timeout: RPC_TIMEOUT,
            poll: PollConfig::default(),
        }
    }
}

/// The terminal artifacts of a successful publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// The hash of the published transaction.
    pub tx_hash: B256,
    /// The sender address recovered from the signature.
    pub sender: Address,
    /// The nonce the transaction was signed with.
    pub nonce: u64,
    /// The inclusion receipt.
    pub receipt: TxReceipt,
}

/// Runs a single publish: packs the payload, computes the commitment
/// artifacts, verifies the remote chain id, fetches the pending nonce, signs
/// the blob transaction, submits it, and polls for its receipt.
///
/// The sequence is strictly linear; any step failure aborts the run in place
/// and a new invocation restarts from the beginning. Only receipt retrieval
/// is retried.
pub async fn publish<T, E>(
    transport: &T,
    engine: &E,
    signer: &PrivateKeySigner,
    request: PublishRequest,
    payload: &[u8],
) -> Result<PublishOutcome, PublishError>
where
    T: PublisherTransport + Sync,
    E: CommitmentEngine,
{
    let (blob, meta) = blobrs_blob::pack(payload)?;
    info!(payload_len = meta.payload_len, max_payload = meta.max_payload, "blob built");

    let artifacts = blobrs_kzg::compute_artifacts(engine, &blob)?;
    info!(versioned_hash = %artifacts.versioned_hash, "kzg artifacts computed");

    let remote = timeout(request.rpc_timeout, transport.chain_id())
        .await
        .map_err(|e| PublishError::ChainIdFetch(e.to_string()))?
        .map_err(|e| PublishError::ChainIdFetch(e.to_string()))?;
    ensure_chain_id_matches(remote, &request.chain_id)?;
    info!(chain_id = remote, "chain id verified");

    // The pending nonce is fetched immediately before signing; only one
    // transaction is ever in flight per run.
    let nonce = timeout(request.rpc_timeout, transport.pending_nonce(signer.address()))
        .await
        .map_err(|e| PublishError::NonceFetch(e.to_string()))?
        .map_err(|e| PublishError::NonceFetch(e.to_string()))?;

    let params = BuildParams {
        chain_id: request.chain_id,
        nonce,
        to: request.to,
        value: request.value,
        data: request.data,
        gas_limit: request.gas_limit,
        max_fee_per_gas: request.max_fee_per_gas,
        max_priority_fee_per_gas: request.max_priority_fee_per_gas,
        max_fee_per_blob_gas: request.max_fee_per_blob_gas,
        blob,
        artifacts,
    };
    let (envelope, sender) = build_and_sign(params, signer)?;
    let tx_hash = *envelope.tx_hash();
    info!(%tx_hash, %sender, nonce, "type-3 tx signed");

    timeout(request.rpc_timeout, transport.send_raw_transaction(envelope.encoded_2718().into()))
        .await
        .map_err(|e| PublishError::SendFailed(e.to_string()))?
        .map_err(|e| PublishError::SendFailed(e.to_string()))?;
    info!(%tx_hash, "tx sent, waiting for receipt");

    let receipt = await_receipt(transport, tx_hash, request.poll).await?;
    info!(status = receipt.status, block = receipt.block_number, "tx mined");

    Ok(PublishOutcome { tx_hash, sender, nonce, receipt })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockTransport;
    use blobrs_kzg::test_utils::StubEngine;
    use std::sync::atomic::Ordering;

    const TEST_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn test_signer() -> PrivateKeySigner {
        TEST_KEY.parse().unwrap()
    }

    fn test_request() -> PublishRequest {
        PublishRequest::new(
            BigInt::from(11155111),
            Address::repeat_byte(0xAA),
            BigInt::from(30_000_000_000u64),
            BigInt::from(2_000_000_000u64),
            BigInt::from(30_000_000_000u64),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_happy_path() {
        let transport = MockTransport {
            chain_id: Some(11155111),
            nonce: Some(3),
            receipt: Some(TxReceipt { status: 1, block_number: 100 }),
            absent_polls: 2,
            ..Default::default()
        };
        let signer = test_signer();

        let outcome = publish(
            &transport,
            &StubEngine::default(),
            &signer,
            test_request(),
            &[0x01, 0x02, 0x03, 0x04, 0x05],
        )
        .await
        .unwrap();

        assert_eq!(outcome.sender, signer.address());
        assert_eq!(outcome.nonce, 3);
        assert_eq!(outcome.receipt, TxReceipt { status: 1, block_number: 100 });
        assert_eq!(transport.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_aborts_on_chain_mismatch() {
        let transport = MockTransport { chain_id: Some(1), ..Default::default() };

        let err = publish(&transport, &StubEngine::default(), &test_signer(), test_request(), b"x")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PublishError::ChainIdMismatch { got: 1, expected: BigInt::from(11155111) }
        );
        // Nothing may be signed or submitted after a chain guard failure.
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_aborts_on_nonce_failure() {
        let transport = MockTransport { chain_id: Some(11155111), ..Default::default() };

        let err = publish(&transport, &StubEngine::default(), &test_signer(), test_request(), b"x")
            .await
            .unwrap_err();

        assert_eq!(err, PublishError::NonceFetch("nonce not set".to_string()));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_surfaces_send_failure() {
        let transport = MockTransport {
            chain_id: Some(11155111),
            nonce: Some(0),
            send_error: Some("blob sidecar rejected".to_string()),
            ..Default::default()
        };

        let err = publish(&transport, &StubEngine::default(), &test_signer(), test_request(), b"x")
            .await
            .unwrap_err();

        assert_eq!(err, PublishError::SendFailed("blob sidecar rejected".to_string()));
        assert!(err.to_string().contains("blob-specific send path"));
        assert_eq!(transport.polls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_times_out_waiting_for_receipt() {
        let transport = MockTransport {
            chain_id: Some(11155111),
            nonce: Some(0),
            ..Default::default()
        };

        let err = publish(&transport, &StubEngine::default(), &test_signer(), test_request(), b"x")
            .await
            .unwrap_err();

        assert!(matches!(err, PublishError::ReceiptTimeout(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_rejects_oversized_payload() {
        let transport = MockTransport::default();
        let payload = vec![0u8; blobrs_blob::MAX_PAYLOAD + 1];

        let err =
            publish(&transport, &StubEngine::default(), &test_signer(), test_request(), &payload)
                .await
                .unwrap_err();

        assert_eq!(
            err,
            PublishError::Blob(blobrs_blob::BlobError::PayloadTooLarge {
                len: blobrs_blob::MAX_PAYLOAD + 1,
                max: blobrs_blob::MAX_PAYLOAD,
            })
        );
    }
}
