//! An online [PublisherTransport] over an alloy HTTP provider.

use crate::transport::{PublisherTransport, TxReceipt};
use alloy_primitives::{Address, Bytes, B256, U64};
use alloy_provider::{Provider, ReqwestProvider};
use alloy_transport::{RpcError, TransportErrorKind};
use async_trait::async_trait;

/// A [PublisherTransport] backed by an Ethereum JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct OnlineTransport {
    /// The inner Ethereum JSON-RPC provider.
    inner: ReqwestProvider,
}

impl OnlineTransport {
    /// Creates a new [OnlineTransport] with the given alloy provider.
    pub const fn new(inner: ReqwestProvider) -> Self {
        Self { inner }
    }

    /// Creates a new [OnlineTransport] from the provided [reqwest::Url].
    pub fn new_http(url: reqwest::Url) -> Self {
        Self::new(ReqwestProvider::new_http(url))
    }
}

#[async_trait]
impl PublisherTransport for OnlineTransport {
    type Error = RpcError<TransportErrorKind>;

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        self.inner.get_chain_id().await
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64, Self::Error> {
        let nonce: U64 = self
            .inner
            .raw_request("eth_getTransactionCount".into(), (address, "pending"))
            .await?;
        Ok(nonce.to::<u64>())
    }

    async fn send_raw_transaction(&self, encoded: Bytes) -> Result<B256, Self::Error> {
        self.inner.raw_request("eth_sendRawTransaction".into(), (encoded,)).await
    }

    async fn transaction_receipt(&self, tx_hash: B256) -> Result<Option<TxReceipt>, Self::Error> {
        self.inner.raw_request("eth_getTransactionReceipt".into(), (tx_hash,)).await
    }
}
