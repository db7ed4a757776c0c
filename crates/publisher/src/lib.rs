#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]

pub mod transport;
pub use transport::{PublisherTransport, TxReceipt};

pub mod online;
pub use online::OnlineTransport;

pub mod chain;
pub use chain::ensure_chain_id_matches;

pub mod poller;
pub use poller::{await_receipt, PollConfig};

pub mod pipeline;
pub use pipeline::{publish, PublishOutcome, PublishRequest, RPC_TIMEOUT};

pub mod errors;
pub use errors::PublishError;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
