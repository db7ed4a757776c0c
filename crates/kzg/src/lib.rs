#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]

pub mod engine;
pub use engine::CommitmentEngine;

pub mod ckzg;
pub use ckzg::{CkzgEngine, CkzgError};

pub mod hash;
pub use hash::{commitment_to_versioned_hash, VERSIONED_HASH_VERSION};

pub mod artifacts;
pub use artifacts::{compute_artifacts, CommitmentArtifacts};

pub mod errors;
pub use errors::CommitmentError;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
