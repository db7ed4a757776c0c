#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod builder;
pub use builder::{build_and_sign, BuildParams, DEFAULT_GAS_LIMIT};

pub mod numeric;
pub use numeric::{checked_u128, checked_u256, checked_u64};

pub mod errors;
pub use errors::TxError;
