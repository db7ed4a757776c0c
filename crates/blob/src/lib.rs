#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod container;
pub use container::{pack, unpack, Meta, BLOB_SIZE, HEADER_SIZE, MAGIC, MAX_PAYLOAD};

pub mod errors;
pub use errors::BlobError;
