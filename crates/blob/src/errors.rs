//! Error types for the blob container.

use thiserror::Error;

/// An error returned while packing or unpacking the `BR01` blob container.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BlobError {
    /// The payload does not fit in a single blob.
    #[error("payload too large: {len} bytes (max {max})")]
    PayloadTooLarge {
        /// The length of the rejected payload.
        len: usize,
        /// The maximum payload length.
        max: usize,
    },
    /// The blob does not start with the `BR01` magic.
    #[error("invalid blob magic header")]
    InvalidMagic,
    /// The decoded payload length exceeds the container capacity.
    #[error("invalid payload length in blob: {len} (max {max})")]
    InvalidLength {
        /// The decoded payload length.
        len: u64,
        /// The maximum payload length.
        max: u64,
    },
}
