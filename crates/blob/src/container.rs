//! The `BR01` blob container codec.

use crate::errors::BlobError;
use alloy_eips::eip4844::{Blob, BYTES_PER_BLOB};
use alloy_primitives::Bytes;

/// The fixed EIP-4844 blob size in bytes (128 KiB).
pub const BLOB_SIZE: usize = BYTES_PER_BLOB;

/// The container header size: 4 bytes of magic plus an 8 byte length field.
pub const HEADER_SIZE: usize = 12;

/// The container magic, versioned in the last two bytes.
pub const MAGIC: [u8; 4] = *b"BR01";

/// The maximum payload a single blob can carry.
pub const MAX_PAYLOAD: usize = BLOB_SIZE - HEADER_SIZE;

/// Descriptive metadata accompanying a pack or unpack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meta {
    /// The payload length in bytes.
    pub payload_len: u64,
    /// The maximum payload length in bytes.
    pub max_payload: u64,
}

/// Packs a payload into a fixed-size blob.
///
/// The payload is prefixed with the [MAGIC] and its little-endian length, and
/// the remainder of the blob is zero padded. Fails with
/// [BlobError::PayloadTooLarge] when the payload exceeds [MAX_PAYLOAD].
pub fn pack(payload: &[u8]) -> Result<(Box<Blob>, Meta), BlobError> {
    if payload.len() > MAX_PAYLOAD {
        return Err(BlobError::PayloadTooLarge { len: payload.len(), max: MAX_PAYLOAD });
    }

    let mut blob = Box::new(Blob::ZERO);
    blob[0..4].copy_from_slice(&MAGIC);
    blob[4..HEADER_SIZE].copy_from_slice(&(payload.len() as u64).to_le_bytes());
    blob[HEADER_SIZE..HEADER_SIZE + payload.len()].copy_from_slice(payload);

    let meta = Meta { payload_len: payload.len() as u64, max_payload: MAX_PAYLOAD as u64 };
    Ok((blob, meta))
}

/// Unpacks the payload from a blob, validating the container header.
///
/// Fails with [BlobError::InvalidMagic] when the magic does not match and
/// with [BlobError::InvalidLength] when the decoded length exceeds
/// [MAX_PAYLOAD].
pub fn unpack(blob: &Blob) -> Result<(Bytes, Meta), BlobError> {
    if blob[0..4] != MAGIC {
        return Err(BlobError::InvalidMagic);
    }

    let len = u64::from_le_bytes(blob[4..HEADER_SIZE].try_into().expect("sliced to 8 bytes"));
    if len > MAX_PAYLOAD as u64 {
        return Err(BlobError::InvalidLength { len, max: MAX_PAYLOAD as u64 });
    }

    let payload = Bytes::copy_from_slice(&blob[HEADER_SIZE..HEADER_SIZE + len as usize]);
    let meta = Meta { payload_len: len, max_payload: MAX_PAYLOAD as u64 };
    Ok((payload, meta))
}
