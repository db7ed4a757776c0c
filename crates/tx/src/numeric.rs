//! Checked conversions from caller-supplied big integers into the
//! transaction's fixed-width numeric fields.

use crate::errors::TxError;
use alloy_primitives::U256;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Converts a [BigInt] into a [U256], naming the offending field on a
/// negative or overflowing value.
pub fn checked_u256(field: &'static str, value: &BigInt) -> Result<U256, TxError> {
    if value.sign() == Sign::Minus {
        return Err(TxError::NegativeValue(field));
    }
    let (_, bytes) = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(TxError::NumericOverflow(field));
    }
    Ok(U256::from_be_slice(&bytes))
}

/// Converts a [BigInt] into a [u128], naming the offending field on a
/// negative or overflowing value.
pub fn checked_u128(field: &'static str, value: &BigInt) -> Result<u128, TxError> {
    if value.sign() == Sign::Minus {
        return Err(TxError::NegativeValue(field));
    }
    value.to_u128().ok_or(TxError::NumericOverflow(field))
}

/// Converts a [BigInt] into a [u64], naming the offending field on a
/// negative or overflowing value.
pub fn checked_u64(field: &'static str, value: &BigInt) -> Result<u64, TxError> {
    if value.sign() == Sign::Minus {
        return Err(TxError::NegativeValue(field));
    }
    value.to_u64().ok_or(TxError::NumericOverflow(field))
}
