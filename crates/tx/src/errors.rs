//! Error types for blob transaction assembly.

use thiserror::Error;

/// An error returned while validating, assembling, or signing a blob
/// transaction.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TxError {
    /// A numeric field carried a negative value.
    #[error("invalid {0}: negative value not allowed")]
    NegativeValue(&'static str),
    /// A numeric field did not fit the transaction's fixed-width field.
    #[error("invalid {0}: value too large")]
    NumericOverflow(&'static str),
    /// The signing operation or sender recovery failed.
    #[error("sign tx: {0}")]
    Signing(String),
}
