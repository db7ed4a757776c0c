//! Blob transaction assembly and signing.

use crate::{
    errors::TxError,
    numeric::{checked_u128, checked_u256, checked_u64},
};
use alloy_consensus::{
    BlobTransactionSidecar, SignableTransaction, TxEip4844, TxEip4844Variant,
    TxEip4844WithSidecar, TxEnvelope,
};
use alloy_eips::eip4844::Blob;
use alloy_primitives::{Address, Bytes, U256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use num_bigint::BigInt;

/// The default gas limit for a blob transaction carrying no call data.
pub const DEFAULT_GAS_LIMIT: u64 = 25_000;

/// The intent for a single blob transaction.
///
/// Numeric fields are arbitrary precision; [build_and_sign] validates them
/// against the transaction's fixed-width fields. The blob artifacts are
/// carried as one value so the transaction body and its sidecar cannot drift
/// apart.
#[derive(Debug, Clone)]
pub struct BuildParams {
    /// The chain id the transaction is bound to.
    pub chain_id: BigInt,
    /// The sender nonce.
    pub nonce: u64,
    /// The recipient address.
    pub to: Address,
    /// The transferred value in wei. Defaults to zero.
    pub value: Option<BigInt>,
    /// The call data. Defaults to empty.
    pub data: Option<Bytes>,
    /// The gas limit. Defaults to [DEFAULT_GAS_LIMIT].
    pub gas_limit: Option<u64>,
    /// The EIP-1559 base fee cap in wei.
    pub max_fee_per_gas: BigInt,
    /// The EIP-1559 priority fee cap in wei.
    pub max_priority_fee_per_gas: BigInt,
    /// The blob fee cap in wei.
    pub max_fee_per_blob_gas: BigInt,
    /// The packed blob.
    pub blob: Box<Blob>,
    /// The commitment artifacts for the blob.
    pub artifacts: blobrs_kzg::CommitmentArtifacts,
}

/// Assembles and signs a blob transaction from the given params.
///
/// The transaction body carries exactly one versioned hash and the attached
/// sidecar exactly one `(blob, commitment, proof)` triple, both taken from
/// the same [blobrs_kzg::CommitmentArtifacts] value. The signature is bound
/// to the declared chain id for replay protection. Returns the signed
/// envelope together with the sender address recovered from the signature.
pub fn build_and_sign(
    params: BuildParams,
    signer: &PrivateKeySigner,
) -> Result<(TxEnvelope, Address), TxError> {
    let chain_id = checked_u64("chainId", &params.chain_id)?;
    let value = match params.value {
        Some(value) => checked_u256("value", &value)?,
        None => U256::ZERO,
    };
    let max_fee_per_gas = checked_u128("maxFeePerGas", &params.max_fee_per_gas)?;
    let max_priority_fee_per_gas =
        checked_u128("maxPriorityFeePerGas", &params.max_priority_fee_per_gas)?;
    let max_fee_per_blob_gas = checked_u128("maxFeePerBlobGas", &params.max_fee_per_blob_gas)?;

    let sidecar = BlobTransactionSidecar::new(
        vec![*params.blob],
        vec![params.artifacts.commitment],
        vec![params.artifacts.proof],
    );

    let tx = TxEip4844 {
        chain_id,
        nonce: params.nonce,
        gas_limit: params.gas_limit.unwrap_or(DEFAULT_GAS_LIMIT),
        to: params.to,
        value,
        input: params.data.unwrap_or_default(),
        max_fee_per_gas,
        max_priority_fee_per_gas,
        max_fee_per_blob_gas,
        blob_versioned_hashes: vec![params.artifacts.versioned_hash],
        ..Default::default()
    };

    let variant = TxEip4844Variant::TxEip4844WithSidecar(TxEip4844WithSidecar::from_tx_and_sidecar(
        tx, sidecar,
    ));
    let signature = signer
        .sign_hash_sync(&variant.signature_hash())
        .map_err(|e| TxError::Signing(e.to_string()))?;
    let signed = variant.into_signed(signature);
    let sender = signed.recover_signer().map_err(|e| TxError::Signing(e.to_string()))?;

    Ok((TxEnvelope::Eip4844(signed), sender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_consensus::TxType;
    use blobrs_kzg::{commitment_to_versioned_hash, CommitmentArtifacts};

    const TEST_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn test_params() -> BuildParams {
        let commitment = [0x11; 48].into();
        BuildParams {
            chain_id: BigInt::from(11155111),
            nonce: 7,
            to: Address::repeat_byte(0xAA),
            value: None,
            data: None,
            gas_limit: None,
            max_fee_per_gas: BigInt::from(30_000_000_000u64),
            max_priority_fee_per_gas: BigInt::from(2_000_000_000u64),
            max_fee_per_blob_gas: BigInt::from(30_000_000_000u64),
            blob: Box::new(Blob::ZERO),
            artifacts: CommitmentArtifacts {
                commitment,
                proof: [0x22; 48].into(),
                versioned_hash: commitment_to_versioned_hash(&commitment),
            },
        }
    }

    fn test_signer() -> PrivateKeySigner {
        TEST_KEY.parse().unwrap()
    }

    #[test]
    fn test_build_and_sign_recovers_sender() {
        let signer = test_signer();
        let (envelope, sender) = build_and_sign(test_params(), &signer).unwrap();
        assert_eq!(sender, signer.address());
        assert_eq!(envelope.tx_type(), TxType::Eip4844);
    }

    #[test]
    fn test_build_and_sign_applies_defaults() {
        let (envelope, _) = build_and_sign(test_params(), &test_signer()).unwrap();
        let TxEnvelope::Eip4844(signed) = envelope else { panic!("expected a type-3 envelope") };
        let TxEip4844Variant::TxEip4844WithSidecar(ws) = signed.tx() else {
            panic!("expected a sidecar variant")
        };
        assert_eq!(ws.tx.value, U256::ZERO);
        assert_eq!(ws.tx.input, Bytes::new());
        assert_eq!(ws.tx.gas_limit, DEFAULT_GAS_LIMIT);
        assert_eq!(ws.tx.chain_id, 11155111);
    }

    #[test]
    fn test_build_and_sign_single_blob_sidecar() {
        let params = test_params();
        let versioned_hash = params.artifacts.versioned_hash;
        let (envelope, _) = build_and_sign(params, &test_signer()).unwrap();
        let TxEnvelope::Eip4844(signed) = envelope else { panic!("expected a type-3 envelope") };
        let TxEip4844Variant::TxEip4844WithSidecar(ws) = signed.tx() else {
            panic!("expected a sidecar variant")
        };
        assert_eq!(ws.tx.blob_versioned_hashes, vec![versioned_hash]);
        assert_eq!(ws.sidecar.blobs.len(), 1);
        assert_eq!(ws.sidecar.commitments.len(), 1);
        assert_eq!(ws.sidecar.proofs.len(), 1);
    }

    #[test]
    fn test_build_and_sign_rejects_negative_fields() {
        let mut params = test_params();
        params.chain_id = BigInt::from(-1);
        assert_eq!(
            build_and_sign(params, &test_signer()),
            Err(TxError::NegativeValue("chainId"))
        );

        let mut params = test_params();
        params.value = Some(BigInt::from(-5));
        assert_eq!(build_and_sign(params, &test_signer()), Err(TxError::NegativeValue("value")));

        let mut params = test_params();
        params.max_priority_fee_per_gas = BigInt::from(-1);
        assert_eq!(
            build_and_sign(params, &test_signer()),
            Err(TxError::NegativeValue("maxPriorityFeePerGas"))
        );
    }

    #[test]
    fn test_build_and_sign_rejects_overflowing_fields() {
        let mut params = test_params();
        params.value = Some(BigInt::from(1) << 256);
        assert_eq!(build_and_sign(params, &test_signer()), Err(TxError::NumericOverflow("value")));

        let mut params = test_params();
        params.max_fee_per_blob_gas = BigInt::from(1) << 256;
        assert_eq!(
            build_and_sign(params, &test_signer()),
            Err(TxError::NumericOverflow("maxFeePerBlobGas"))
        );
    }

    #[test]
    fn test_build_and_sign_distinct_nonces_distinct_hashes() {
        let signer = test_signer();
        let (a, _) = build_and_sign(test_params(), &signer).unwrap();
        let mut params = test_params();
        params.nonce = 8;
        let (b, _) = build_and_sign(params, &signer).unwrap();
        assert_ne!(a.tx_hash(), b.tx_hash());
    }
}
