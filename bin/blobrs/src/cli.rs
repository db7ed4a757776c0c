//! Module for the CLI.

use crate::parser::{gwei_to_wei, parse_signer};
use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use anyhow::{anyhow, Result};
use blobrs_kzg::CkzgEngine;
use blobrs_publisher::{publish, OnlineTransport, PublishRequest};
use clap::{ArgAction, Args, Parser, Subcommand};
use num_bigint::BigInt;
use std::path::PathBuf;
use tracing::{info, Level};

/// Main CLI
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count)]
    pub v: u8,
    /// The subcommand to run.
    #[clap(subcommand)]
    pub subcommand: BlobrsSubcommand,
}

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum BlobrsSubcommand {
    /// Pack a file into a blob and publish it as a type-3 transaction.
    Publish(PublishCfg),
}

/// Configuration for the `publish` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct PublishCfg {
    /// Execution RPC URL (e.g., https://sepolia.infura.io/v3/...).
    #[clap(long)]
    pub rpc: reqwest::Url,
    /// Chain ID (Sepolia default: 11155111).
    #[clap(long, default_value_t = 11155111)]
    pub chain_id: i64,
    /// Hex private key (dev only; prefer the env var in real use).
    #[clap(long, env = "BLOBRS_PRIVATE_KEY", value_parser = parse_signer, hide_env_values = true)]
    pub pk: PrivateKeySigner,
    /// Recipient address (0x...).
    #[clap(long)]
    pub to: Address,
    /// Path to the payload file to pack into a blob.
    #[clap(long)]
    pub file: PathBuf,
    /// Max fee per gas in gwei (EIP-1559).
    #[clap(long, default_value_t = 30)]
    pub max_fee_gwei: i64,
    /// Max priority fee per gas in gwei (EIP-1559).
    #[clap(long, default_value_t = 2)]
    pub max_priority_fee_gwei: i64,
    /// Max fee per blob gas in gwei.
    #[clap(long, default_value_t = 30)]
    pub max_blob_fee_gwei: i64,
}

impl Cli {
    /// Initializes telemetry for the application.
    pub(crate) fn init_telemetry(self) -> Result<Self> {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(match self.v {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))?;
        Ok(self)
    }

    /// Parse the CLI arguments and run the command.
    pub(crate) async fn run(self) -> Result<()> {
        match self.subcommand {
            BlobrsSubcommand::Publish(cfg) => cfg.run().await,
        }
    }
}

impl PublishCfg {
    /// Runs a single publish and prints the terminal receipt.
    pub(crate) async fn run(self) -> Result<()> {
        let payload = std::fs::read(&self.file)
            .map_err(|e| anyhow!("error reading {}: {e}", self.file.display()))?;
        info!(file = %self.file.display(), bytes = payload.len(), "payload loaded");

        let transport = OnlineTransport::new_http(self.rpc);
        let engine = CkzgEngine::default();
        let request = PublishRequest::new(
            BigInt::from(self.chain_id),
            self.to,
            gwei_to_wei(self.max_fee_gwei),
            gwei_to_wei(self.max_priority_fee_gwei),
            gwei_to_wei(self.max_blob_fee_gwei),
        );

        let outcome = publish(&transport, &engine, &self.pk, request, &payload).await?;

        println!("tx_hash={}", outcome.tx_hash);
        println!("from={}", outcome.sender);
        println!("nonce={}", outcome.nonce);
        println!("status={} block={}", outcome.receipt.status, outcome.receipt.block_number);
        Ok(())
    }
}
