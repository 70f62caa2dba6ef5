//! Deploycast CLI: predict the address a contract will receive at deployment.
//!
//! Pass `--address`/`--nonce` for scripted use, or run with no arguments to
//! be prompted interactively. Validation happens in the library before any
//! hashing, so malformed input produces a diagnostic, never a raw
//! hex-decoding failure.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use deploycast_core::prelude::*;

/// Predict the deployment address of a contract
#[derive(Parser, Debug)]
#[command(name = "deploycast")]
#[command(about = "Predicts the on-chain address a contract will receive at deployment")]
struct Args {
    /// Deployer account address (0x-prefixed, 40 hex digits, any case)
    #[arg(short, long)]
    address: Option<String>,

    /// Deployer account nonce at deployment time
    #[arg(short, long)]
    nonce: Option<i128>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let address = match args.address {
        Some(address) => address,
        None => prompt("Enter the deployer address: ")?,
    };

    let nonce = match args.nonce {
        Some(nonce) => nonce,
        None => {
            let line = prompt("Enter the nonce: ")?;
            line.parse::<i128>()
                .with_context(|| format!("nonce must be an integer, got {line:?}"))?
        }
    };

    debug!(address = %address.trim(), nonce, "deriving contract address");
    let contract = derive_contract_address(address.trim(), nonce)?;
    println!("Future contract address: {contract}");
    Ok(())
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
