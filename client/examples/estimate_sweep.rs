//! Prices a sweep of the default dev wallet without submitting anything.

use client::{
    config::SweepConfig,
    print_kv,
    rpc::new_rpc_client,
    sweep::estimate_sweep,
    wallet::read_wallet_file,
};
use solana_sdk::signature::Signer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SweepConfig::default();
    let sender = read_wallet_file(&config.wallet_path)?;
    let rpc = new_rpc_client(&config.rpc_url);

    let estimate = estimate_sweep(&rpc, &sender.pubkey(), &config.recipient).await?;

    print_kv!("Balance", estimate.balance);
    print_kv!("Fee", estimate.fee);
    print_kv!("Would transfer", estimate.net_lamports()?);

    Ok(())
}
