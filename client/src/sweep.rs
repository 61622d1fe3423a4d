//! Moves a wallet's entire balance, net of the network fee, to another address.
//!
//! The sweep runs in two phases. [`estimate_sweep`] prices a provisional transfer of the *full*
//! balance, which is only ever used to ask the cluster for its fee. [`commit_sweep`] then builds,
//! signs, and submits the real transfer of `balance - fee`. Every cluster call is awaited in
//! sequence and none is retried.

use anyhow::Context;
use solana_sdk::{
    hash::Hash,
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_system_interface::instruction::transfer;

use crate::{
    fmt_kv,
    logs::{
        log_info,
        log_warning,
    },
    rpc::ClusterRpc,
    LogColor,
};

/// The outcome of pricing a sweep, carried into [`commit_sweep`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SweepEstimate {
    /// Confirmed balance of the sender, in lamports.
    pub balance: u64,
    /// Fee quoted for the provisional transfer. Zero when the cluster couldn't price it.
    pub fee: u64,
    /// Blockhash the estimate was priced against, reused for the real transfer.
    pub recent_blockhash: Hash,
}

impl SweepEstimate {
    /// The amount actually transferred: `balance - fee`.
    pub fn net_lamports(&self) -> anyhow::Result<u64> {
        self.balance.checked_sub(self.fee).ok_or_else(|| {
            anyhow::Error::msg(format!(
                "Fee of {} lamports exceeds the balance of {} lamports",
                self.fee, self.balance
            ))
        })
    }
}

/// A single system transfer from `sender` to `recipient`, paid for by `sender`.
pub fn transfer_message(
    sender: &Pubkey,
    recipient: &Pubkey,
    lamports: u64,
    recent_blockhash: &Hash,
) -> Message {
    Message::new_with_blockhash(
        &[transfer(sender, recipient, lamports)],
        Some(sender),
        recent_blockhash,
    )
}

/// Queries the sender's balance and a recent blockhash, then asks the cluster what a transfer of
/// the whole balance would cost.
pub async fn estimate_sweep<R: ClusterRpc>(
    rpc: &R,
    sender: &Pubkey,
    recipient: &Pubkey,
) -> anyhow::Result<SweepEstimate> {
    let balance = rpc
        .get_balance(sender)
        .await
        .context("Couldn't fetch the sender's balance")?;
    let recent_blockhash = rpc
        .get_latest_blockhash()
        .await
        .context("Couldn't fetch a recent blockhash")?;

    let provisional = transfer_message(sender, recipient, balance, &recent_blockhash);
    let fee = rpc
        .get_fee_for_message(&provisional)
        .await
        .context("Couldn't fetch the transfer fee")?;
    let fee = fee.unwrap_or_else(|| {
        log_warning("Fee", "cluster couldn't price the transfer, assuming 0");
        0
    });

    Ok(SweepEstimate {
        balance,
        fee,
        recent_blockhash,
    })
}

/// Transfers `balance - fee` to `recipient`, signed by `sender`, and waits for confirmation.
///
/// Nothing is submitted if the fee exceeds the balance. A zero net amount is submitted as-is.
pub async fn commit_sweep<R: ClusterRpc>(
    rpc: &R,
    estimate: &SweepEstimate,
    sender: &Keypair,
    recipient: &Pubkey,
) -> anyhow::Result<Signature> {
    let lamports = estimate.net_lamports()?;
    let message = transfer_message(
        &sender.pubkey(),
        recipient,
        lamports,
        &estimate.recent_blockhash,
    );

    let mut transaction = Transaction::new_unsigned(message);
    transaction
        .try_sign(&[sender], estimate.recent_blockhash)
        .context("Couldn't sign the transfer")?;

    log_info(
        "Sweeping",
        format!(
            "{lamports} lamports -> {recipient} ({})",
            fmt_kv!("fee", estimate.fee, LogColor::Gray)
        ),
    );

    rpc.send_and_confirm_transaction(&transaction)
        .await
        .context("Failed transaction submission")
}

/// Estimates, then commits, a sweep of `sender`'s whole balance to `recipient`.
///
/// Not idempotent: running it again sweeps whatever balance is left.
pub async fn sweep_wallet<R: ClusterRpc>(
    rpc: &R,
    sender: &Keypair,
    recipient: &Pubkey,
) -> anyhow::Result<Signature> {
    let estimate = estimate_sweep(rpc, &sender.pubkey(), recipient).await?;
    log_info(
        "Balance",
        fmt_kv!("lamports", estimate.balance, LogColor::Gray),
    );
    commit_sweep(rpc, &estimate, sender, recipient).await
}
