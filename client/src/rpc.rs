//! The cluster calls the client makes, behind a trait so commands can run against a fake.

use anyhow::Context;
use base64::{
    prelude::BASE64_STANDARD,
    Engine,
};
use serde_json::json;
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_request::RpcRequest,
    rpc_response::Response,
};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    hash::Hash,
    message::Message,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};

/// Every method is a single request awaited to completion. Implementations don't retry.
#[allow(async_fn_in_trait)]
pub trait ClusterRpc {
    /// Balance in lamports.
    async fn get_balance(&self, pubkey: &Pubkey) -> anyhow::Result<u64>;

    async fn get_latest_blockhash(&self) -> anyhow::Result<Hash>;

    /// The fee the cluster would charge for `message`, or `None` when the node can't price it
    /// (e.g. the message's blockhash is unknown to it).
    async fn get_fee_for_message(&self, message: &Message) -> anyhow::Result<Option<u64>>;

    /// Submits the transaction and waits until the cluster reports it as confirmed.
    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> anyhow::Result<Signature>;

    async fn get_account_data(&self, pubkey: &Pubkey) -> anyhow::Result<Vec<u8>>;
}

/// Creates a nonblocking RPC client that reads and confirms at `confirmed` commitment.
pub fn new_rpc_client(url: impl ToString) -> RpcClient {
    RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed())
}

impl ClusterRpc for RpcClient {
    async fn get_balance(&self, pubkey: &Pubkey) -> anyhow::Result<u64> {
        RpcClient::get_balance(self, pubkey)
            .await
            .context("getBalance failed")
    }

    async fn get_latest_blockhash(&self) -> anyhow::Result<Hash> {
        RpcClient::get_latest_blockhash(self)
            .await
            .context("getLatestBlockhash failed")
    }

    async fn get_fee_for_message(&self, message: &Message) -> anyhow::Result<Option<u64>> {
        // `RpcClient::get_fee_for_message` turns a `null` value into an error; keep it as `None`.
        let encoded = BASE64_STANDARD.encode(message.serialize());
        let response: Response<Option<u64>> = self
            .send(
                RpcRequest::GetFeeForMessage,
                json!([encoded, self.commitment()]),
            )
            .await
            .context("getFeeForMessage failed")?;
        Ok(response.value)
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> anyhow::Result<Signature> {
        RpcClient::send_and_confirm_transaction(self, transaction)
            .await
            .context("sendTransaction failed")
    }

    async fn get_account_data(&self, pubkey: &Pubkey) -> anyhow::Result<Vec<u8>> {
        RpcClient::get_account_data(self, pubkey)
            .await
            .context("getAccountInfo failed")
    }
}
