//! Reads `prereq` program accounts from the cluster.

use anyhow::Context;
use prereq_interface::{
    pda::find_prereq_account_address,
    state::ApplicationAccount,
};
use solana_sdk::pubkey::Pubkey;

use crate::rpc::ClusterRpc;

/// Fetches and decodes `user`'s application account at `["prereqs", user]`.
pub async fn fetch_application_account<R: ClusterRpc>(
    rpc: &R,
    user: &Pubkey,
) -> anyhow::Result<ApplicationAccount> {
    let (address, _) = find_prereq_account_address(user);
    let data = rpc
        .get_account_data(&address)
        .await
        .with_context(|| format!("Couldn't fetch the application account {address}"))?;
    ApplicationAccount::try_from_bytes(&data)
        .with_context(|| format!("Couldn't decode the application account {address}"))
}
