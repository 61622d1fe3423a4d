//! Explicit configuration for commands that talk to a cluster.

use std::path::PathBuf;

use solana_sdk::{
    pubkey::Pubkey,
    signature::Signature,
};

/// Wallet swept by default, relative to the working directory.
pub const DEFAULT_WALLET_PATH: &str = "dev-wallet.json";

/// Address that receives swept balances unless another recipient is configured.
pub const DEFAULT_RECIPIENT: Pubkey =
    Pubkey::from_str_const("DwUkSRrMWtcxsqVEJk7coMwpRVXDdxS2mxBPjMMgN1pY");

const EXPLORER_URL: &str = "https://explorer.solana.com";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    Mainnet,
}

impl Cluster {
    /// The public RPC endpoint for the cluster.
    pub fn rpc_url(self) -> &'static str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
        }
    }

    fn explorer_query(self) -> &'static str {
        match self {
            Self::Devnet => "?cluster=devnet",
            Self::Testnet => "?cluster=testnet",
            Self::Mainnet => "",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweepConfig {
    pub rpc_url: String,
    pub recipient: Pubkey,
    pub wallet_path: PathBuf,
    /// Only used to build explorer links; [`SweepConfig::rpc_url`] decides where requests go.
    pub cluster: Cluster,
}

impl Default for SweepConfig {
    fn default() -> Self {
        let cluster = Cluster::default();
        Self {
            rpc_url: cluster.rpc_url().to_string(),
            recipient: DEFAULT_RECIPIENT,
            wallet_path: PathBuf::from(DEFAULT_WALLET_PATH),
            cluster,
        }
    }
}

impl SweepConfig {
    pub fn explorer_tx_url(&self, signature: &Signature) -> String {
        format!(
            "{EXPLORER_URL}/tx/{signature}{}",
            self.cluster.explorer_query()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use solana_sdk::signature::Signature;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn defaults_target_devnet() {
        let config = SweepConfig::default();
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(
            config.recipient.to_string(),
            "DwUkSRrMWtcxsqVEJk7coMwpRVXDdxS2mxBPjMMgN1pY"
        );
        assert_eq!(config.wallet_path, PathBuf::from("dev-wallet.json"));
        assert_eq!(config.cluster, Cluster::Devnet);
    }

    #[test]
    fn explorer_links() {
        let signature = Signature::from([7u8; 64]);
        let mut config = SweepConfig::default();
        assert_eq!(
            config.explorer_tx_url(&signature),
            format!("https://explorer.solana.com/tx/{signature}?cluster=devnet")
        );

        config.cluster = Cluster::Mainnet;
        assert_eq!(
            config.explorer_tx_url(&signature),
            format!("https://explorer.solana.com/tx/{signature}")
        );
    }

    #[test]
    fn cluster_names_round_trip() {
        for cluster in Cluster::iter() {
            assert_eq!(Cluster::from_str(&cluster.to_string()).unwrap(), cluster);
        }
        assert!(Cluster::from_str("localnet").is_err());
    }
}
