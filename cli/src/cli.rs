//! Command-line arguments, resolved into an explicit [`SweepConfig`].

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
use client::config::{
    Cluster,
    SweepConfig,
    DEFAULT_RECIPIENT,
    DEFAULT_WALLET_PATH,
};
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Parser)]
#[command(version, about = "Tools for the prereq program and its dev wallet")]
pub struct Args {
    /// RPC endpoint. Defaults to the selected cluster's public endpoint.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Cluster used for the default RPC endpoint and explorer links.
    #[arg(long, global = true, default_value_t = Cluster::Devnet)]
    pub cluster: Cluster,

    /// Wallet file holding a JSON array of key bytes.
    #[arg(long, global = true, default_value = DEFAULT_WALLET_PATH)]
    pub wallet: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Transfer the wallet's entire balance, minus the network fee, to a recipient.
    Sweep {
        #[arg(long, default_value_t = DEFAULT_RECIPIENT)]
        to: Pubkey,
    },
    /// Print the prereq program's interface description as JSON.
    Idl {
        /// Check the description for internal inconsistencies first.
        #[arg(long)]
        validate: bool,
    },
    /// Show a user's prereq application account. Defaults to the wallet's own account.
    Status {
        #[arg(long)]
        user: Option<Pubkey>,
    },
}

impl Args {
    /// Sweeping is the default when no subcommand is given.
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Sweep {
            to: DEFAULT_RECIPIENT,
        })
    }

    /// The explicit `--url`, or the selected cluster's public endpoint.
    pub fn rpc_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| self.cluster.rpc_url().to_string())
    }

    pub fn sweep_config(&self, recipient: Pubkey) -> SweepConfig {
        SweepConfig {
            rpc_url: self.rpc_url(),
            recipient,
            wallet_path: self.wallet.clone(),
            cluster: self.cluster,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_sweeps_with_defaults() {
        let args = Args::try_parse_from(["prereq"]).unwrap();
        let Command::Sweep { to } = args.subcommand() else {
            panic!("Expected the sweep command");
        };
        assert_eq!(args.sweep_config(to), SweepConfig::default());
    }

    #[test]
    fn overrides() {
        let recipient = Pubkey::new_unique();
        let args = Args::try_parse_from([
            "prereq",
            "sweep",
            "--to",
            &recipient.to_string(),
            "--cluster",
            "testnet",
            "--wallet",
            "keys/alt.json",
        ])
        .unwrap();

        let Command::Sweep { to } = args.subcommand() else {
            panic!("Expected the sweep command");
        };
        let config = args.sweep_config(to);
        assert_eq!(config.recipient, recipient);
        assert_eq!(config.rpc_url, "https://api.testnet.solana.com");
        assert_eq!(config.cluster, Cluster::Testnet);
        assert_eq!(config.wallet_path, PathBuf::from("keys/alt.json"));

        let args =
            Args::try_parse_from(["prereq", "--url", "http://localhost:8899", "idl"]).unwrap();
        assert!(matches!(args.subcommand(), Command::Idl { validate: false }));
        assert_eq!(args.rpc_url(), "http://localhost:8899");

        let user = Pubkey::new_unique();
        let args =
            Args::try_parse_from(["prereq", "status", "--user", &user.to_string()]).unwrap();
        assert!(matches!(args.subcommand(), Command::Status { user: Some(u) } if u == user));
        assert_eq!(args.rpc_url(), "https://api.devnet.solana.com");
    }

    #[test]
    fn reject_invalid_recipient() {
        assert!(Args::try_parse_from(["prereq", "sweep", "--to", "not-a-pubkey"]).is_err());
    }
}
