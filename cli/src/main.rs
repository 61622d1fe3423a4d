//! `prereq`: sweeps the dev wallet and inspects the prereq program.
//!
//! Failures from any command are reported once as a single error line. Nothing is retried.

use clap::Parser;
use client::{
    account::fetch_application_account,
    logs::{
        log_error,
        log_info,
        log_success,
        log_success_to_stderr,
    },
    print_kv,
    rpc::new_rpc_client,
    sweep::sweep_wallet,
    wallet::read_wallet_file,
};
use prereq_interface::idl::IDL;
use solana_sdk::signature::Signer;

use crate::cli::{
    Args,
    Command,
};

pub mod cli;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args).await {
        log_error("Oops, something went wrong:", format!("{e:#}"));
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    match args.subcommand() {
        Command::Sweep { to } => {
            let config = args.sweep_config(to);
            let sender = read_wallet_file(&config.wallet_path)?;
            let rpc = new_rpc_client(&config.rpc_url);

            log_info("Sender", sender.pubkey());
            let signature = sweep_wallet(&rpc, &sender, &config.recipient).await?;
            log_success(
                "Success! Check out your TX here:",
                config.explorer_tx_url(&signature),
            );
        }
        Command::Idl { validate } => {
            if validate {
                IDL.validate()?;
                log_success_to_stderr("IDL", "descriptor is consistent");
            }
            println!("{}", serde_json::to_string_pretty(&IDL)?);
        }
        Command::Status { user } => {
            let user = match user {
                Some(user) => user,
                None => read_wallet_file(&args.wallet)?.pubkey(),
            };
            let rpc = new_rpc_client(&args.rpc_url());

            let account = fetch_application_account(&rpc, &user).await?;
            print_kv!("user", account.user);
            print_kv!("github", account.github);
            print_kv!("pre_req_ts", account.pre_req_ts);
            print_kv!("pre_req_rs", account.pre_req_rs);
            print_kv!("bump", account.bump);
        }
    }

    Ok(())
}
