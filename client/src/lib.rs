//! Client-side utilities for talking to a Solana cluster: wallet loading, the RPC seam, the
//! balance sweep, and `prereq` account reads.

pub mod account;
pub mod config;
pub mod logs;
pub mod rpc;
pub mod sweep;
pub mod wallet;

pub use colored;
pub use logs::LogColor;
