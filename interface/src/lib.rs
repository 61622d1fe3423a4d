//! Client-side interface for the on-chain `prereq` program.
//!
//! The [`idl`] module is a literal transcription of the program's published interface: instruction
//! discriminators, account roles and seed recipes, account layouts, and error codes. The remaining
//! modules are typed views over that data used to build instructions and decode accounts.

pub mod error;
pub mod idl;
pub mod instructions;
pub mod pda;
pub mod state;

pub mod program {
    use solana_sdk::pubkey::Pubkey;

    pub const ID: Pubkey = Pubkey::from_str_const("TRBZyQHB3m68FGeVsqTK39Wm4xejadjVhP5MAZaKWDM");
}

/// Addresses of the external programs referenced by `prereq` instructions.
pub mod program_ids {
    use solana_sdk::pubkey::Pubkey;

    /// The native System program.
    pub const SYSTEM_PROGRAM_ID: Pubkey =
        Pubkey::from_str_const("11111111111111111111111111111111");
    /// The Metaplex Core program.
    pub const MPL_CORE_PROGRAM_ID: Pubkey =
        Pubkey::from_str_const("CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d");
}
