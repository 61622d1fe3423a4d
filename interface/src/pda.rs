//! PDA helpers for deriving `prereq` program addresses.

use solana_sdk::pubkey::Pubkey;

use crate::program;

/// Seed prefix of a user's [`crate::state::ApplicationAccount`].
pub const PREREQ_SEED: &[u8] = b"prereqs";
/// Seed prefix of the authority that signs for a Core collection.
pub const COLLECTION_SEED: &[u8] = b"collection";

pub fn find_prereq_account_address(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PREREQ_SEED, user.as_ref()], &program::ID)
}

pub fn find_collection_authority_address(collection: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[COLLECTION_SEED, collection.as_ref()], &program::ID)
}
