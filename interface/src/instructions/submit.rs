use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    instructions::PrereqInstruction,
    pda::{
        find_collection_authority_address,
        find_prereq_account_address,
    },
    program,
    program_ids::{
        MPL_CORE_PROGRAM_ID,
        SYSTEM_PROGRAM_ID,
    },
};

/// Which prerequisite a [`Submit`] instruction completes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Track {
    TypeScript,
    Rust,
}

impl From<Track> for PrereqInstruction {
    fn from(track: Track) -> Self {
        match track {
            Track::TypeScript => PrereqInstruction::SubmitTs,
            Track::Rust => PrereqInstruction::SubmitRs,
        }
    }
}

/// Marks a prerequisite as completed and mints a submission NFT into the collection.
/// `submit_ts` and `submit_rs` take the same accounts and no arguments.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` User account
///  1. `[WRITE]` Application account PDA, `["prereqs", user]`
///  2. `[WRITE, SIGNER]` New mint (asset) account
///  3. `[WRITE]` Collection account
///  4. `[READ]` Collection authority PDA, `["collection", collection]`
///  5. `[READ]` Metaplex Core program
///  6. `[READ]` System program
pub struct Submit {
    pub track: Track,
    pub user: Pubkey,
    pub account: Pubkey,
    pub mint: Pubkey,
    pub collection: Pubkey,
    pub authority: Pubkey,
}

impl Submit {
    pub fn new(track: Track, user: Pubkey, mint: Pubkey, collection: Pubkey) -> Self {
        let (account, _) = find_prereq_account_address(&user);
        let (authority, _) = find_collection_authority_address(&collection);
        Self {
            track,
            user,
            account,
            mint,
            collection,
            authority,
        }
    }

    pub fn create_account_metas(&self) -> [AccountMeta; 7] {
        [
            AccountMeta::new(self.user, true),
            AccountMeta::new(self.account, false),
            AccountMeta::new(self.mint, true),
            AccountMeta::new(self.collection, false),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new_readonly(MPL_CORE_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> [u8; 8] {
        PrereqInstruction::from(self.track).discriminator()
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data().to_vec(),
        }
    }
}
