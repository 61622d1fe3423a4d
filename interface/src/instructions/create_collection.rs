use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    instructions::PrereqInstruction,
    pda::find_collection_authority_address,
    program,
    program_ids::{
        MPL_CORE_PROGRAM_ID,
        SYSTEM_PROGRAM_ID,
    },
};

/// Creates the Core collection that submission NFTs are minted into.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Creator account
///  1. `[WRITE, SIGNER]` Collection account
///  2. `[READ]` Collection authority PDA, `["collection", collection]`
///  3. `[READ]` Metaplex Core program
///  4. `[READ]` System program
pub struct CreateCollection {
    pub creator: Pubkey,
    pub collection: Pubkey,
    pub authority: Pubkey,
}

impl CreateCollection {
    pub fn new(creator: Pubkey, collection: Pubkey) -> Self {
        let (authority, _) = find_collection_authority_address(&collection);
        Self {
            creator,
            collection,
            authority,
        }
    }

    pub fn create_account_metas(&self) -> [AccountMeta; 5] {
        [
            AccountMeta::new(self.creator, true),
            AccountMeta::new(self.collection, true),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new_readonly(MPL_CORE_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> [u8; 8] {
        PrereqInstruction::CreateCollection.discriminator()
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data().to_vec(),
        }
    }
}
