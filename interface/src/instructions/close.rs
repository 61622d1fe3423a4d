use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    instructions::PrereqInstruction,
    pda::find_prereq_account_address,
    program,
    program_ids::SYSTEM_PROGRAM_ID,
};

/// Closes a user's application account and returns its rent to the user.
///
/// ### Accounts
///  0. `[WRITE]` User account
///  1. `[WRITE]` Application account PDA, `["prereqs", user]`
///  2. `[READ]` System program
pub struct Close {
    pub user: Pubkey,
    pub account: Pubkey,
}

impl Close {
    pub fn new(user: Pubkey) -> Self {
        let (account, _) = find_prereq_account_address(&user);
        Self { user, account }
    }

    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.user, false),
            AccountMeta::new(self.account, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> [u8; 8] {
        PrereqInstruction::Close.discriminator()
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data().to_vec(),
        }
    }
}
