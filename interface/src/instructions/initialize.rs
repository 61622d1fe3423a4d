use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::InterfaceError,
    instructions::{
        pack_github,
        PrereqInstruction,
    },
    pda::find_prereq_account_address,
    program,
    program_ids::SYSTEM_PROGRAM_ID,
};

/// Creates the user's application account and records their GitHub handle.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` User account
///  1. `[WRITE]` Application account PDA, `["prereqs", user]`
///  2. `[READ]` System program
pub struct Initialize<'a> {
    pub user: Pubkey,
    pub account: Pubkey,
    /// The GitHub handle stored in the application account.
    pub github: &'a str,
}

impl<'a> Initialize<'a> {
    pub fn new(user: Pubkey, github: &'a str) -> Self {
        let (account, _) = find_prereq_account_address(&user);
        Self {
            user,
            account,
            github,
        }
    }

    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.user, true),
            AccountMeta::new(self.account, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, InterfaceError> {
        pack_github(PrereqInstruction::Initialize, self.github)
    }

    pub fn instruction(&self) -> Result<Instruction, InterfaceError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}
