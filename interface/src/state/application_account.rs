use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::InterfaceError,
    idl::{
        DISCRIMINATOR_LEN,
        IDL,
    },
};

/// The per-user record created by `initialize`, at `["prereqs", user]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApplicationAccount {
    pub user: Pubkey,
    pub bump: u8,
    /// Set once the TypeScript prerequisite has been submitted.
    pub pre_req_ts: bool,
    /// Set once the Rust prerequisite has been submitted.
    pub pre_req_rs: bool,
    pub github: String,
}

/// Field-for-field borsh layout following the discriminator.
#[derive(BorshDeserialize, BorshSerialize)]
struct Layout {
    user: [u8; 32],
    bump: u8,
    pre_req_ts: bool,
    pre_req_rs: bool,
    github: String,
}

impl ApplicationAccount {
    pub const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = IDL.accounts[0].discriminator;

    /// Decodes account data, checking the discriminator first. Trailing bytes past the encoded
    /// fields are ignored.
    pub fn try_from_bytes(data: &[u8]) -> Result<Self, InterfaceError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(InterfaceError::InsufficientByteLength);
        }
        let (discriminator, mut fields) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != Self::DISCRIMINATOR {
            return Err(InterfaceError::InvalidAccountDiscriminator);
        }

        let layout = Layout::deserialize(&mut fields).or(Err(InterfaceError::InvalidAccountData))?;
        Ok(Self {
            user: Pubkey::new_from_array(layout.user),
            bump: layout.bump,
            pre_req_ts: layout.pre_req_ts,
            pre_req_rs: layout.pre_req_rs,
            github: layout.github,
        })
    }

    /// Encodes the account as it's stored on chain, discriminator included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, InterfaceError> {
        let layout = Layout {
            user: self.user.to_bytes(),
            bump: self.bump,
            pre_req_ts: self.pre_req_ts,
            pre_req_rs: self.pre_req_rs,
            github: self.github.clone(),
        };
        let mut data = Self::DISCRIMINATOR.to_vec();
        borsh::to_writer(&mut data, &layout).or(Err(InterfaceError::EncodingFailed))?;
        Ok(data)
    }
}
