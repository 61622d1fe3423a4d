//! Typed builders for every `prereq` instruction.
//!
//! Each builder lays out its accounts in the order declared by [`crate::idl::IDL`] and prefixes the
//! instruction data with the instruction's 8-byte discriminator.

use strum::IntoEnumIterator;

use crate::{
    error::InterfaceError,
    idl::{
        IdlInstruction,
        DISCRIMINATOR_LEN,
        IDL,
    },
};

pub mod close;
pub mod create_collection;
pub mod initialize;
pub mod submit;
pub mod update;

/// Discriminant order matches the instruction order in [`IDL`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PrereqInstruction {
    Close,
    CreateCollection,
    Initialize,
    SubmitRs,
    SubmitTs,
    Update,
}

impl PrereqInstruction {
    pub fn descriptor(self) -> &'static IdlInstruction {
        &IDL.instructions[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn discriminator(self) -> [u8; DISCRIMINATOR_LEN] {
        self.descriptor().discriminator
    }
}

impl TryFrom<&[u8]> for PrereqInstruction {
    type Error = InterfaceError;

    /// Selects the instruction from the discriminator at the start of `data`.
    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let prefix = data
            .get(..DISCRIMINATOR_LEN)
            .ok_or(InterfaceError::InsufficientByteLength)?;
        Self::iter()
            .find(|ix| ix.discriminator().as_slice() == prefix)
            .ok_or(InterfaceError::InvalidInstructionDiscriminator)
    }
}

/// Packs a `github` handle argument after the discriminator.
pub(crate) fn pack_github(
    instruction: PrereqInstruction,
    github: &str,
) -> Result<Vec<u8>, InterfaceError> {
    let mut data = instruction.discriminator().to_vec();
    borsh::to_writer(&mut data, github).or(Err(InterfaceError::EncodingFailed))?;
    Ok(data)
}
