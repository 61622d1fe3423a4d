//! Declarative interface description of the `prereq` program.
//!
//! Everything here mirrors the program's published interface byte-for-byte. Discriminators are
//! copied, never derived, and must match what the deployed program uses internally.
//!
//! The descriptor serializes to the Anchor IDL JSON shape, so it can be handed to any generic
//! client that consumes IDL files.

use std::{
    collections::HashSet,
    fmt,
};

use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::pda::{
    COLLECTION_SEED,
    PREREQ_SEED,
};

pub const DISCRIMINATOR_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Idl {
    pub address: &'static str,
    pub metadata: IdlMetadata,
    pub instructions: &'static [IdlInstruction],
    pub accounts: &'static [IdlAccount],
    pub errors: &'static [IdlErrorCode],
    pub types: &'static [IdlTypeDef],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub spec: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlInstruction {
    pub name: &'static str,
    pub discriminator: [u8; DISCRIMINATOR_LEN],
    pub accounts: &'static [IdlInstructionAccount],
    pub args: &'static [IdlField],
}

/// A single account role passed to an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlInstructionAccount {
    pub name: &'static str,
    #[serde(skip_serializing_if = "is_false")]
    pub writable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub signer: bool,
    /// Set when the role is always the same, well-known address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<&'static str>,
    /// Set when the role is a program derived address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda: Option<IdlPda>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlPda {
    pub seeds: &'static [IdlSeed],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IdlSeed {
    /// Literal seed bytes.
    Const { value: &'static [u8] },
    /// The address of another account role in the same instruction.
    Account { path: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlAccount {
    pub name: &'static str,
    pub discriminator: [u8; DISCRIMINATOR_LEN],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlErrorCode {
    pub code: u32,
    pub name: &'static str,
    pub msg: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlTypeDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: IdlTypeDefTy,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IdlTypeDefTy {
    Struct { fields: &'static [IdlField] },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdlField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: IdlType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdlType {
    Pubkey,
    U8,
    Bool,
    String,
}

fn is_false(b: &bool) -> bool {
    !*b
}

const SYSTEM_PROGRAM: IdlInstructionAccount = IdlInstructionAccount {
    name: "system_program",
    writable: false,
    signer: false,
    address: Some("11111111111111111111111111111111"),
    pda: None,
};

const MPL_CORE_PROGRAM: IdlInstructionAccount = IdlInstructionAccount {
    name: "mpl_core_program",
    writable: false,
    signer: false,
    address: Some("CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d"),
    pda: None,
};

const PREREQ_ACCOUNT_PDA: IdlPda = IdlPda {
    seeds: &[
        IdlSeed::Const { value: PREREQ_SEED },
        IdlSeed::Account { path: "user" },
    ],
};

const COLLECTION_AUTHORITY_PDA: IdlPda = IdlPda {
    seeds: &[
        IdlSeed::Const {
            value: COLLECTION_SEED,
        },
        IdlSeed::Account { path: "collection" },
    ],
};

const fn role(name: &'static str, writable: bool, signer: bool) -> IdlInstructionAccount {
    IdlInstructionAccount {
        name,
        writable,
        signer,
        address: None,
        pda: None,
    }
}

const fn derived(name: &'static str, writable: bool, pda: IdlPda) -> IdlInstructionAccount {
    IdlInstructionAccount {
        name,
        writable,
        signer: false,
        address: None,
        pda: Some(pda),
    }
}

const GITHUB_ARG: IdlField = IdlField {
    name: "github",
    ty: IdlType::String,
};

const SUBMIT_ACCOUNTS: &[IdlInstructionAccount] = &[
    role("user", true, true),
    derived("account", true, PREREQ_ACCOUNT_PDA),
    role("mint", true, true),
    role("collection", true, false),
    derived("authority", false, COLLECTION_AUTHORITY_PDA),
    MPL_CORE_PROGRAM,
    SYSTEM_PROGRAM,
];

pub const IDL: Idl = Idl {
    address: "TRBZyQHB3m68FGeVsqTK39Wm4xejadjVhP5MAZaKWDM",
    metadata: IdlMetadata {
        name: "q3_pre_reqs_rs",
        version: "0.1.0",
        spec: "0.1.0",
        description: "Created with Anchor",
    },
    instructions: &[
        IdlInstruction {
            name: "close",
            discriminator: [98, 165, 201, 177, 108, 65, 206, 96],
            accounts: &[
                role("user", true, false),
                derived("account", true, PREREQ_ACCOUNT_PDA),
                SYSTEM_PROGRAM,
            ],
            args: &[],
        },
        IdlInstruction {
            name: "create_collection",
            discriminator: [156, 251, 92, 54, 233, 2, 16, 82],
            accounts: &[
                role("creator", true, true),
                role("collection", true, true),
                derived("authority", false, COLLECTION_AUTHORITY_PDA),
                MPL_CORE_PROGRAM,
                SYSTEM_PROGRAM,
            ],
            args: &[],
        },
        IdlInstruction {
            name: "initialize",
            discriminator: [175, 175, 109, 31, 13, 152, 155, 237],
            accounts: &[
                role("user", true, true),
                derived("account", true, PREREQ_ACCOUNT_PDA),
                SYSTEM_PROGRAM,
            ],
            args: &[GITHUB_ARG],
        },
        IdlInstruction {
            name: "submit_rs",
            discriminator: [77, 124, 82, 163, 21, 133, 181, 206],
            accounts: SUBMIT_ACCOUNTS,
            args: &[],
        },
        IdlInstruction {
            name: "submit_ts",
            discriminator: [137, 241, 199, 223, 125, 33, 85, 217],
            accounts: SUBMIT_ACCOUNTS,
            args: &[],
        },
        IdlInstruction {
            name: "update",
            discriminator: [219, 200, 88, 176, 158, 63, 253, 127],
            accounts: &[
                role("user", true, true),
                derived("account", false, PREREQ_ACCOUNT_PDA),
                SYSTEM_PROGRAM,
            ],
            args: &[GITHUB_ARG],
        },
    ],
    accounts: &[IdlAccount {
        name: "ApplicationAccount",
        discriminator: [222, 181, 17, 200, 212, 149, 64, 88],
    }],
    errors: &[
        IdlErrorCode {
            code: 6000,
            name: "PreReqTsNotCompleted",
            msg: "TS submission not completed.",
        },
        IdlErrorCode {
            code: 6001,
            name: "PreReqTsAlreadyCompleted",
            msg: "TS submission already completed.",
        },
        IdlErrorCode {
            code: 6002,
            name: "PreReqRsAlreadyCompleted",
            msg: "Rust submission already completed.",
        },
        IdlErrorCode {
            code: 6003,
            name: "PreReqRsNotInTimeWindow",
            msg: "Submission not allowed.",
        },
    ],
    types: &[IdlTypeDef {
        name: "ApplicationAccount",
        ty: IdlTypeDefTy::Struct {
            fields: &[
                IdlField {
                    name: "user",
                    ty: IdlType::Pubkey,
                },
                IdlField {
                    name: "bump",
                    ty: IdlType::U8,
                },
                IdlField {
                    name: "pre_req_ts",
                    ty: IdlType::Bool,
                },
                IdlField {
                    name: "pre_req_rs",
                    ty: IdlType::Bool,
                },
                GITHUB_ARG,
            ],
        },
    }],
};

const_assert_eq!(IDL.instructions.len(), 6);
const_assert_eq!(IDL.accounts.len(), 1);

/// The first inconsistency found by [`Idl::validate`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IdlError {
    DuplicateInstructionName(&'static str),
    DuplicateInstructionDiscriminator(&'static str),
    DuplicateAccountDiscriminator(&'static str),
    DuplicateErrorCode(u32),
    UnresolvedSeedPath {
        instruction: &'static str,
        path: &'static str,
    },
    InvalidAddress {
        instruction: &'static str,
        account: &'static str,
    },
    MissingTypeDefinition(&'static str),
}

impl fmt::Display for IdlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateInstructionName(name) => write!(f, "duplicate instruction `{name}`"),
            Self::DuplicateInstructionDiscriminator(name) => {
                write!(f, "instruction `{name}` reuses another instruction's discriminator")
            }
            Self::DuplicateAccountDiscriminator(name) => {
                write!(f, "account `{name}` reuses another account's discriminator")
            }
            Self::DuplicateErrorCode(code) => write!(f, "error code {code} is declared twice"),
            Self::UnresolvedSeedPath { instruction, path } => write!(
                f,
                "instruction `{instruction}` derives an address from unknown account `{path}`"
            ),
            Self::InvalidAddress {
                instruction,
                account,
            } => write!(
                f,
                "instruction `{instruction}` declares an invalid address for `{account}`"
            ),
            Self::MissingTypeDefinition(name) => {
                write!(f, "account `{name}` has no type definition")
            }
        }
    }
}

impl std::error::Error for IdlError {}

impl Idl {
    pub fn program_id(&self) -> Option<Pubkey> {
        self.address.parse().ok()
    }

    pub fn instruction(&self, name: &str) -> Option<&'static IdlInstruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }

    /// Selects the instruction whose discriminator prefixes `data`.
    pub fn instruction_for_data(&self, data: &[u8]) -> Option<&'static IdlInstruction> {
        let prefix = data.get(..DISCRIMINATOR_LEN)?;
        self.instructions
            .iter()
            .find(|ix| ix.discriminator.as_slice() == prefix)
    }

    pub fn account(&self, name: &str) -> Option<&'static IdlAccount> {
        self.accounts.iter().find(|account| account.name == name)
    }

    /// Selects the account layout whose discriminator prefixes `data`.
    pub fn account_for_data(&self, data: &[u8]) -> Option<&'static IdlAccount> {
        let prefix = data.get(..DISCRIMINATOR_LEN)?;
        self.accounts
            .iter()
            .find(|account| account.discriminator.as_slice() == prefix)
    }

    pub fn type_def(&self, name: &str) -> Option<&'static IdlTypeDef> {
        self.types.iter().find(|ty| ty.name == name)
    }

    pub fn error(&self, code: u32) -> Option<&'static IdlErrorCode> {
        self.errors.iter().find(|error| error.code == code)
    }

    /// Checks that the descriptor is internally consistent. It can't check that it matches the
    /// deployed program; that's on whoever transcribed it.
    pub fn validate(&self) -> Result<(), IdlError> {
        let mut names = HashSet::new();
        let mut discriminators = HashSet::new();
        for ix in self.instructions {
            if !names.insert(ix.name) {
                return Err(IdlError::DuplicateInstructionName(ix.name));
            }
            if !discriminators.insert(ix.discriminator) {
                return Err(IdlError::DuplicateInstructionDiscriminator(ix.name));
            }
            validate_instruction_accounts(ix)?;
        }

        let mut account_discriminators = HashSet::new();
        for account in self.accounts {
            if !account_discriminators.insert(account.discriminator) {
                return Err(IdlError::DuplicateAccountDiscriminator(account.name));
            }
            if self.type_def(account.name).is_none() {
                return Err(IdlError::MissingTypeDefinition(account.name));
            }
        }

        let mut codes = HashSet::new();
        for error in self.errors {
            if !codes.insert(error.code) {
                return Err(IdlError::DuplicateErrorCode(error.code));
            }
        }

        Ok(())
    }
}

fn validate_instruction_accounts(ix: &IdlInstruction) -> Result<(), IdlError> {
    for (i, account) in ix.accounts.iter().enumerate() {
        if let Some(address) = account.address {
            if address.parse::<Pubkey>().is_err() {
                return Err(IdlError::InvalidAddress {
                    instruction: ix.name,
                    account: account.name,
                });
            }
        }
        let Some(pda) = account.pda else {
            continue;
        };
        // Seed paths may only point at roles listed before the derived account.
        for seed in pda.seeds {
            if let IdlSeed::Account { path } = seed {
                if !ix.accounts[..i].iter().any(|prev| prev.name == *path) {
                    return Err(IdlError::UnresolvedSeedPath {
                        instruction: ix.name,
                        path: *path,
                    });
                }
            }
        }
    }
    Ok(())
}

impl IdlPda {
    /// Derives the address from the seed recipe, resolving `account` seeds through `resolve`.
    /// Returns `None` if a referenced account can't be resolved.
    pub fn find_program_address(
        &self,
        program_id: &Pubkey,
        resolve: impl Fn(&str) -> Option<Pubkey>,
    ) -> Option<(Pubkey, u8)> {
        let resolved = self
            .seeds
            .iter()
            .map(|seed| match seed {
                IdlSeed::Const { value } => Some(value.to_vec()),
                IdlSeed::Account { path } => resolve(path).map(|key| key.to_bytes().to_vec()),
            })
            .collect::<Option<Vec<_>>>()?;
        let seeds: Vec<&[u8]> = resolved.iter().map(Vec::as_slice).collect();
        Some(Pubkey::find_program_address(&seeds, program_id))
    }
}
