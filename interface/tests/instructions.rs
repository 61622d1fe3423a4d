use borsh::BorshDeserialize;
use prereq_interface::{
    idl::{
        IdlInstruction,
        IDL,
    },
    instructions::{
        close::Close,
        create_collection::CreateCollection,
        initialize::Initialize,
        submit::{
            Submit,
            Track,
        },
        update::Update,
        PrereqInstruction,
    },
    pda::{
        find_collection_authority_address,
        find_prereq_account_address,
    },
    program,
};
use solana_instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

/// Checks the built instruction against the descriptor: program, account count, each role's
/// flags, fixed addresses, seed-derived addresses, and the discriminator prefix.
fn assert_matches_descriptor(instruction: &Instruction, declared: &IdlInstruction) {
    assert_eq!(instruction.program_id, program::ID);
    assert_eq!(instruction.accounts.len(), declared.accounts.len());
    assert!(instruction.data.starts_with(&declared.discriminator));

    let key_of = |name: &str| {
        declared
            .accounts
            .iter()
            .position(|role| role.name == name)
            .map(|i| instruction.accounts[i].pubkey)
    };

    for (meta, role) in instruction.accounts.iter().zip(declared.accounts) {
        assert_eq!(meta.is_writable, role.writable, "{}.{}", declared.name, role.name);
        assert_eq!(meta.is_signer, role.signer, "{}.{}", declared.name, role.name);
        if let Some(address) = role.address {
            assert_eq!(meta.pubkey, address.parse::<Pubkey>().unwrap());
        }
        if let Some(pda) = role.pda {
            let (expected, _) = pda.find_program_address(&program::ID, key_of).unwrap();
            assert_eq!(meta.pubkey, expected, "{}.{}", declared.name, role.name);
        }
    }
}

#[test]
fn builders_follow_the_descriptor() {
    let user = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let collection = Pubkey::new_unique();

    let cases = [
        (PrereqInstruction::Close, Close::new(user).instruction()),
        (
            PrereqInstruction::CreateCollection,
            CreateCollection::new(user, collection).instruction(),
        ),
        (
            PrereqInstruction::Initialize,
            Initialize::new(user, "octocat").instruction().unwrap(),
        ),
        (
            PrereqInstruction::SubmitRs,
            Submit::new(Track::Rust, user, mint, collection).instruction(),
        ),
        (
            PrereqInstruction::SubmitTs,
            Submit::new(Track::TypeScript, user, mint, collection).instruction(),
        ),
        (
            PrereqInstruction::Update,
            Update::new(user, "octocat").instruction().unwrap(),
        ),
    ];

    for (tag, instruction) in cases {
        assert_matches_descriptor(&instruction, tag.descriptor());
        assert_eq!(
            PrereqInstruction::try_from(instruction.data.as_slice()),
            Ok(tag)
        );
    }
}

#[test]
fn github_argument_is_borsh_encoded() {
    let user = Pubkey::new_unique();
    let instruction = Initialize::new(user, "ferris-the-crab").instruction().unwrap();

    let (discriminator, args) = instruction.data.split_at(8);
    assert_eq!(discriminator, [175, 175, 109, 31, 13, 152, 155, 237]);
    assert_eq!(&args[..4], &15u32.to_le_bytes());
    assert_eq!(String::try_from_slice(args).unwrap(), "ferris-the-crab");

    let update = Update::new(user, "").instruction().unwrap();
    assert_eq!(update.data.len(), 12);
    assert_eq!(
        IDL.instruction_for_data(&update.data).map(|ix| ix.name),
        Some("update")
    );
}

#[test]
fn argless_instructions_carry_only_the_discriminator() {
    let user = Pubkey::new_unique();
    let collection = Pubkey::new_unique();

    assert_eq!(
        Close::new(user).instruction().data,
        [98, 165, 201, 177, 108, 65, 206, 96]
    );
    assert_eq!(
        CreateCollection::new(user, collection).instruction().data,
        [156, 251, 92, 54, 233, 2, 16, 82]
    );
}

#[test]
fn derived_addresses_are_stable_per_seed() {
    let user = Pubkey::new_unique();
    let other = Pubkey::new_unique();

    assert_eq!(
        find_prereq_account_address(&user),
        find_prereq_account_address(&user)
    );
    assert_ne!(
        find_prereq_account_address(&user).0,
        find_prereq_account_address(&other).0
    );
    // Same key, different seed prefix.
    assert_ne!(
        find_prereq_account_address(&user).0,
        find_collection_authority_address(&user).0
    );
}
