use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    ProgramResult,
};

use pinocchio_associated_token_account::instructions::CreateIdempotent;

use crate::{helpers::*, state::Vault};

pub fn process_initialize_vault(accounts: &[AccountInfo]) -> ProgramResult {
    let [
        vault_authority_info,
        mint_info,
        vault_info,
        token_reserve_info,
        associated_token_program_info,
        token_program_info,
        system_program_info,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(vault_authority_info)?;
    require_writable(vault_info)?;
    require_writable(token_reserve_info)?;
    require_token_program(token_program_info)?;
    if associated_token_program_info.key() != &ASSOCIATED_TOKEN_PROGRAM_ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    if !mint_info.is_owned_by(token_program_info.key()) {
        return Err(ProgramError::InvalidAccountOwner);
    }

    let bump = verify_pda(
        vault_info,
        &[VAULT_SEED, vault_authority_info.key().as_ref()],
        &crate::ID,
    )?;
    // One vault per authority
    if vault_info.is_owned_by(&crate::ID) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    verify_associated_token_address(
        token_reserve_info,
        vault_info.key(),
        mint_info.key(),
        token_program_info.key(),
    )?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(VAULT_SEED),
        Seed::from(vault_authority_info.key()),
        Seed::from(&bump_seed),
    ];
    create_pda_account(vault_authority_info, vault_info, Vault::LEN, &[Signer::from(&seeds)])?;

    // Reserve is the vault PDA's associated token account. ATA creation is
    // permissionless, so it may already exist.
    CreateIdempotent {
        funding_account: vault_authority_info,
        account: token_reserve_info,
        wallet: vault_info,
        mint: mint_info,
        system_program: system_program_info,
        token_program: token_program_info,
    }
    .invoke()?;
    verify_token_account(
        token_reserve_info,
        vault_info.key(),
        mint_info.key(),
        token_program_info.key(),
    )?;

    let mut data = vault_info.try_borrow_mut_data()?;
    Vault::init(
        &mut data,
        Vault::new(
            *vault_authority_info.key(),
            *mint_info.key(),
            *token_reserve_info.key(),
            bump,
        ),
    )?;

    msg!("Vault initialized");
    Ok(())
}
