use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    ProgramResult,
};

use crate::helpers::*;

pub fn process_initialize_extra_account_meta_list(accounts: &[AccountInfo]) -> ProgramResult {
    let [
        authority_info,
        extra_account_meta_list_info,
        mint_info,
        _system_program_info,
        ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_mint_authority(mint_info, authority_info)?;
    let bump = verify_pda(
        extra_account_meta_list_info,
        &[EXTRA_ACCOUNT_METAS_SEED, mint_info.key().as_ref()],
        &crate::ID,
    )?;
    if extra_account_meta_list_info.is_owned_by(&crate::ID) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    let bump_seed = [bump];
    let seeds = [
        Seed::from(EXTRA_ACCOUNT_METAS_SEED),
        Seed::from(mint_info.key()),
        Seed::from(&bump_seed),
    ];
    create_pda_account(
        authority_info,
        extra_account_meta_list_info,
        EXTRA_ACCOUNT_META_LIST_LEN,
        &[Signer::from(&seeds)],
    )?;

    extra_account_meta_list_info
        .try_borrow_mut_data()?
        .copy_from_slice(&extra_account_meta_list_data());

    msg!("Extra account metas initialized");
    Ok(())
}
