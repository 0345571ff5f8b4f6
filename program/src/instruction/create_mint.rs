use pinocchio::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::CreateAccount;

use crate::helpers::*;

pub fn process_create_mint_with_extensions(
    accounts: &[AccountInfo],
    interest_rate: i16,
) -> ProgramResult {
    let [user_info, mint_info, token_program_info, _system_program_info, rest @ ..] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    let hook_program_info = rest.first();

    require_signer(user_info)?;
    require_signer(mint_info)?;
    if token_program_info.key() != &TOKEN_2022_PROGRAM_ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // 1. Allocate the mint, sized for every extension it will carry
    let space = mint_space(hook_program_info.is_some());
    let lamports = Rent::get()?.minimum_balance(space);
    CreateAccount {
        from: user_info,
        to: mint_info,
        lamports,
        space: space as u64,
        owner: &TOKEN_2022_PROGRAM_ID,
    }
    .invoke()?;

    // 2. Extensions must be initialized before the mint itself
    if let Some(hook_program_info) = hook_program_info {
        initialize_transfer_hook(
            mint_info,
            user_info.key(),
            hook_program_info.key(),
            token_program_info,
        )?;
    }
    initialize_interest_bearing(mint_info, user_info.key(), interest_rate, token_program_info)?;

    // 3. Mint and freeze authority both go to the creator
    initialize_mint2(
        mint_info,
        MINT_DECIMALS,
        user_info.key(),
        user_info.key(),
        token_program_info,
    )?;

    log!("Mint initialized with interest rate {} bps", interest_rate);
    if hook_program_info.is_some() {
        msg!("Transfer hook extension enabled");
    }
    Ok(())
}
