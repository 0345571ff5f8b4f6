use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;

use crate::{error::HookError, helpers::*, state::WhitelistEntry};

struct WhitelistAccounts<'a> {
    authority: &'a AccountInfo,
    address: &'a AccountInfo,
    mint: &'a AccountInfo,
    whitelist: &'a AccountInfo,
    bump: u8,
}

fn whitelist_accounts(accounts: &[AccountInfo]) -> Result<WhitelistAccounts<'_>, ProgramError> {
    let [authority, address, mint, whitelist, _system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_mint_authority(mint, authority)?;
    if !whitelist.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    let bump = verify_pda(
        whitelist,
        &[WHITELIST_SEED, mint.key().as_ref(), address.key().as_ref()],
        &crate::ID,
    )?;

    Ok(WhitelistAccounts {
        authority,
        address,
        mint,
        whitelist,
        bump,
    })
}

/// Creates the entry if needed; adding twice is a no-op.
pub fn process_add_to_whitelist(accounts: &[AccountInfo]) -> ProgramResult {
    let ctx = whitelist_accounts(accounts)?;

    if !ctx.whitelist.is_owned_by(&crate::ID) {
        let bump_seed = [ctx.bump];
        let seeds = [
            Seed::from(WHITELIST_SEED),
            Seed::from(ctx.mint.key()),
            Seed::from(ctx.address.key()),
            Seed::from(&bump_seed),
        ];
        create_pda_account(
            ctx.authority,
            ctx.whitelist,
            WhitelistEntry::LEN,
            &[Signer::from(&seeds)],
        )?;
    }

    let mut data = ctx.whitelist.try_borrow_mut_data()?;
    WhitelistEntry::store(
        &mut data,
        WhitelistEntry::new(*ctx.address.key(), *ctx.mint.key(), ctx.bump),
    )?;

    msg!("Address whitelisted");
    Ok(())
}

/// Closes the entry, returning its rent to the mint authority.
pub fn process_remove_from_whitelist(accounts: &[AccountInfo]) -> ProgramResult {
    let ctx = whitelist_accounts(accounts)?;

    if !ctx.whitelist.is_owned_by(&crate::ID) {
        return Err(HookError::NotWhitelisted.into());
    }

    let lamports = ctx.whitelist.lamports();
    {
        let mut authority_lamports = ctx.authority.try_borrow_mut_lamports()?;
        *authority_lamports = authority_lamports
            .checked_add(lamports)
            .ok_or(ProgramError::ArithmeticOverflow)?;
    }
    *ctx.whitelist.try_borrow_mut_lamports()? = 0;
    // Runtime reclaims the zero-lamport account at the end of the transaction
    ctx.whitelist.try_borrow_mut_data()?.fill(0);

    log!("Removed {} lamport whitelist entry", lamports);
    Ok(())
}
