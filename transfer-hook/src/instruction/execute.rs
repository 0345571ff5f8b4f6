use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::{error::HookError, helpers::*, state::WhitelistEntry};

/// Runs inside Token-2022's `transfer_checked`. The transfer goes through
/// only if the source owner holds a whitelist entry for the mint.
pub fn process_execute(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [
        source_info,
        mint_info,
        _destination_info,
        owner_info,
        extra_account_meta_list_info,
        whitelist_info,
        ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !is_transferring(source_info)? {
        return Err(HookError::NotTransferring.into());
    }
    verify_pda(
        extra_account_meta_list_info,
        &[EXTRA_ACCOUNT_METAS_SEED, mint_info.key().as_ref()],
        &crate::ID,
    )
    .map_err(|_| HookError::InvalidExtraAccountMetaList)?;

    let not_whitelisted = || ProgramError::from(HookError::NotWhitelisted);
    verify_pda(
        whitelist_info,
        &[WHITELIST_SEED, mint_info.key().as_ref(), owner_info.key().as_ref()],
        &crate::ID,
    )
    .map_err(|_| not_whitelisted())?;
    if !whitelist_info.is_owned_by(&crate::ID) {
        return Err(not_whitelisted());
    }
    {
        let data = whitelist_info.try_borrow_data()?;
        let entry = WhitelistEntry::load(&data).map_err(|_| not_whitelisted())?;
        if &entry.address != owner_info.key() || &entry.mint != mint_info.key() {
            return Err(not_whitelisted());
        }
    }

    log!("Transfer of {} approved", amount);
    Ok(())
}
