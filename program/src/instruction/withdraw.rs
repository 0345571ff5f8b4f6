use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    error::{to_program_error, VaultError},
    helpers::*,
    state::Vault,
};

/// Only the vault authority may withdraw; the vault PDA signs the transfer
/// out of its reserve.
pub fn process_withdraw(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [
        withdrawer_info,
        vault_info,
        mint_info,
        withdrawer_token_info,
        vault_reserve_info,
        token_program_info,
        remaining @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(withdrawer_info)?;
    require_writable(vault_info)?;
    require_token_program(token_program_info)?;
    if !vault_info.is_owned_by(&crate::ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    if !mint_info.is_owned_by(token_program_info.key()) {
        return Err(ProgramError::InvalidAccountOwner);
    }

    let (vault_authority, bump) = {
        let data = vault_info.try_borrow_data()?;
        let vault = Vault::load(&data)?;
        if &vault.vault_authority != withdrawer_info.key() {
            return Err(to_program_error(VaultError::Unauthorized));
        }
        if &vault.mint != mint_info.key() || &vault.token_reserve != vault_reserve_info.key() {
            return Err(to_program_error(VaultError::InvalidVault));
        }
        if amount == 0 {
            return Err(to_program_error(VaultError::InvalidAmount));
        }
        if vault.token_reserve_amount() < amount {
            return Err(to_program_error(VaultError::InsufficientFunds));
        }
        (vault.vault_authority, vault.bump)
    };

    verify_associated_token_address(
        withdrawer_token_info,
        withdrawer_info.key(),
        mint_info.key(),
        token_program_info.key(),
    )?;

    let (decimals, hook_program_id) = {
        let data = mint_info.try_borrow_data()?;
        (mint_decimals(&data)?, transfer_hook_program_id(&data))
    };
    // The vault PDA owns the reserve, so its whitelist entry is the one checked
    let hook = hook_accounts(remaining, hook_program_id, mint_info.key(), vault_info.key())?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(VAULT_SEED),
        Seed::from(&vault_authority),
        Seed::from(&bump_seed),
    ];
    transfer_checked(
        vault_reserve_info,
        mint_info,
        withdrawer_token_info,
        vault_info,
        token_program_info,
        hook.as_ref(),
        amount,
        decimals,
        &[Signer::from(&seeds)],
    )?;

    let remaining_balance = {
        let mut data = vault_info.try_borrow_mut_data()?;
        let vault = Vault::load_mut(&mut data)?;
        let balance = checked_sub(vault.token_reserve_amount(), amount)?;
        vault.set_token_reserve_amount(balance);
        balance
    };

    log!("Withdrew {} tokens from vault", amount);
    log!("Remaining vault balance: {}", remaining_balance);
    Ok(())
}
