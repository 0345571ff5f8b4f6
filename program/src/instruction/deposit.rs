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
    state::{Vault, VaultRegistryEntry},
};

pub fn process_deposit(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let depositor_info = next_account_info(account_info_iter)?;
    let vault_info = next_account_info(account_info_iter)?;
    let registry_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let depositor_token_info = next_account_info(account_info_iter)?;
    let vault_reserve_info = next_account_info(account_info_iter)?;
    let token_program_info = next_account_info(account_info_iter)?;
    let _system_program_info = next_account_info(account_info_iter)?;
    // transfer-hook accounts (optional)
    let remaining = account_info_iter.as_slice();

    if amount == 0 {
        return Err(to_program_error(VaultError::InvalidAmount));
    }

    require_signer(depositor_info)?;
    require_writable(vault_info)?;
    require_writable(registry_info)?;
    require_token_program(token_program_info)?;
    if !vault_info.is_owned_by(&crate::ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    if !mint_info.is_owned_by(token_program_info.key()) {
        return Err(ProgramError::InvalidAccountOwner);
    }

    {
        let data = vault_info.try_borrow_data()?;
        let vault = Vault::load(&data)?;
        if &vault.mint != mint_info.key() || &vault.token_reserve != vault_reserve_info.key() {
            return Err(to_program_error(VaultError::InvalidVault));
        }
    }

    // The registry records the depositor's ATA, so nothing else is accepted
    verify_associated_token_address(
        depositor_token_info,
        depositor_info.key(),
        mint_info.key(),
        token_program_info.key(),
    )?;

    let (decimals, hook_program_id) = {
        let data = mint_info.try_borrow_data()?;
        (mint_decimals(&data)?, transfer_hook_program_id(&data))
    };
    let hook = hook_accounts(
        remaining,
        hook_program_id,
        mint_info.key(),
        depositor_info.key(),
    )?;

    // Registry entry is created on the depositor's first deposit
    let registry_bump = verify_pda(
        registry_info,
        &[
            VAULT_REGISTRY_SEED,
            vault_info.key().as_ref(),
            depositor_info.key().as_ref(),
        ],
        &crate::ID,
    )?;
    let first_deposit = !registry_info.is_owned_by(&crate::ID);
    if first_deposit {
        let bump_seed = [registry_bump];
        let seeds = [
            Seed::from(VAULT_REGISTRY_SEED),
            Seed::from(vault_info.key()),
            Seed::from(depositor_info.key()),
            Seed::from(&bump_seed),
        ];
        create_pda_account(
            depositor_info,
            registry_info,
            VaultRegistryEntry::LEN,
            &[Signer::from(&seeds)],
        )?;

        let mut data = registry_info.try_borrow_mut_data()?;
        VaultRegistryEntry::init(
            &mut data,
            VaultRegistryEntry::new(
                *depositor_info.key(),
                *depositor_token_info.key(),
                *vault_info.key(),
                *mint_info.key(),
                registry_bump,
            ),
        )?;
    }

    // Depositor signs the outer transaction; no PDA seeds needed
    transfer_checked(
        depositor_token_info,
        mint_info,
        vault_reserve_info,
        depositor_info,
        token_program_info,
        hook.as_ref(),
        amount,
        decimals,
        &[],
    )?;

    let reserve_amount = {
        let mut data = vault_info.try_borrow_mut_data()?;
        let vault = Vault::load_mut(&mut data)?;
        let reserve_amount = checked_add(vault.token_reserve_amount(), amount)?;
        vault.set_token_reserve_amount(reserve_amount);
        if first_deposit {
            let depositors = checked_add(vault.num_depositors(), 1)?;
            vault.set_num_depositors(depositors);
        }
        reserve_amount
    };

    {
        let mut data = registry_info.try_borrow_mut_data()?;
        let entry = VaultRegistryEntry::load_mut(&mut data)?;
        entry.record_deposit(amount)?;
    }

    log!("Deposited {} tokens, vault balance {}", amount, reserve_amount);
    Ok(())
}
