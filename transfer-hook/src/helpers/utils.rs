use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};
use pinocchio_token::state::Mint;

use crate::error::HookError;
use crate::helpers::constant::*;

#[inline]
pub fn require_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

pub fn verify_pda(
    account: &AccountInfo,
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = find_program_address(seeds, program_id);
    if account.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(bump)
}

/// The mint's current mint authority administers its hook accounts.
pub fn require_mint_authority(mint: &AccountInfo, authority: &AccountInfo) -> ProgramResult {
    require_signer(authority)?;
    if !mint.is_owned_by(&TOKEN_2022_PROGRAM_ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    let data = mint.try_borrow_data()?;
    if data.len() < Mint::LEN {
        return Err(ProgramError::InvalidAccountData);
    }
    // SAFETY: length checked above; Mint has alignment 1.
    let state = unsafe { Mint::from_bytes_unchecked(&data) };
    if state.mint_authority() != Some(authority.key()) {
        return Err(HookError::Unauthorized.into());
    }
    Ok(())
}

/// Whether Token-2022 flagged `token_account` as the source of an in-flight
/// transfer. Accounts without the TransferHookAccount extension never are.
pub fn is_transferring(token_account: &AccountInfo) -> Result<bool, ProgramError> {
    if !token_account.is_owned_by(&TOKEN_2022_PROGRAM_ID) {
        return Ok(false);
    }
    let data = token_account.try_borrow_data()?;
    Ok(transferring_flag(&data).unwrap_or(false))
}

pub(crate) fn transferring_flag(data: &[u8]) -> Option<bool> {
    if data.len() <= TOKEN_ACCOUNT_BASE_LEN || data[TOKEN_ACCOUNT_BASE_LEN] != ACCOUNT_TYPE_ACCOUNT {
        return None;
    }
    let mut cursor = TOKEN_ACCOUNT_BASE_LEN + 1;
    while cursor + 4 <= data.len() {
        let ty = u16::from_le_bytes([data[cursor], data[cursor + 1]]);
        let len = u16::from_le_bytes([data[cursor + 2], data[cursor + 3]]) as usize;
        if ty == 0 {
            return None;
        }
        let start = cursor + 4;
        let end = start.checked_add(len)?;
        if end > data.len() {
            return None;
        }
        if ty == EXTENSION_TYPE_TRANSFER_HOOK_ACCOUNT {
            return data.get(start).map(|flag| *flag == 1);
        }
        cursor = end;
    }
    None
}

/// Creates `account` at a PDA of this program, tolerating lamports sent to
/// the address beforehand.
pub fn create_pda_account(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    signers: &[Signer],
) -> ProgramResult {
    let required = Rent::get()?.minimum_balance(space);
    let current = account.lamports();

    if current == 0 {
        return CreateAccount {
            from: payer,
            to: account,
            lamports: required,
            space: space as u64,
            owner: &crate::ID,
        }
        .invoke_signed(signers);
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        Transfer {
            from: payer,
            to: account,
            lamports: top_up,
        }
        .invoke()?;
    }
    Allocate {
        account,
        space: space as u64,
    }
    .invoke_signed(signers)?;
    Assign {
        account,
        owner: &crate::ID,
    }
    .invoke_signed(signers)
}
