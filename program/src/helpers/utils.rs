use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};
use pinocchio_token::state::TokenAccount;

use crate::error::{to_program_error, VaultError};
use crate::helpers::constant::*;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

#[inline]
pub(crate) fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b)
        .ok_or(VaultError::Overflow)
        .map_err(to_program_error)
}

#[inline]
pub(crate) fn checked_sub(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_sub(b)
        .ok_or(VaultError::Underflow)
        .map_err(to_program_error)
}

#[inline]
pub fn require_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline]
pub fn require_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

/// Accepts legacy SPL Token and Token-2022; the vault moves either.
#[inline]
pub fn is_token_program(key: &Pubkey) -> bool {
    key == &TOKEN_2022_PROGRAM_ID || key == &pinocchio_token::ID
}

pub fn require_token_program(token_program: &AccountInfo) -> ProgramResult {
    if !is_token_program(token_program.key()) {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Re-derives the canonical PDA for `seeds` and checks `account` sits there.
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

pub fn verify_associated_token_address(
    account: &AccountInfo,
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> ProgramResult {
    let (expected, _) = find_program_address(
        &[wallet.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    );
    if account.key() != &expected {
        return Err(to_program_error(VaultError::InvalidTokenAccount));
    }
    Ok(())
}

/// Checks that `account` is an initialized token account of `token_program`
/// holding `mint` for `owner`.
pub fn verify_token_account(
    account: &AccountInfo,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> ProgramResult {
    if !account.is_owned_by(token_program) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    let data = account.try_borrow_data()?;
    if data.len() < TokenAccount::LEN {
        return Err(ProgramError::InvalidAccountData);
    }
    // SAFETY: length checked above; TokenAccount has alignment 1.
    let token_account = unsafe { TokenAccount::from_bytes_unchecked(&data) };
    if token_account.owner() != owner || token_account.mint() != mint {
        return Err(to_program_error(VaultError::InvalidTokenAccount));
    }
    Ok(())
}

/// Funds and allocates `account` at a PDA of this program.
///
/// Anyone can send lamports to a PDA before it is created, so an address that
/// already holds a balance is topped up to rent exemption, then allocated and
/// assigned in place.
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
