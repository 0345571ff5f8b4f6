//! Read-side helpers for Token-2022 mints: sizing an account for a set of
//! extensions and walking the TLV area that follows the base mint.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_token::state::{Mint, TokenAccount};

use crate::helpers::constant::*;

/// Bytes needed for a Token-2022 mint carrying InterestBearingConfig and,
/// when `with_transfer_hook` is set, TransferHook.
///
/// Extended mints are padded to the size of a token account so the two can
/// never be confused, followed by a one-byte account type and the TLV entries.
pub const fn mint_space(with_transfer_hook: bool) -> usize {
    let mut space = TokenAccount::LEN + 1 + TLV_HEADER_LEN + INTEREST_BEARING_CONFIG_LEN;
    if with_transfer_hook {
        space += TLV_HEADER_LEN + TRANSFER_HOOK_LEN;
    }
    space
}

/// Returns the value bytes of extension `extension_type`, if the mint has it.
pub fn find_extension(mint_data: &[u8], extension_type: u16) -> Option<&[u8]> {
    // Base-only mints carry no extensions.
    if mint_data.len() <= TokenAccount::LEN {
        return None;
    }
    if mint_data[TokenAccount::LEN] != ACCOUNT_TYPE_MINT {
        return None;
    }

    let mut cursor = TokenAccount::LEN + 1;
    while cursor + TLV_HEADER_LEN <= mint_data.len() {
        let ty = u16::from_le_bytes([mint_data[cursor], mint_data[cursor + 1]]);
        let len = u16::from_le_bytes([mint_data[cursor + 2], mint_data[cursor + 3]]) as usize;
        // Uninitialized tail
        if ty == 0 {
            return None;
        }
        let start = cursor + TLV_HEADER_LEN;
        let end = start.checked_add(len)?;
        if end > mint_data.len() {
            return None;
        }
        if ty == extension_type {
            return Some(&mint_data[start..end]);
        }
        cursor = end;
    }
    None
}

/// Program id configured in the mint's TransferHook extension.
///
/// An all-zero id means "no hook" in Token-2022's optional-pubkey encoding.
pub fn transfer_hook_program_id(mint_data: &[u8]) -> Option<Pubkey> {
    let ext = find_extension(mint_data, EXTENSION_TYPE_TRANSFER_HOOK)?;
    if ext.len() < TRANSFER_HOOK_LEN {
        return None;
    }
    let mut program_id = [0u8; 32];
    program_id.copy_from_slice(&ext[32..64]);
    if program_id == [0u8; 32] {
        None
    } else {
        Some(program_id)
    }
}

/// Current rate, in basis points, of the mint's InterestBearingConfig.
pub fn current_interest_rate(mint_data: &[u8]) -> Option<i16> {
    let ext = find_extension(mint_data, EXTENSION_TYPE_INTEREST_BEARING_CONFIG)?;
    if ext.len() < INTEREST_BEARING_CONFIG_LEN {
        return None;
    }
    Some(i16::from_le_bytes([ext[50], ext[51]]))
}

/// Views the base mint that prefixes both SPL Token and Token-2022 mints.
pub fn base_mint(mint_data: &[u8]) -> Result<&Mint, ProgramError> {
    if mint_data.len() < Mint::LEN {
        return Err(ProgramError::InvalidAccountData);
    }
    // SAFETY: length checked above; Mint has alignment 1.
    let mint = unsafe { Mint::from_bytes_unchecked(mint_data) };
    if !mint.is_initialized() {
        return Err(ProgramError::UninitializedAccount);
    }
    Ok(mint)
}

pub fn mint_decimals(mint_data: &[u8]) -> Result<u8, ProgramError> {
    base_mint(mint_data).map(Mint::decimals)
}
