//! Cross-program invocations into Token-2022 for the extension instructions
//! `pinocchio-token` does not wrap. Instruction data is encoded by hand; each
//! encoder is a plain function so the byte layout can be checked off-chain.

use pinocchio::{
    account_info::AccountInfo,
    cpi::{invoke, invoke_signed},
    instruction::{AccountMeta, Instruction, Signer},
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    ProgramResult,
};

use crate::error::{to_program_error, VaultError};
use crate::helpers::constant::*;

/// Accounts Token-2022 needs to run a mint's transfer hook during
/// `transfer_checked`.
pub struct HookAccounts<'a> {
    pub extra_account_meta_list: &'a AccountInfo,
    pub whitelist: &'a AccountInfo,
    pub hook_program: &'a AccountInfo,
}

/// Matches the trailing accounts of Deposit/Withdraw against the mint's
/// transfer hook. `owner` is the owner of the source token account, whose
/// whitelist entry the hook checks.
pub fn hook_accounts<'a>(
    remaining: &'a [AccountInfo],
    hook_program_id: Option<Pubkey>,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Option<HookAccounts<'a>>, ProgramError> {
    let invalid = || to_program_error(VaultError::InvalidExtraAccountMeta);

    match (hook_program_id, remaining) {
        (None, []) => Ok(None),
        (Some(program_id), [extra_account_meta_list, whitelist, hook_program, ..]) => {
            if hook_program.key() != &program_id {
                return Err(invalid());
            }
            let (expected_meta_list, _) =
                find_program_address(&[EXTRA_ACCOUNT_METAS_SEED, mint.as_ref()], &program_id);
            if extra_account_meta_list.key() != &expected_meta_list {
                return Err(invalid());
            }
            let (expected_whitelist, _) = find_program_address(
                &[WHITELIST_SEED, mint.as_ref(), owner.as_ref()],
                &program_id,
            );
            if whitelist.key() != &expected_whitelist {
                return Err(invalid());
            }
            Ok(Some(HookAccounts {
                extra_account_meta_list,
                whitelist,
                hook_program,
            }))
        }
        // Hook configured but accounts missing, or accounts for a hook-less mint
        _ => Err(invalid()),
    }
}

// ---------------------------------------------------------------------------
// Encoders
// ---------------------------------------------------------------------------

pub fn transfer_checked_data(amount: u64, decimals: u8) -> [u8; 10] {
    let mut data = [0u8; 10];
    data[0] = TRANSFER_CHECKED;
    data[1..9].copy_from_slice(&amount.to_le_bytes());
    data[9] = decimals;
    data
}

/// InitializeMint2 with both authorities set.
pub fn initialize_mint2_data(
    decimals: u8,
    mint_authority: &Pubkey,
    freeze_authority: &Pubkey,
) -> [u8; 67] {
    let mut data = [0u8; 67];
    data[0] = INITIALIZE_MINT_2;
    data[1] = decimals;
    data[2..34].copy_from_slice(mint_authority);
    // COption::Some tag
    data[34] = 1;
    data[35..67].copy_from_slice(freeze_authority);
    data
}

pub fn interest_bearing_initialize_data(rate_authority: &Pubkey, rate: i16) -> [u8; 36] {
    let mut data = [0u8; 36];
    data[0] = INTEREST_BEARING_MINT_EXTENSION;
    data[1] = EXTENSION_INITIALIZE;
    data[2..34].copy_from_slice(rate_authority);
    data[34..36].copy_from_slice(&rate.to_le_bytes());
    data
}

pub fn interest_bearing_update_rate_data(rate: i16) -> [u8; 4] {
    let mut data = [0u8; 4];
    data[0] = INTEREST_BEARING_MINT_EXTENSION;
    data[1] = INTEREST_BEARING_UPDATE_RATE;
    data[2..4].copy_from_slice(&rate.to_le_bytes());
    data
}

pub fn transfer_hook_initialize_data(authority: &Pubkey, hook_program_id: &Pubkey) -> [u8; 66] {
    let mut data = [0u8; 66];
    data[0] = TRANSFER_HOOK_EXTENSION;
    data[1] = EXTENSION_INITIALIZE;
    data[2..34].copy_from_slice(authority);
    data[34..66].copy_from_slice(hook_program_id);
    data
}

// ---------------------------------------------------------------------------
// Invocations
// ---------------------------------------------------------------------------

pub fn initialize_transfer_hook(
    mint: &AccountInfo,
    authority: &Pubkey,
    hook_program_id: &Pubkey,
    token_program: &AccountInfo,
) -> ProgramResult {
    let data = transfer_hook_initialize_data(authority, hook_program_id);
    let metas = [AccountMeta::writable(mint.key())];
    let ix = Instruction {
        program_id: token_program.key(),
        accounts: &metas,
        data: &data,
    };
    invoke(&ix, &[mint])
}

pub fn initialize_interest_bearing(
    mint: &AccountInfo,
    rate_authority: &Pubkey,
    rate: i16,
    token_program: &AccountInfo,
) -> ProgramResult {
    let data = interest_bearing_initialize_data(rate_authority, rate);
    let metas = [AccountMeta::writable(mint.key())];
    let ix = Instruction {
        program_id: token_program.key(),
        accounts: &metas,
        data: &data,
    };
    invoke(&ix, &[mint])
}

pub fn update_interest_rate(
    mint: &AccountInfo,
    rate_authority: &AccountInfo,
    rate: i16,
    token_program: &AccountInfo,
) -> ProgramResult {
    let data = interest_bearing_update_rate_data(rate);
    let metas = [
        AccountMeta::writable(mint.key()),
        AccountMeta::readonly_signer(rate_authority.key()),
    ];
    let ix = Instruction {
        program_id: token_program.key(),
        accounts: &metas,
        data: &data,
    };
    invoke(&ix, &[mint, rate_authority])
}

pub fn initialize_mint2(
    mint: &AccountInfo,
    decimals: u8,
    mint_authority: &Pubkey,
    freeze_authority: &Pubkey,
    token_program: &AccountInfo,
) -> ProgramResult {
    let data = initialize_mint2_data(decimals, mint_authority, freeze_authority);
    let metas = [AccountMeta::writable(mint.key())];
    let ix = Instruction {
        program_id: token_program.key(),
        accounts: &metas,
        data: &data,
    };
    invoke(&ix, &[mint])
}

/// `transfer_checked` from `from` to `to`. When the mint runs a transfer
/// hook its three accounts are appended; Token-2022 resolves them by key.
#[allow(clippy::too_many_arguments)]
pub fn transfer_checked(
    from: &AccountInfo,
    mint: &AccountInfo,
    to: &AccountInfo,
    authority: &AccountInfo,
    token_program: &AccountInfo,
    hook: Option<&HookAccounts>,
    amount: u64,
    decimals: u8,
    signers: &[Signer],
) -> ProgramResult {
    let data = transfer_checked_data(amount, decimals);

    match hook {
        None => {
            let metas = [
                AccountMeta::writable(from.key()),
                AccountMeta::readonly(mint.key()),
                AccountMeta::writable(to.key()),
                AccountMeta::readonly_signer(authority.key()),
            ];
            let ix = Instruction {
                program_id: token_program.key(),
                accounts: &metas,
                data: &data,
            };
            invoke_signed(&ix, &[from, mint, to, authority], signers)
        }
        Some(hook) => {
            let metas = [
                AccountMeta::writable(from.key()),
                AccountMeta::readonly(mint.key()),
                AccountMeta::writable(to.key()),
                AccountMeta::readonly_signer(authority.key()),
                AccountMeta::readonly(hook.extra_account_meta_list.key()),
                AccountMeta::new(hook.whitelist.key(), hook.whitelist.is_writable(), false),
                AccountMeta::readonly(hook.hook_program.key()),
            ];
            let ix = Instruction {
                program_id: token_program.key(),
                accounts: &metas,
                data: &data,
            };
            invoke_signed(
                &ix,
                &[
                    from,
                    mint,
                    to,
                    authority,
                    hook.extra_account_meta_list,
                    hook.whitelist,
                    hook.hook_program,
                ],
                signers,
            )
        }
    }
}
