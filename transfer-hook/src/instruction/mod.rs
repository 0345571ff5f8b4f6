use pinocchio::program_error::ProgramError;

use crate::helpers::constant::*;

pub mod execute;
pub use execute::*;

pub mod initialize_extra_account_meta_list;
pub use initialize_extra_account_meta_list::*;

pub mod whitelist;
pub use whitelist::*;

/// Interface instructions use the 8-byte transfer-hook discriminators;
/// whitelist administration is a single tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookInstruction {
    /// Accounts: source, mint, destination, owner, extra_account_meta_list,
    /// whitelist. Payload: amount (`u64`).
    Execute { amount: u64 },
    /// Accounts: mint_authority (w,s), extra_account_meta_list (w), mint,
    /// system_program.
    InitializeExtraAccountMetaList,
    /// Accounts: mint_authority (w,s), address, mint, whitelist (w),
    /// system_program.
    AddToWhitelist,
    /// Same accounts as `AddToWhitelist`.
    RemoveFromWhitelist,
}

impl HookInstruction {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        match data {
            [ADD_TO_WHITELIST] => return Ok(HookInstruction::AddToWhitelist),
            [REMOVE_FROM_WHITELIST] => return Ok(HookInstruction::RemoveFromWhitelist),
            _ => {}
        }

        if data.len() < 8 {
            return Err(ProgramError::InvalidInstructionData);
        }
        let (disc, payload) = data.split_at(8);
        if disc == EXECUTE_DISCRIMINATOR.as_slice() {
            // Token-2022 may append more data in future versions
            let amount: [u8; 8] = payload
                .get(..8)
                .and_then(|bytes| bytes.try_into().ok())
                .ok_or(ProgramError::InvalidInstructionData)?;
            Ok(HookInstruction::Execute {
                amount: u64::from_le_bytes(amount),
            })
        } else if disc == INITIALIZE_EXTRA_ACCOUNT_META_LIST_DISCRIMINATOR.as_slice() {
            // Payload is the caller's meta list, which this hook fixes itself
            Ok(HookInstruction::InitializeExtraAccountMetaList)
        } else {
            Err(ProgramError::InvalidInstructionData)
        }
    }
}
