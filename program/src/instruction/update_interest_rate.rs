use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::helpers::*;

/// Forwards Token-2022's `UpdateRate`; Token-2022 checks the rate authority.
pub fn process_update_interest_rate(accounts: &[AccountInfo], interest_rate: i16) -> ProgramResult {
    let [rate_authority_info, mint_info, token_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(rate_authority_info)?;
    if token_program_info.key() != &TOKEN_2022_PROGRAM_ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    if !mint_info.is_owned_by(&TOKEN_2022_PROGRAM_ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }

    update_interest_rate(mint_info, rate_authority_info, interest_rate, token_program_info)?;

    log!("Interest rate updated to {} bps", interest_rate);
    Ok(())
}
