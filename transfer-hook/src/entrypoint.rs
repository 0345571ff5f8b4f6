use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{self, HookInstruction};

program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    match HookInstruction::unpack(instruction_data)? {
        HookInstruction::Execute { amount } => instruction::execute::process_execute(accounts, amount),
        HookInstruction::InitializeExtraAccountMetaList => {
            msg!("Instruction: InitializeExtraAccountMetaList");
            instruction::initialize_extra_account_meta_list::process_initialize_extra_account_meta_list(
                accounts,
            )
        }
        HookInstruction::AddToWhitelist => {
            msg!("Instruction: AddToWhitelist");
            instruction::whitelist::process_add_to_whitelist(accounts)
        }
        HookInstruction::RemoveFromWhitelist => {
            msg!("Instruction: RemoveFromWhitelist");
            instruction::whitelist::process_remove_from_whitelist(accounts)
        }
    }
}
