use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{self, VaultInstruction};

// Entrypoint macro
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

    // Single-byte discriminator + fixed-size payload
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    let read_u64 = |data: &[u8]| -> Result<u64, ProgramError> {
        let bytes: [u8; 8] = data
            .try_into()
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        Ok(u64::from_le_bytes(bytes))
    };
    // Interest rates are basis points
    let read_i16 = |data: &[u8]| -> Result<i16, ProgramError> {
        let bytes: [u8; 2] = data
            .try_into()
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        Ok(i16::from_le_bytes(bytes))
    };

    match VaultInstruction::try_from(disc)? {
        VaultInstruction::CreateMintWithExtensions => {
            msg!("Instruction: CreateMintWithExtensions");
            let interest_rate = read_i16(payload)?;
            instruction::create_mint::process_create_mint_with_extensions(accounts, interest_rate)
        }
        VaultInstruction::InitializeVault => {
            msg!("Instruction: InitializeVault");
            if !payload.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            instruction::initialize_vault::process_initialize_vault(accounts)
        }
        VaultInstruction::Deposit => {
            msg!("Instruction: Deposit");
            let amount = read_u64(payload)?;
            instruction::deposit::process_deposit(accounts, amount)
        }
        VaultInstruction::Withdraw => {
            msg!("Instruction: Withdraw");
            let amount = read_u64(payload)?;
            instruction::withdraw::process_withdraw(accounts, amount)
        }
        VaultInstruction::UpdateInterestRate => {
            msg!("Instruction: UpdateInterestRate");
            let interest_rate = read_i16(payload)?;
            instruction::update_interest_rate::process_update_interest_rate(accounts, interest_rate)
        }
    }
}
