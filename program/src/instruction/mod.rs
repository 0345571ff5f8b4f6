use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod create_mint;
pub use create_mint::*;

pub mod initialize_vault;
pub use initialize_vault::*;

pub mod deposit;
pub use deposit::*;

pub mod withdraw;
pub use withdraw::*;

pub mod update_interest_rate;
pub use update_interest_rate::*;

/// Instruction data is one discriminator byte followed by the payload noted
/// on each variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ShankInstruction)]
pub enum VaultInstruction {
    /// Payload: interest rate in basis points (`i16`).
    #[account(0, writable, signer, name = "user", desc = "Payer, mint/freeze/rate/hook authority")]
    #[account(1, writable, signer, name = "mint", desc = "New mint account")]
    #[account(2, name = "token_program", desc = "Token-2022")]
    #[account(3, name = "system_program", desc = "System program")]
    #[account(4, optional, name = "hook_program", desc = "Transfer hook program")]
    CreateMintWithExtensions,

    /// No payload.
    #[account(0, writable, signer, name = "vault_authority", desc = "Vault creator and payer")]
    #[account(1, name = "mint", desc = "Mint held by the vault")]
    #[account(2, writable, name = "vault", desc = "Vault PDA")]
    #[account(3, writable, name = "token_reserve", desc = "Vault ATA")]
    #[account(4, name = "associated_token_program", desc = "Associated token program")]
    #[account(5, name = "token_program", desc = "Token program owning the mint")]
    #[account(6, name = "system_program", desc = "System program")]
    InitializeVault,

    /// Payload: amount (`u64`).
    #[account(0, writable, signer, name = "depositor", desc = "Depositor and payer")]
    #[account(1, writable, name = "vault", desc = "Vault PDA")]
    #[account(2, writable, name = "vault_registry_entry", desc = "Registry PDA of the depositor")]
    #[account(3, name = "mint", desc = "Vault mint")]
    #[account(4, writable, name = "depositor_token_account", desc = "Source token account")]
    #[account(5, writable, name = "vault_token_reserve", desc = "Vault ATA")]
    #[account(6, name = "token_program", desc = "Token program owning the mint")]
    #[account(7, name = "system_program", desc = "System program")]
    #[account(8, optional, name = "extra_account_meta_list", desc = "Hook validation account")]
    #[account(9, optional, writable, name = "depositor_whitelist", desc = "Hook whitelist PDA of the depositor")]
    #[account(10, optional, name = "transfer_hook_program", desc = "Transfer hook program")]
    Deposit,

    /// Payload: amount (`u64`).
    #[account(0, signer, name = "withdrawer", desc = "Vault authority")]
    #[account(1, writable, name = "vault", desc = "Vault PDA")]
    #[account(2, name = "mint", desc = "Vault mint")]
    #[account(3, writable, name = "withdrawer_token_account", desc = "Destination token account")]
    #[account(4, writable, name = "vault_token_reserve", desc = "Vault ATA")]
    #[account(5, name = "token_program", desc = "Token program owning the mint")]
    #[account(6, optional, name = "extra_account_meta_list", desc = "Hook validation account")]
    #[account(7, optional, name = "vault_whitelist", desc = "Hook whitelist PDA of the vault")]
    #[account(8, optional, name = "transfer_hook_program", desc = "Transfer hook program")]
    Withdraw,

    /// Payload: new interest rate in basis points (`i16`).
    #[account(0, signer, name = "rate_authority", desc = "Rate authority of the mint")]
    #[account(1, writable, name = "mint", desc = "Interest-bearing mint")]
    #[account(2, name = "token_program", desc = "Token-2022")]
    UpdateInterestRate,
}

impl TryFrom<&u8> for VaultInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(VaultInstruction::CreateMintWithExtensions),
            1 => Ok(VaultInstruction::InitializeVault),
            2 => Ok(VaultInstruction::Deposit),
            3 => Ok(VaultInstruction::Withdraw),
            4 => Ok(VaultInstruction::UpdateInterestRate),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
