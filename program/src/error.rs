use pinocchio::program_error::ProgramError;

// internal error enum, surfaced to clients as ProgramError::Custom(code)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultError {
    /// Amount must be greater than 0
    InvalidAmount,
    /// Not enough tokens tracked in the vault reserve
    InsufficientFunds,
    Overflow,
    Underflow,
    /// Only the vault authority can perform this action
    Unauthorized,
    /// Transfer-hook accounts missing, unexpected or not matching the mint
    InvalidExtraAccountMeta,
    /// Vault state does not match the accounts passed alongside it
    InvalidVault,
    /// Token account is not the associated token account of its owner and mint
    InvalidTokenAccount,
}

impl VaultError {
    pub const fn code(self) -> u32 {
        match self {
            VaultError::InvalidAmount => 0,
            VaultError::InsufficientFunds => 1,
            VaultError::Overflow => 2,
            VaultError::Underflow => 3,
            VaultError::Unauthorized => 4,
            VaultError::InvalidExtraAccountMeta => 5,
            VaultError::InvalidVault => 6,
            VaultError::InvalidTokenAccount => 7,
        }
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: VaultError) -> ProgramError {
    ProgramError::Custom(err.code())
}

impl From<VaultError> for ProgramError {
    fn from(err: VaultError) -> Self {
        to_program_error(err)
    }
}
