use pinocchio::program_error::ProgramError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookError {
    /// Execute was called outside of a Token-2022 transfer
    NotTransferring,
    /// Source owner has no whitelist entry for the mint
    NotWhitelisted,
    /// Signer is not the mint authority
    Unauthorized,
    /// Validation account is not the mint's extra-account-metas PDA
    InvalidExtraAccountMetaList,
}

impl HookError {
    pub const fn code(self) -> u32 {
        match self {
            HookError::NotTransferring => 0,
            HookError::NotWhitelisted => 1,
            HookError::Unauthorized => 2,
            HookError::InvalidExtraAccountMetaList => 3,
        }
    }
}

impl From<HookError> for ProgramError {
    fn from(err: HookError) -> Self {
        ProgramError::Custom(err.code())
    }
}
