use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

pub const WHITELIST_ENTRY_DISCRIMINATOR: u8 = 1;

/// PDA at `["whitelist", mint, address]`; its existence lets `address` send
/// tokens of `mint`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitelistEntry {
    pub discriminator: u8,
    pub address: Pubkey,
    pub mint: Pubkey,
    pub bump: u8,
}

impl WhitelistEntry {
    pub const LEN: usize = core::mem::size_of::<WhitelistEntry>();

    pub fn new(address: Pubkey, mint: Pubkey, bump: u8) -> Self {
        Self {
            discriminator: WHITELIST_ENTRY_DISCRIMINATOR,
            address,
            mint,
            bump,
        }
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != WHITELIST_ENTRY_DISCRIMINATOR {
            return Err(ProgramError::UninitializedAccount);
        }
        // SAFETY: length checked above; WhitelistEntry is repr(C) with alignment 1.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    /// Writes `entry`, replacing whatever the account held.
    pub fn store(data: &mut [u8], entry: WhitelistEntry) -> Result<(), ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: as in `load`.
        unsafe { *(data.as_mut_ptr() as *mut Self) = entry };
        Ok(())
    }
}
