use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::state::AccountDiscriminator;

/// Per-authority vault, stored at PDA `["vault", vault_authority]`.
///
/// Integers are kept as little-endian byte arrays so the struct has
/// alignment 1 and can be cast straight over account data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ShankAccount)]
pub struct Vault {
    pub discriminator: u8,
    pub vault_authority: Pubkey,
    pub mint: Pubkey,
    /// ATA of (vault, mint, token program) holding the deposits
    pub token_reserve: Pubkey,
    pub token_reserve_amount: [u8; 8],
    pub num_depositors: [u8; 8],
    pub bump: u8,
}

impl Vault {
    pub const LEN: usize = core::mem::size_of::<Vault>();

    pub fn new(vault_authority: Pubkey, mint: Pubkey, token_reserve: Pubkey, bump: u8) -> Self {
        Self {
            discriminator: AccountDiscriminator::Vault as u8,
            vault_authority,
            mint,
            token_reserve,
            token_reserve_amount: 0u64.to_le_bytes(),
            num_depositors: 0u64.to_le_bytes(),
            bump,
        }
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::Vault as u8 {
            return Err(ProgramError::UninitializedAccount);
        }
        // SAFETY: length checked above; Vault is repr(C) with alignment 1.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::Vault as u8 {
            return Err(ProgramError::UninitializedAccount);
        }
        // SAFETY: length checked above; Vault is repr(C) with alignment 1.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    /// Writes a fresh vault over zeroed account data.
    pub fn init(data: &mut [u8], vault: Vault) -> Result<(), ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::Uninitialized as u8 {
            return Err(ProgramError::AccountAlreadyInitialized);
        }
        // SAFETY: as in `load_mut`.
        unsafe { *(data.as_mut_ptr() as *mut Self) = vault };
        Ok(())
    }

    #[inline]
    pub fn token_reserve_amount(&self) -> u64 {
        u64::from_le_bytes(self.token_reserve_amount)
    }

    #[inline]
    pub fn set_token_reserve_amount(&mut self, amount: u64) {
        self.token_reserve_amount = amount.to_le_bytes();
    }

    #[inline]
    pub fn num_depositors(&self) -> u64 {
        u64::from_le_bytes(self.num_depositors)
    }

    #[inline]
    pub fn set_num_depositors(&mut self, count: u64) {
        self.num_depositors = count.to_le_bytes();
    }
}
