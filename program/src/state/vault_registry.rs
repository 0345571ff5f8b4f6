use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::state::AccountDiscriminator;

/// One entry per (vault, depositor), stored at PDA
/// `["vault_registry", vault, depositor]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ShankAccount)]
pub struct VaultRegistryEntry {
    pub discriminator: u8,
    pub user: Pubkey,
    pub user_ata: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub token_balance: [u8; 8],
    pub num_deposits: [u8; 8],
    pub num_withdraws: [u8; 8],
    pub bump: u8,
}

impl VaultRegistryEntry {
    pub const LEN: usize = core::mem::size_of::<VaultRegistryEntry>();

    pub fn new(user: Pubkey, user_ata: Pubkey, vault: Pubkey, mint: Pubkey, bump: u8) -> Self {
        Self {
            discriminator: AccountDiscriminator::VaultRegistryEntry as u8,
            user,
            user_ata,
            vault,
            mint,
            token_balance: [0; 8],
            num_deposits: [0; 8],
            num_withdraws: [0; 8],
            bump,
        }
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::VaultRegistryEntry as u8 {
            return Err(ProgramError::UninitializedAccount);
        }
        // SAFETY: length checked above; VaultRegistryEntry is repr(C) with alignment 1.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::VaultRegistryEntry as u8 {
            return Err(ProgramError::UninitializedAccount);
        }
        // SAFETY: length checked above; VaultRegistryEntry is repr(C) with alignment 1.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    pub fn init(data: &mut [u8], entry: VaultRegistryEntry) -> Result<(), ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::Uninitialized as u8 {
            return Err(ProgramError::AccountAlreadyInitialized);
        }
        // SAFETY: as in `load_mut`.
        unsafe { *(data.as_mut_ptr() as *mut Self) = entry };
        Ok(())
    }

    #[inline]
    pub fn token_balance(&self) -> u64 {
        u64::from_le_bytes(self.token_balance)
    }

    #[inline]
    pub fn num_deposits(&self) -> u64 {
        u64::from_le_bytes(self.num_deposits)
    }

    #[inline]
    pub fn num_withdraws(&self) -> u64 {
        u64::from_le_bytes(self.num_withdraws)
    }

    /// Records one deposit of `amount`.
    pub fn record_deposit(&mut self, amount: u64) -> Result<(), ProgramError> {
        let balance = crate::helpers::checked_add(self.token_balance(), amount)?;
        let deposits = crate::helpers::checked_add(self.num_deposits(), 1)?;
        self.token_balance = balance.to_le_bytes();
        self.num_deposits = deposits.to_le_bytes();
        Ok(())
    }
}
