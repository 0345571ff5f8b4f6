pub mod vault;
pub mod vault_registry;

// Re-export the types so everyone can `use crate::state::{...}`.
pub use vault::Vault;
pub use vault_registry::VaultRegistryEntry;

/// First byte of every account this program owns.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountDiscriminator {
    Uninitialized = 0,
    Vault = 1,
    VaultRegistryEntry = 2,
}
