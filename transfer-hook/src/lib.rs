//! Transfer hook that only lets whitelisted owners move tokens of a mint.
//!
//! Token-2022 calls `Execute` on every `transfer_checked` of a mint whose
//! TransferHook extension points here. The extra account it forwards is the
//! source owner's whitelist entry, resolved from the mint's
//! `ExtraAccountMetaList`.

// Only go no_std when building for SBF.
#![cfg_attr(feature = "sbf", no_std)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

pub mod error;
pub mod helpers;
pub mod instruction;
pub mod state;

pinocchio_pubkey::declare_id!("6cAZiTnevHt88rM8WyzaMTaUXQ7vB2hXnpRZW65Jrg2Z");

#[cfg(feature = "sbf")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[cfg(feature = "sbf")]
pinocchio::no_allocator!();
