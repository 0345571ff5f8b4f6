//! The `ExtraAccountMetaList` this hook publishes for `Execute`.
//!
//! Layout: a single TLV entry keyed by the Execute discriminator
//! (`[u8; 8]` type, `u32` length) whose value is a `u32` count followed by
//! 35-byte `ExtraAccountMeta` records.

use crate::helpers::constant::*;

/// discriminator(1) + address_config(32) + is_signer(1) + is_writable(1)
pub const EXTRA_ACCOUNT_META_LEN: usize = 35;

/// One extra account: the source owner's whitelist entry.
pub const EXTRA_ACCOUNT_META_COUNT: usize = 1;

pub const EXTRA_ACCOUNT_META_LIST_LEN: usize =
    8 + 4 + 4 + EXTRA_ACCOUNT_META_COUNT * EXTRA_ACCOUNT_META_LEN;

// ExtraAccountMeta discriminator for a PDA of the hook program
const PDA_OF_HOOK_PROGRAM: u8 = 1;
// Seed encodings inside `address_config`
const SEED_LITERAL: u8 = 1;
const SEED_ACCOUNT_KEY: u8 = 3;

// Execute account indices
pub const EXECUTE_MINT_INDEX: u8 = 1;
pub const EXECUTE_OWNER_INDEX: u8 = 3;

/// Seeds `["whitelist", mint, owner]`, resolved by Token-2022 from the
/// Execute accounts.
pub fn whitelist_address_config() -> [u8; 32] {
    let mut config = [0u8; 32];
    let mut cursor = 0;

    config[cursor] = SEED_LITERAL;
    config[cursor + 1] = WHITELIST_SEED.len() as u8;
    cursor += 2;
    config[cursor..cursor + WHITELIST_SEED.len()].copy_from_slice(WHITELIST_SEED);
    cursor += WHITELIST_SEED.len();

    config[cursor] = SEED_ACCOUNT_KEY;
    config[cursor + 1] = EXECUTE_MINT_INDEX;
    cursor += 2;

    config[cursor] = SEED_ACCOUNT_KEY;
    config[cursor + 1] = EXECUTE_OWNER_INDEX;

    config
}

pub fn extra_account_meta_list_data() -> [u8; EXTRA_ACCOUNT_META_LIST_LEN] {
    let mut data = [0u8; EXTRA_ACCOUNT_META_LIST_LEN];
    let value_len = (4 + EXTRA_ACCOUNT_META_COUNT * EXTRA_ACCOUNT_META_LEN) as u32;

    data[..8].copy_from_slice(&EXECUTE_DISCRIMINATOR);
    data[8..12].copy_from_slice(&value_len.to_le_bytes());
    data[12..16].copy_from_slice(&(EXTRA_ACCOUNT_META_COUNT as u32).to_le_bytes());

    let meta = &mut data[16..16 + EXTRA_ACCOUNT_META_LEN];
    meta[0] = PDA_OF_HOOK_PROGRAM;
    meta[1..33].copy_from_slice(&whitelist_address_config());
    // read-only, not a signer
    meta[33] = 0;
    meta[34] = 0;

    data
}
