use pinocchio::pubkey::Pubkey;

pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";
pub const WHITELIST_SEED: &[u8] = b"whitelist";

pub const TOKEN_2022_PROGRAM_ID: Pubkey =
    pinocchio_pubkey::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

// Transfer-hook interface discriminators: first 8 bytes of
// sha256("spl-transfer-hook-interface:<name>")
pub const EXECUTE_DISCRIMINATOR: [u8; 8] = [105, 37, 101, 197, 75, 251, 102, 26];
pub const INITIALIZE_EXTRA_ACCOUNT_META_LIST_DISCRIMINATOR: [u8; 8] =
    [43, 34, 13, 49, 167, 88, 235, 235];

// Whitelist administration tags (single-byte payloads)
pub const ADD_TO_WHITELIST: u8 = 0;
pub const REMOVE_FROM_WHITELIST: u8 = 1;

// Token-2022 token account layout
pub const TOKEN_ACCOUNT_BASE_LEN: usize = 165;
pub const ACCOUNT_TYPE_ACCOUNT: u8 = 2;
pub const EXTENSION_TYPE_TRANSFER_HOOK_ACCOUNT: u16 = 15;
