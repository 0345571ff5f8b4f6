use pinocchio::pubkey::Pubkey;

pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_REGISTRY_SEED: &[u8] = b"vault_registry";

// Seeds owned by the transfer-hook program; the vault only re-derives them
// to check the accounts it forwards to Token-2022.
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";
pub const WHITELIST_SEED: &[u8] = b"whitelist";

/// Decimals of every mint created through `CreateMintWithExtensions`.
pub const MINT_DECIMALS: u8 = 9;

pub const TOKEN_2022_PROGRAM_ID: Pubkey =
    pinocchio_pubkey::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = pinocchio_associated_token_account::ID;

// Token-2022 instruction tags
pub const TRANSFER_CHECKED: u8 = 12;
pub const INITIALIZE_MINT_2: u8 = 20;
pub const INTEREST_BEARING_MINT_EXTENSION: u8 = 33;
pub const TRANSFER_HOOK_EXTENSION: u8 = 36;

// Sub-instructions shared by both extensions
pub const EXTENSION_INITIALIZE: u8 = 0;
pub const INTEREST_BEARING_UPDATE_RATE: u8 = 1;

// Token-2022 account layout
pub const ACCOUNT_TYPE_MINT: u8 = 1;
pub const EXTENSION_TYPE_INTEREST_BEARING_CONFIG: u16 = 10;
pub const EXTENSION_TYPE_TRANSFER_HOOK: u16 = 14;
/// rate_authority(32) + initialization_timestamp(8) + pre_update_average_rate(2)
/// + last_update_timestamp(8) + current_rate(2)
pub const INTEREST_BEARING_CONFIG_LEN: usize = 52;
/// authority(32) + program_id(32)
pub const TRANSFER_HOOK_LEN: usize = 64;
/// type(2) + length(2)
pub const TLV_HEADER_LEN: usize = 4;
