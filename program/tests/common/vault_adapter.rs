use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use interest_bearing_vault::helpers::{
    EXTRA_ACCOUNT_METAS_SEED, VAULT_REGISTRY_SEED, VAULT_SEED, WHITELIST_SEED,
};

use super::{program_id, token_2022_id};

pub const BASE_MINT_LEN: usize = 82;
pub const TOKEN_ACCOUNT_LEN: usize = 165;

pub fn associated_token_program_id() -> Pubkey {
    Pubkey::new_from_array(interest_bearing_vault::helpers::ASSOCIATED_TOKEN_PROGRAM_ID)
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

pub fn vault_address(authority: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_SEED, authority.as_ref()], &program_id()).0
}

pub fn registry_address(vault: &Pubkey, depositor: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[VAULT_REGISTRY_SEED, vault.as_ref(), depositor.as_ref()],
        &program_id(),
    )
    .0
}

pub fn associated_token_address(wallet: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[wallet.as_ref(), token_program.as_ref(), mint.as_ref()],
        &associated_token_program_id(),
    )
    .0
}

/// Hook accounts as the whitelist hook program derives them.
pub fn hook_account_metas(hook_program: &Pubkey, mint: &Pubkey, owner: &Pubkey) -> Vec<AccountMeta> {
    let meta_list =
        Pubkey::find_program_address(&[EXTRA_ACCOUNT_METAS_SEED, mint.as_ref()], hook_program).0;
    let whitelist = Pubkey::find_program_address(
        &[WHITELIST_SEED, mint.as_ref(), owner.as_ref()],
        hook_program,
    )
    .0;
    vec![
        AccountMeta::new_readonly(meta_list, false),
        AccountMeta::new_readonly(whitelist, false),
        AccountMeta::new_readonly(*hook_program, false),
    ]
}

// ---------------------------------------------------------------------------
// Vault program instructions
// ---------------------------------------------------------------------------

pub fn create_mint_with_extensions(
    user: &Pubkey,
    mint: &Pubkey,
    interest_rate: i16,
    hook_program: Option<&Pubkey>,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*user, true),
        AccountMeta::new(*mint, true),
        AccountMeta::new_readonly(token_2022_id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    if let Some(hook_program) = hook_program {
        accounts.push(AccountMeta::new_readonly(*hook_program, false));
    }
    let mut data = vec![0u8];
    data.extend_from_slice(&interest_rate.to_le_bytes());
    Instruction { program_id: program_id(), accounts, data }
}

pub fn initialize_vault(authority: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Instruction {
    let vault = vault_address(authority);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(associated_token_address(&vault, mint, token_program), false),
            AccountMeta::new_readonly(associated_token_program_id(), false),
            AccountMeta::new_readonly(*token_program, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: vec![1],
    }
}

pub fn deposit(
    depositor: &Pubkey,
    vault_authority: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
    amount: u64,
) -> Instruction {
    let vault = vault_address(vault_authority);
    let mut data = vec![2u8];
    data.extend_from_slice(&amount.to_le_bytes());
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new(vault, false),
            AccountMeta::new(registry_address(&vault, depositor), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(associated_token_address(depositor, mint, token_program), false),
            AccountMeta::new(associated_token_address(&vault, mint, token_program), false),
            AccountMeta::new_readonly(*token_program, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

pub fn withdraw(
    withdrawer: &Pubkey,
    vault_authority: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
    amount: u64,
) -> Instruction {
    let vault = vault_address(vault_authority);
    let mut data = vec![3u8];
    data.extend_from_slice(&amount.to_le_bytes());
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(*withdrawer, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(associated_token_address(withdrawer, mint, token_program), false),
            AccountMeta::new(associated_token_address(&vault, mint, token_program), false),
            AccountMeta::new_readonly(*token_program, false),
        ],
        data,
    }
}

pub fn update_interest_rate(rate_authority: &Pubkey, mint: &Pubkey, interest_rate: i16) -> Instruction {
    let mut data = vec![4u8];
    data.extend_from_slice(&interest_rate.to_le_bytes());
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(*rate_authority, true),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(token_2022_id(), false),
        ],
        data,
    }
}

// ---------------------------------------------------------------------------
// Token / ATA program instructions used to set up fixtures
// ---------------------------------------------------------------------------

pub fn create_associated_token_account(
    funder: &Pubkey,
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: associated_token_program_id(),
        accounts: vec![
            AccountMeta::new(*funder, true),
            AccountMeta::new(associated_token_address(wallet, mint, token_program), false),
            AccountMeta::new_readonly(*wallet, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(*token_program, false),
        ],
        data: vec![0],
    }
}

pub fn initialize_mint2(
    token_program: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
) -> Instruction {
    let data = interest_bearing_vault::helpers::initialize_mint2_data(
        decimals,
        &authority.to_bytes(),
        &authority.to_bytes(),
    );
    Instruction {
        program_id: *token_program,
        accounts: vec![AccountMeta::new(*mint, false)],
        data: data.to_vec(),
    }
}

pub fn initialize_account3(
    token_program: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Instruction {
    // InitializeAccount3 = 18
    let mut data = vec![18u8];
    data.extend_from_slice(owner.as_ref());
    Instruction {
        program_id: *token_program,
        accounts: vec![AccountMeta::new(*account, false), AccountMeta::new_readonly(*mint, false)],
        data,
    }
}

pub fn mint_to(
    token_program: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Instruction {
    // MintTo = 7
    let mut data = vec![7u8];
    data.extend_from_slice(&amount.to_le_bytes());
    Instruction {
        program_id: *token_program,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data,
    }
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

pub fn token_account_amount(data: &[u8]) -> u64 {
    u64::from_le_bytes(data[64..72].try_into().unwrap())
}

pub fn token_account_owner(data: &[u8]) -> Pubkey {
    Pubkey::try_from(&data[32..64]).unwrap()
}

pub fn token_account_mint(data: &[u8]) -> Pubkey {
    Pubkey::try_from(&data[0..32]).unwrap()
}

/// Mint authority of a base mint (COption<Pubkey> at offset 0).
pub fn mint_authority(data: &[u8]) -> Option<Pubkey> {
    match data[0] {
        1 => Some(Pubkey::try_from(&data[4..36]).unwrap()),
        _ => None,
    }
}
