#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

pub mod vault_adapter;
use vault_adapter as ixn;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(interest_bearing_vault::ID)
}

pub fn token_2022_id() -> Pubkey {
    Pubkey::new_from_array(interest_bearing_vault::helpers::TOKEN_2022_PROGRAM_ID)
}

pub fn spl_token_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_token::ID)
}

pub fn hook_program_id() -> Pubkey {
    Pubkey::new_from_array(whitelist_transfer_hook::ID)
}

pub fn program_test() -> ProgramTest {
    // Workspace target dir sits one level above the program crate
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("interest_bearing_vault.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.set_compute_max_units(1_000_000);
    pt.add_upgradeable_program_to_genesis("interest_bearing_vault", &program_id());
    pt
}

/// Vault plus the whitelist transfer hook, both built into the workspace target.
pub fn program_test_with_hook() -> ProgramTest {
    let mut pt = program_test();
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    let so_path = Path::new(&deploy_dir).join("whitelist_transfer_hook.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path transfer-hook/Cargo.toml`",
        so_path.display()
    );
    pt.add_upgradeable_program_to_genesis("whitelist_transfer_hook", &hook_program_id());
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount)],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

/// Signs with the context payer (fee payer) plus `signers` and submits.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all_signers: Vec<&Keypair> = vec![&ctx.payer];
    all_signers.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &all_signers,
        ctx.last_blockhash,
    );
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub fn instruction_error(err: BanksClientError) -> InstructionError {
    match err.unwrap() {
        TransactionError::InstructionError(_, e) => e,
        other => panic!("expected an instruction error, got {:?}", other),
    }
}

pub fn custom_error(err: BanksClientError) -> u32 {
    match instruction_error(err) {
        InstructionError::Custom(code) => code,
        other => panic!("expected a custom error, got {:?}", other),
    }
}

pub async fn account_data(ctx: &mut ProgramTestContext, address: &Pubkey) -> Vec<u8> {
    ctx.banks_client
        .get_account(*address)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("account {} missing", address))
        .data
}

pub async fn token_balance(ctx: &mut ProgramTestContext, token_account: &Pubkey) -> u64 {
    ixn::token_account_amount(&account_data(ctx, token_account).await)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Interest-bearing Token-2022 mint with the payer as every authority.
pub async fn create_mint(
    ctx: &mut ProgramTestContext,
    interest_rate: i16,
    hook_program: Option<&Pubkey>,
) -> Pubkey {
    let mint = Keypair::new();
    let ix = ixn::create_mint_with_extensions(
        &ctx.payer.pubkey(),
        &mint.pubkey(),
        interest_rate,
        hook_program,
    );
    send(ctx, &[ix], &[&mint]).await.unwrap();
    mint.pubkey()
}

/// Extension-free mint owned by `token_program`, created without the vault.
pub async fn create_base_mint(ctx: &mut ProgramTestContext, token_program: &Pubkey) -> Pubkey {
    let mint = Keypair::new();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let space = ixn::BASE_MINT_LEN;
    let ixs = [
        system_instruction::create_account(
            &ctx.payer.pubkey(),
            &mint.pubkey(),
            rent.minimum_balance(space),
            space as u64,
            token_program,
        ),
        ixn::initialize_mint2(token_program, &mint.pubkey(), &ctx.payer.pubkey(), 6),
    ];
    send(ctx, &ixs, &[&mint]).await.unwrap();
    mint.pubkey()
}

pub struct VaultFixture {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub reserve: Pubkey,
    pub token_program: Pubkey,
}

/// Initializes a vault owned by the payer for `mint`.
pub async fn initialize_vault(
    ctx: &mut ProgramTestContext,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> VaultFixture {
    let authority = ctx.payer.pubkey();
    let ix = ixn::initialize_vault(&authority, mint, token_program);
    send(ctx, &[ix], &[]).await.unwrap();

    let vault = ixn::vault_address(&authority);
    VaultFixture {
        authority,
        mint: *mint,
        vault,
        reserve: ixn::associated_token_address(&vault, mint, token_program),
        token_program: *token_program,
    }
}

pub async fn setup_vault(ctx: &mut ProgramTestContext, interest_rate: i16) -> VaultFixture {
    let mint = create_mint(ctx, interest_rate, None).await;
    initialize_vault(ctx, &mint, &token_2022_id()).await
}

/// Vault over an extension-free mint of `token_program`.
pub async fn setup_base_vault(ctx: &mut ProgramTestContext, token_program: &Pubkey) -> VaultFixture {
    let mint = create_base_mint(ctx, token_program).await;
    initialize_vault(ctx, &mint, token_program).await
}

/// Vault over a mint whose transfer hook is the whitelist program, with the
/// hook's extra account metas in place. Nobody is whitelisted yet.
pub async fn setup_hooked_vault(ctx: &mut ProgramTestContext) -> VaultFixture {
    let hook_program = hook_program_id();
    let mint = create_mint(ctx, 500, Some(&hook_program)).await;
    let ix = hook_adapter::initialize_extra_account_meta_list(&ctx.payer.pubkey(), &mint);
    send(ctx, &[ix], &[]).await.unwrap();
    initialize_vault(ctx, &mint, &token_2022_id()).await
}

/// Whitelists `address` for the fixture mint; the payer is the mint authority.
pub async fn whitelist(ctx: &mut ProgramTestContext, fixture: &VaultFixture, address: &Pubkey) {
    let ix = hook_adapter::add_to_whitelist(&ctx.payer.pubkey(), address, &fixture.mint);
    send(ctx, &[ix], &[]).await.unwrap();
}

/// Funds a fresh depositor with SOL and `tokens` of the fixture mint.
/// Returns the depositor and its token account.
pub async fn funded_depositor(
    ctx: &mut ProgramTestContext,
    fixture: &VaultFixture,
    tokens: u64,
) -> (Keypair, Pubkey) {
    let depositor = Keypair::new();
    transfer(ctx, &depositor.pubkey(), 1_000_000_000).await;
    let ata = token_account_for(ctx, fixture, &depositor.pubkey(), tokens).await;
    (depositor, ata)
}

/// Creates the ATA of `owner` for the fixture mint and mints `tokens` into it.
pub async fn token_account_for(
    ctx: &mut ProgramTestContext,
    fixture: &VaultFixture,
    owner: &Pubkey,
    tokens: u64,
) -> Pubkey {
    let payer = ctx.payer.pubkey();
    let ata = ixn::associated_token_address(owner, &fixture.mint, &fixture.token_program);
    let mut ixs = vec![ixn::create_associated_token_account(
        &payer,
        owner,
        &fixture.mint,
        &fixture.token_program,
    )];
    if tokens > 0 {
        ixs.push(ixn::mint_to(&fixture.token_program, &fixture.mint, &ata, &payer, tokens));
    }
    send(ctx, &ixs, &[]).await.unwrap();
    ata
}

/// Token account of `owner` for the fixture mint at a fresh keypair address,
/// so not the owner's ATA.
pub async fn non_associated_token_account(
    ctx: &mut ProgramTestContext,
    fixture: &VaultFixture,
    owner: &Pubkey,
    tokens: u64,
) -> Pubkey {
    let account = Keypair::new();
    let payer = ctx.payer.pubkey();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let space = ixn::TOKEN_ACCOUNT_LEN;
    let mut ixs = vec![
        system_instruction::create_account(
            &payer,
            &account.pubkey(),
            rent.minimum_balance(space),
            space as u64,
            &fixture.token_program,
        ),
        ixn::initialize_account3(&fixture.token_program, &account.pubkey(), &fixture.mint, owner),
    ];
    if tokens > 0 {
        ixs.push(ixn::mint_to(
            &fixture.token_program,
            &fixture.mint,
            &account.pubkey(),
            &payer,
            tokens,
        ));
    }
    send(ctx, &ixs, &[&account]).await.unwrap();
    account.pubkey()
}
