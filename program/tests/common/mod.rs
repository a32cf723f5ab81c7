use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::Transaction,
};

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("pinocchio_user_card.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.set_compute_max_units(1_000_000);
    pt.add_upgradeable_program_to_genesis("pinocchio_user_card", &program_id());
    pt
}

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_user_card::ID)
}

// Shared adapter for instruction building + state helpers
pub mod card_adapter;

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Sign with the payer plus `signers` and process; returns the transaction signature.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let msg = Message::new(ixs, Some(&ctx.payer.pubkey()));
    let mut tx = Transaction::new_unsigned(msg);
    let mut all: Vec<&Keypair> = Vec::with_capacity(signers.len() + 1);
    all.push(&ctx.payer);
    all.extend_from_slice(signers);
    tx.try_sign(&all, ctx.last_blockhash).unwrap();
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
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

/// Create `slot` owned by the program with `space` bytes and rent for that size.
pub async fn create_program_slot(ctx: &mut ProgramTestContext, slot: &Keypair, space: usize) {
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let ix = system_instruction::create_account(
        &ctx.payer.pubkey(),
        &slot.pubkey(),
        rent.minimum_balance(space),
        space as u64,
        &program_id(),
    );
    send(ctx, &[ix], &[slot]).await.unwrap();
}
