#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use std::str::FromStr;

use ix_classifier::{
    Classification, Error, InstructionVariant, Program, RawInstruction, Side,
    UnrecognizedReason, classify, to_canonical_address_text, to_decimal_string,
};
use solana_pubkey::Pubkey;

#[derive(serde::Deserialize)]
struct InstructionFixture {
    name: String,
    program_id: String,
    accounts: Vec<String>,
    data: Vec<u8>,
}

fn load_fixtures() -> Vec<InstructionFixture> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/instructions.json");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

fn raw_instruction(name: &str) -> RawInstruction {
    let fixture = load_fixtures()
        .into_iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("missing fixture {name}"));
    RawInstruction {
        program_id: Pubkey::from_str(&fixture.program_id).unwrap(),
        accounts: fixture
            .accounts
            .iter()
            .map(|a| Pubkey::from_str(a).unwrap())
            .collect(),
        data: fixture.data,
    }
}

fn decoded(name: &str) -> InstructionVariant {
    match classify(&raw_instruction(name)) {
        Ok(Classification::Decoded(variant)) => variant,
        other => panic!("expected decoded variant for {name}, got {other:?}"),
    }
}

#[test]
fn serum_cancel_order_binds_all_roles_and_fields() {
    let raw = raw_instruction("serum_cancel_order_bid");
    let InstructionVariant::SerumCancelOrder(cancel) = decoded("serum_cancel_order_bid") else {
        panic!("expected SerumCancelOrder");
    };

    assert_eq!(cancel.data.side, Side::Bid);
    assert_eq!(cancel.data.open_orders_slot, 5);
    assert_eq!(to_decimal_string(cancel.data.order_id), "42");

    assert_eq!(cancel.accounts.market, raw.accounts[0]);
    assert_eq!(cancel.accounts.open_orders, raw.accounts[1]);
    assert_eq!(cancel.accounts.open_orders_owner, raw.accounts[2]);
    assert_eq!(cancel.accounts.request_queue, raw.accounts[3]);
    assert!(cancel.accounts.additional.is_empty());

    assert_eq!(
        to_canonical_address_text(&cancel.accounts.market),
        "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
    );
}

#[test]
fn serum_cancel_order_ask_with_max_order_id() {
    let InstructionVariant::SerumCancelOrder(cancel) =
        decoded("serum_cancel_order_ask_extra_account")
    else {
        panic!("expected SerumCancelOrder");
    };
    assert_eq!(cancel.data.side, Side::Ask);
    assert_eq!(cancel.data.order_id, u64::MAX);
    assert_eq!(
        to_decimal_string(cancel.data.order_id),
        "18446744073709551615"
    );
    // Trailing fifth account preserved, not rejected.
    assert_eq!(
        to_canonical_address_text(&cancel.accounts.additional[0]),
        "Stake11111111111111111111111111111111111111"
    );
}

#[test]
fn serum_cancel_order_by_client_id_decodes() {
    let InstructionVariant::SerumCancelOrderByClientId(cancel) =
        decoded("serum_cancel_order_by_client_id")
    else {
        panic!("expected SerumCancelOrderByClientId");
    };
    assert_eq!(cancel.data.client_id, 7777);
}

#[test]
fn serum_unknown_opcode_is_unrecognized_with_raw_triple() {
    let raw = raw_instruction("serum_unknown_opcode");
    let Classification::Unrecognized(unrecognized) = classify(&raw).unwrap() else {
        panic!("expected Unrecognized");
    };
    assert_eq!(
        unrecognized.reason,
        UnrecognizedReason::UnknownOpcode {
            program: Program::SerumDex,
            opcode: 0xFF,
        }
    );
    assert_eq!(unrecognized.raw, raw);
}

#[test]
fn system_nonce_family_decodes() {
    let raw = raw_instruction("system_advance_nonce");
    let InstructionVariant::SystemAdvanceNonce(advance) = decoded("system_advance_nonce") else {
        panic!("expected SystemAdvanceNonce");
    };
    assert_eq!(advance.accounts.nonce_account, raw.accounts[0]);
    assert_eq!(advance.accounts.recent_blockhashes, raw.accounts[1]);
    assert_eq!(advance.accounts.nonce_authority, raw.accounts[2]);

    let InstructionVariant::SystemWithdrawNonce(withdraw) = decoded("system_withdraw_nonce")
    else {
        panic!("expected SystemWithdrawNonce");
    };
    assert_eq!(withdraw.data.lamports, 1_500_000_000);
    assert_eq!(
        to_canonical_address_text(&withdraw.accounts.recipient),
        "So11111111111111111111111111111111111111112"
    );

    let InstructionVariant::SystemAuthorizeNonce(authorize) = decoded("system_authorize_nonce")
    else {
        panic!("expected SystemAuthorizeNonce");
    };
    assert_eq!(
        authorize.data.new_authorized,
        Pubkey::new_from_array([9u8; 32])
    );
    assert_eq!(
        to_canonical_address_text(&authorize.accounts.nonce_account),
        "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T"
    );
}

#[test]
fn truncated_discriminant_is_a_typed_failure() {
    let raw = raw_instruction("system_truncated_discriminant");
    assert_eq!(
        classify(&raw),
        Err(Error::TruncatedPayload {
            expected: 4,
            available: 2,
        })
    );
}

#[test]
fn unknown_program_is_unrecognized() {
    let raw = raw_instruction("unknown_program");
    let Classification::Unrecognized(unrecognized) = classify(&raw).unwrap() else {
        panic!("expected Unrecognized");
    };
    assert_eq!(unrecognized.reason, UnrecognizedReason::UnknownProgram);
    assert_eq!(unrecognized.raw, raw);
}

#[test]
fn every_fixture_classifies_deterministically() {
    for fixture in load_fixtures() {
        let raw = raw_instruction(&fixture.name);
        let first = classify(&raw);
        let second = classify(&raw);
        assert_eq!(first, second, "non-deterministic result for {}", fixture.name);
    }
}
