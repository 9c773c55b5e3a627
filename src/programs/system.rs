//! System program nonce instruction family.
//!
//! Opcodes are the System program's 4-byte little-endian discriminants:
//! AdvanceNonceAccount = 4, WithdrawNonceAccount = 5,
//! AuthorizeNonceAccount = 7.

use solana_pubkey::Pubkey;

use crate::bind::BoundAccounts;
use crate::error::Error;
use crate::payload::{DecodedPayload, Field, FieldType, FieldValue};
use crate::programs::{InstructionVariant, Program, unexpected_shape};
use crate::registry::{DiscriminantWidth, InstructionSpec, ProgramSchema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceNonceAccounts {
    pub nonce_account: Pubkey,
    pub recent_blockhashes: Pubkey,
    pub nonce_authority: Pubkey,
    pub additional: Vec<Pubkey>,
}

/// Advance carries no payload fields beyond the discriminant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceNonce {
    pub accounts: AdvanceNonceAccounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawNonceAccounts {
    pub nonce_account: Pubkey,
    pub recipient: Pubkey,
    pub recent_blockhashes: Pubkey,
    pub rent_sysvar: Pubkey,
    pub nonce_authority: Pubkey,
    pub additional: Vec<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawNonce {
    pub accounts: WithdrawNonceAccounts,
    pub data: WithdrawNonceData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawNonceData {
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeNonceAccounts {
    pub nonce_account: Pubkey,
    pub nonce_authority: Pubkey,
    pub additional: Vec<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeNonce {
    pub accounts: AuthorizeNonceAccounts,
    pub data: AuthorizeNonceData,
}

/// The new authority is the one identifier in scope that arrives through
/// the payload rather than the account list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizeNonceData {
    pub new_authorized: Pubkey,
}

const ADVANCE_NONCE_ROLES: &[&str] = &["nonce_account", "recent_blockhashes", "nonce_authority"];

const WITHDRAW_NONCE_ROLES: &[&str] = &[
    "nonce_account",
    "recipient",
    "recent_blockhashes",
    "rent_sysvar",
    "nonce_authority",
];

const AUTHORIZE_NONCE_ROLES: &[&str] = &["nonce_account", "nonce_authority"];

const ADVANCE_NONCE_LAYOUT: &[Field] = &[];

const WITHDRAW_NONCE_LAYOUT: &[Field] = &[Field {
    name: "lamports",
    ty: FieldType::U64,
}];

const AUTHORIZE_NONCE_LAYOUT: &[Field] = &[Field {
    name: "new_authorized",
    ty: FieldType::Pubkey,
}];

pub static SCHEMA: ProgramSchema = ProgramSchema {
    program: Program::System,
    discriminant_width: DiscriminantWidth::U32,
    instructions: &[
        InstructionSpec {
            name: "advance_nonce",
            opcode: 4,
            roles: ADVANCE_NONCE_ROLES,
            layout: ADVANCE_NONCE_LAYOUT,
            exact_payload: false,
            assemble: assemble_advance_nonce,
        },
        InstructionSpec {
            name: "withdraw_nonce",
            opcode: 5,
            roles: WITHDRAW_NONCE_ROLES,
            layout: WITHDRAW_NONCE_LAYOUT,
            exact_payload: false,
            assemble: assemble_withdraw_nonce,
        },
        InstructionSpec {
            name: "authorize_nonce",
            opcode: 7,
            roles: AUTHORIZE_NONCE_ROLES,
            layout: AUTHORIZE_NONCE_LAYOUT,
            exact_payload: false,
            assemble: assemble_authorize_nonce,
        },
    ],
};

fn assemble_advance_nonce(
    bound: &BoundAccounts,
    _payload: &DecodedPayload,
) -> Result<InstructionVariant, Error> {
    let [
        ("nonce_account", nonce_account),
        ("recent_blockhashes", recent_blockhashes),
        ("nonce_authority", nonce_authority),
    ] = bound.named()
    else {
        return Err(Error::InsufficientAccounts {
            required: ADVANCE_NONCE_ROLES.len(),
            provided: bound.named().len(),
        });
    };
    Ok(InstructionVariant::SystemAdvanceNonce(AdvanceNonce {
        accounts: AdvanceNonceAccounts {
            nonce_account: *nonce_account,
            recent_blockhashes: *recent_blockhashes,
            nonce_authority: *nonce_authority,
            additional: bound.additional().to_vec(),
        },
    }))
}

fn assemble_withdraw_nonce(
    bound: &BoundAccounts,
    payload: &DecodedPayload,
) -> Result<InstructionVariant, Error> {
    let [
        ("nonce_account", nonce_account),
        ("recipient", recipient),
        ("recent_blockhashes", recent_blockhashes),
        ("rent_sysvar", rent_sysvar),
        ("nonce_authority", nonce_authority),
    ] = bound.named()
    else {
        return Err(Error::InsufficientAccounts {
            required: WITHDRAW_NONCE_ROLES.len(),
            provided: bound.named().len(),
        });
    };
    let [("lamports", FieldValue::U64(lamports))] = payload.fields() else {
        return Err(unexpected_shape("withdraw_nonce", payload.fields()));
    };
    Ok(InstructionVariant::SystemWithdrawNonce(WithdrawNonce {
        accounts: WithdrawNonceAccounts {
            nonce_account: *nonce_account,
            recipient: *recipient,
            recent_blockhashes: *recent_blockhashes,
            rent_sysvar: *rent_sysvar,
            nonce_authority: *nonce_authority,
            additional: bound.additional().to_vec(),
        },
        data: WithdrawNonceData {
            lamports: *lamports,
        },
    }))
}

fn assemble_authorize_nonce(
    bound: &BoundAccounts,
    payload: &DecodedPayload,
) -> Result<InstructionVariant, Error> {
    let [
        ("nonce_account", nonce_account),
        ("nonce_authority", nonce_authority),
    ] = bound.named()
    else {
        return Err(Error::InsufficientAccounts {
            required: AUTHORIZE_NONCE_ROLES.len(),
            provided: bound.named().len(),
        });
    };
    let [("new_authorized", FieldValue::Pubkey(new_authorized))] = payload.fields() else {
        return Err(unexpected_shape("authorize_nonce", payload.fields()));
    };
    Ok(InstructionVariant::SystemAuthorizeNonce(AuthorizeNonce {
        accounts: AuthorizeNonceAccounts {
            nonce_account: *nonce_account,
            nonce_authority: *nonce_authority,
            additional: bound.additional().to_vec(),
        },
        data: AuthorizeNonceData {
            new_authorized: *new_authorized,
        },
    }))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::bind::bind;
    use crate::payload::decode;

    #[test]
    fn authorize_nonce_reads_new_authority_from_payload() {
        let accounts: Vec<Pubkey> = (0..2).map(|_| Pubkey::new_unique()).collect();
        let new_authorized = Pubkey::new_unique();

        let bound = bind(&accounts, AUTHORIZE_NONCE_ROLES).unwrap();
        let payload = decode(new_authorized.as_ref(), AUTHORIZE_NONCE_LAYOUT, false).unwrap();

        let variant = assemble_authorize_nonce(&bound, &payload).unwrap();
        let InstructionVariant::SystemAuthorizeNonce(authorize) = variant else {
            panic!("expected SystemAuthorizeNonce");
        };
        assert_eq!(authorize.accounts.nonce_account, accounts[0]);
        assert_eq!(authorize.accounts.nonce_authority, accounts[1]);
        assert_eq!(authorize.data.new_authorized, new_authorized);
    }

    #[test]
    fn advance_nonce_accepts_empty_payload() {
        let accounts: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let bound = bind(&accounts, ADVANCE_NONCE_ROLES).unwrap();
        let payload = decode(&[], ADVANCE_NONCE_LAYOUT, false).unwrap();

        let variant = assemble_advance_nonce(&bound, &payload).unwrap();
        let InstructionVariant::SystemAdvanceNonce(advance) = variant else {
            panic!("expected SystemAdvanceNonce");
        };
        assert_eq!(advance.accounts.nonce_authority, accounts[2]);
    }

    #[test]
    fn withdraw_nonce_decodes_lamports() {
        let accounts: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        let bound = bind(&accounts, WITHDRAW_NONCE_ROLES).unwrap();
        let payload = decode(
            &1_000_000_000u64.to_le_bytes(),
            WITHDRAW_NONCE_LAYOUT,
            false,
        )
        .unwrap();

        let variant = assemble_withdraw_nonce(&bound, &payload).unwrap();
        let InstructionVariant::SystemWithdrawNonce(withdraw) = variant else {
            panic!("expected SystemWithdrawNonce");
        };
        assert_eq!(withdraw.data.lamports, 1_000_000_000);
        assert_eq!(withdraw.accounts.recipient, accounts[1]);
    }
}
