use serde::Serialize;
use solana_pubkey::Pubkey;

use crate::bind::BoundAccounts;
use crate::error::Error;
use crate::payload::{DecodedPayload, Field, FieldType, FieldValue};
use crate::programs::{InstructionVariant, Program, unexpected_shape};
use crate::registry::{DiscriminantWidth, InstructionSpec, ProgramSchema};

/// Order book side, tag byte 0 = bid, 1 = ask. Any other byte is a
/// decode failure, never a silent default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Bid),
            1 => Some(Self::Ask),
            _ => None,
        }
    }
}

/// Accounts shared by the order-cancellation instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderAccounts {
    pub market: Pubkey,
    pub open_orders: Pubkey,
    pub open_orders_owner: Pubkey,
    pub request_queue: Pubkey,
    /// Trailing accounts beyond the declared roles.
    pub additional: Vec<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrder {
    pub accounts: CancelOrderAccounts,
    pub data: CancelOrderData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelOrderData {
    pub side: Side,
    pub open_orders_slot: u8,
    pub order_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderByClientId {
    pub accounts: CancelOrderAccounts,
    pub data: CancelOrderByClientIdData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelOrderByClientIdData {
    pub client_id: u64,
}

const CANCEL_ORDER_ROLES: &[&str] = &[
    "market",
    "open_orders",
    "open_orders_owner",
    "request_queue",
];

const CANCEL_ORDER_LAYOUT: &[Field] = &[
    Field {
        name: "side",
        ty: FieldType::Side,
    },
    Field {
        name: "open_orders_slot",
        ty: FieldType::U8,
    },
    Field {
        name: "order_id",
        ty: FieldType::U64,
    },
];

const CANCEL_ORDER_BY_CLIENT_ID_LAYOUT: &[Field] = &[Field {
    name: "client_id",
    ty: FieldType::U64,
}];

pub static SCHEMA: ProgramSchema = ProgramSchema {
    program: Program::SerumDex,
    discriminant_width: DiscriminantWidth::U8,
    instructions: &[
        InstructionSpec {
            name: "cancel_order",
            opcode: 4,
            roles: CANCEL_ORDER_ROLES,
            layout: CANCEL_ORDER_LAYOUT,
            exact_payload: false,
            assemble: assemble_cancel_order,
        },
        InstructionSpec {
            name: "cancel_order_by_client_id",
            opcode: 6,
            roles: CANCEL_ORDER_ROLES,
            layout: CANCEL_ORDER_BY_CLIENT_ID_LAYOUT,
            exact_payload: false,
            assemble: assemble_cancel_order_by_client_id,
        },
    ],
};

fn cancel_order_accounts(bound: &BoundAccounts) -> Result<CancelOrderAccounts, Error> {
    let [
        ("market", market),
        ("open_orders", open_orders),
        ("open_orders_owner", open_orders_owner),
        ("request_queue", request_queue),
    ] = bound.named()
    else {
        return Err(Error::InsufficientAccounts {
            required: CANCEL_ORDER_ROLES.len(),
            provided: bound.named().len(),
        });
    };
    Ok(CancelOrderAccounts {
        market: *market,
        open_orders: *open_orders,
        open_orders_owner: *open_orders_owner,
        request_queue: *request_queue,
        additional: bound.additional().to_vec(),
    })
}

fn assemble_cancel_order(
    bound: &BoundAccounts,
    payload: &DecodedPayload,
) -> Result<InstructionVariant, Error> {
    let accounts = cancel_order_accounts(bound)?;
    let [
        ("side", FieldValue::Side(side)),
        ("open_orders_slot", FieldValue::U8(open_orders_slot)),
        ("order_id", FieldValue::U64(order_id)),
    ] = payload.fields()
    else {
        return Err(unexpected_shape("cancel_order", payload.fields()));
    };
    Ok(InstructionVariant::SerumCancelOrder(CancelOrder {
        accounts,
        data: CancelOrderData {
            side: *side,
            open_orders_slot: *open_orders_slot,
            order_id: *order_id,
        },
    }))
}

fn assemble_cancel_order_by_client_id(
    bound: &BoundAccounts,
    payload: &DecodedPayload,
) -> Result<InstructionVariant, Error> {
    let accounts = cancel_order_accounts(bound)?;
    let [("client_id", FieldValue::U64(client_id))] = payload.fields() else {
        return Err(unexpected_shape("cancel_order_by_client_id", payload.fields()));
    };
    Ok(InstructionVariant::SerumCancelOrderByClientId(
        CancelOrderByClientId {
            accounts,
            data: CancelOrderByClientIdData {
                client_id: *client_id,
            },
        },
    ))
}
