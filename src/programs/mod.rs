pub mod serum;
pub mod system;

use serde::Serialize;
use solana_pubkey::Pubkey;

use crate::error::Error;
use crate::payload::FieldValue;

pub const SERUM_DEX_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
pub const SYSTEM_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("11111111111111111111111111111111");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Program {
    SerumDex,
    System,
}

impl Program {
    pub fn from_program_id(program_id: &Pubkey) -> Option<Self> {
        match *program_id {
            SERUM_DEX_PROGRAM_ID => Some(Self::SerumDex),
            SYSTEM_PROGRAM_ID => Some(Self::System),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SerumDex => "serum_dex",
            Self::System => "system",
        }
    }

    pub fn all_program_ids() -> &'static [Pubkey] {
        &[SERUM_DEX_PROGRAM_ID, SYSTEM_PROGRAM_ID]
    }
}

/// Closed union over every instruction kind the registry can decode.
///
/// Renderers match on this exhaustively; a new kind added here is a
/// compile-time signal to every consumer rather than a runtime surprise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionVariant {
    SerumCancelOrder(serum::CancelOrder),
    SerumCancelOrderByClientId(serum::CancelOrderByClientId),
    SystemAdvanceNonce(system::AdvanceNonce),
    SystemWithdrawNonce(system::WithdrawNonce),
    SystemAuthorizeNonce(system::AuthorizeNonce),
}

impl InstructionVariant {
    /// Program the decoded instruction belongs to.
    pub fn program(&self) -> Program {
        match self {
            Self::SerumCancelOrder(_) | Self::SerumCancelOrderByClientId(_) => Program::SerumDex,
            Self::SystemAdvanceNonce(_)
            | Self::SystemWithdrawNonce(_)
            | Self::SystemAuthorizeNonce(_) => Program::System,
        }
    }
}

/// A decoded payload whose field shape does not match the instruction's
/// declared layout. Unreachable when assembly is driven by the same
/// `InstructionSpec` that decoded the payload.
pub(crate) fn unexpected_shape(
    instruction: &'static str,
    fields: &[(&'static str, FieldValue)],
) -> Error {
    Error::MalformedPayload {
        reason: format!("unexpected field shape for {instruction}: {fields:?}"),
    }
}
