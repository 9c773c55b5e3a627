#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod bind;
pub mod classify;
pub mod error;
pub mod format;
pub mod payload;
pub mod programs;
pub mod registry;
pub mod types;

pub use bind::{BoundAccounts, bind};
pub use classify::{Classification, UnrecognizedInstruction, UnrecognizedReason, classify};
pub use error::Error;
pub use format::{to_canonical_address_text, to_decimal_string};
pub use payload::{DecodedPayload, Field, FieldType, FieldValue};
pub use programs::serum::Side;
pub use programs::{InstructionVariant, Program, SERUM_DEX_PROGRAM_ID, SYSTEM_PROGRAM_ID};
pub use registry::{DiscriminantWidth, InstructionSpec, ProgramSchema, schema_for};
pub use types::RawInstruction;
