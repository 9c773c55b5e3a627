use crate::bind::BoundAccounts;
use crate::error::Error;
use crate::payload::{self, DecodedPayload, Field};
use crate::programs::{InstructionVariant, Program, serum, system};

/// Assembles the typed variant for one instruction kind from its bound
/// accounts and decoded payload.
pub type AssembleFn = fn(&BoundAccounts, &DecodedPayload) -> Result<InstructionVariant, Error>;

/// Width of the opcode discriminant at the front of a program's payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscriminantWidth {
    U8,
    U32,
    U64,
}

impl DiscriminantWidth {
    pub fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U32 => 4,
            Self::U64 => 8,
        }
    }

    /// Split the little-endian opcode off the front of `data`.
    ///
    /// A payload shorter than the discriminant is malformed data for a
    /// known program, not an unrecognized instruction.
    pub fn read(self, data: &[u8]) -> Result<(u64, &[u8]), Error> {
        let width = self.width();
        let Some((head, rest)) = data.split_at_checked(width) else {
            return Err(Error::TruncatedPayload {
                expected: width,
                available: data.len(),
            });
        };
        Ok((payload::read_uint_le(head) as u64, rest))
    }
}

/// One instruction kind a program supports: its opcode, the role names of
/// its positional accounts (minimum account count = `roles.len()`), and
/// its payload field layout.
pub struct InstructionSpec {
    pub name: &'static str,
    pub opcode: u64,
    pub roles: &'static [&'static str],
    pub layout: &'static [Field],
    /// When set, trailing bytes beyond the layout are rejected instead of
    /// ignored.
    pub exact_payload: bool,
    pub assemble: AssembleFn,
}

/// Decoding rules for one program's instruction set.
pub struct ProgramSchema {
    pub program: Program,
    pub discriminant_width: DiscriminantWidth,
    pub instructions: &'static [InstructionSpec],
}

impl ProgramSchema {
    pub fn instruction(&self, opcode: u64) -> Option<&InstructionSpec> {
        self.instructions.iter().find(|spec| spec.opcode == opcode)
    }
}

/// Static registry lookup. The tables are consts built into the binary;
/// nothing is mutated after process start, so concurrent lookups need no
/// coordination.
pub fn schema_for(program: Program) -> &'static ProgramSchema {
    match program {
        Program::SerumDex => &serum::SCHEMA,
        Program::System => &system::SCHEMA,
    }
}
