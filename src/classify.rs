use serde::Serialize;

use crate::bind::bind;
use crate::error::Error;
use crate::payload;
use crate::programs::{InstructionVariant, Program};
use crate::registry::schema_for;
use crate::types::RawInstruction;

/// Outcome of classifying a raw instruction against the registry.
///
/// Data-dependent decode failures (truncated payload, bad enum byte,
/// missing accounts) are the `Err` side of [`classify`], so renderers can
/// tell data corruption apart from missing decoder coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Decoded(InstructionVariant),
    Unrecognized(UnrecognizedInstruction),
}

/// Fallback for instructions the registry cannot name. Retains the raw
/// triple verbatim for diagnostic display; never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedInstruction {
    pub raw: RawInstruction,
    pub reason: UnrecognizedReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnrecognizedReason {
    /// Program id absent from the registry.
    UnknownProgram,
    /// Known program, but the opcode matched none of its instruction kinds.
    UnknownOpcode { program: Program, opcode: u64 },
}

/// Classify a raw instruction: registry lookup, discriminant read, account
/// binding, payload decode, variant assembly.
///
/// Pure and deterministic: the same input always yields the same result,
/// and concurrent calls share nothing mutable.
pub fn classify(raw: &RawInstruction) -> Result<Classification, Error> {
    let Some(program) = Program::from_program_id(&raw.program_id) else {
        tracing::debug!(program_id = %raw.program_id, "program id not in registry");
        return Ok(Classification::Unrecognized(UnrecognizedInstruction {
            raw: raw.clone(),
            reason: UnrecognizedReason::UnknownProgram,
        }));
    };

    let schema = schema_for(program);
    // Shorter than the discriminant is malformed data for a known program,
    // not an unrecognized instruction.
    let (opcode, data) = schema.discriminant_width.read(&raw.data)?;

    let Some(spec) = schema.instruction(opcode) else {
        tracing::debug!(program = program.as_str(), opcode, "opcode not in schema");
        return Ok(Classification::Unrecognized(UnrecognizedInstruction {
            raw: raw.clone(),
            reason: UnrecognizedReason::UnknownOpcode { program, opcode },
        }));
    };

    let bound = bind(&raw.accounts, spec.roles)?;
    let decoded = payload::decode(data, spec.layout, spec.exact_payload)?;
    let variant = (spec.assemble)(&bound, &decoded)?;
    tracing::trace!(
        program = program.as_str(),
        instruction = spec.name,
        "decoded instruction"
    );
    Ok(Classification::Decoded(variant))
}
