use solana_pubkey::Pubkey;

/// A raw Solana instruction triple as produced by the upstream
/// transaction-fetching layer.
///
/// The engine never mutates it; the unrecognized fallback retains it
/// verbatim so diagnostic renderers can show the undecoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInstruction {
    /// Program that was invoked.
    pub program_id: Pubkey,
    /// Ordered account list; position is significant per instruction kind.
    pub accounts: Vec<Pubkey>,
    /// Opaque instruction payload, discriminant first.
    pub data: Vec<u8>,
}
