//! Formatting helpers for the rendering layer.
//!
//! Order ids go up to `2^64 - 1` and future kinds may carry 128-bit
//! fields; values stay in fixed-width integers end to end and only become
//! text here, never through a floating-point intermediate.

use solana_pubkey::Pubkey;

/// Exact decimal text for any unsigned integer up to 128 bits. No
/// scientific notation, no locale grouping.
pub fn to_decimal_string(value: impl Into<u128>) -> String {
    value.into().to_string()
}

/// Canonical, reversible base58 text of a 32-byte identifier.
pub fn to_canonical_address_text(address: &Pubkey) -> String {
    bs58::encode(address.as_ref()).into_string()
}
