use solana_pubkey::Pubkey;

use crate::error::Error;
use crate::programs::serum::Side;

/// Wire type of a single payload field. Integers are little-endian,
/// matching the on-chain programs' convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    U16,
    U32,
    U64,
    U128,
    /// Single byte mapped through the closed [`Side`] table.
    Side,
    /// 32-byte identifier embedded in the payload (rare; most identifiers
    /// arrive through the account list).
    Pubkey,
}

impl FieldType {
    pub fn width(self) -> usize {
        match self {
            Self::U8 | Self::Side => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
            Self::U128 => 16,
            Self::Pubkey => 32,
        }
    }
}

/// One entry of an instruction's payload layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Side(Side),
    Pubkey(Pubkey),
}

/// Named-field record produced by [`decode`], in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    fields: Vec<(&'static str, FieldValue)>,
}

impl DecodedPayload {
    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, value)| value)
    }
}

/// Total byte width a layout requires.
pub fn declared_width(layout: &[Field]) -> usize {
    layout.iter().map(|field| field.ty.width()).sum()
}

/// Decode `data` against `layout`, walking left to right and consuming
/// exactly the declared width per field.
///
/// Trailing bytes beyond the layout are ignored (forward-compatible with
/// schema additions) unless `exact` is set.
pub fn decode(data: &[u8], layout: &[Field], exact: bool) -> Result<DecodedPayload, Error> {
    let expected = declared_width(layout);
    if data.len() < expected {
        return Err(Error::TruncatedPayload {
            expected,
            available: data.len(),
        });
    }
    if exact && data.len() > expected {
        return Err(Error::MalformedPayload {
            reason: format!(
                "{} trailing bytes after exact-length layout of {expected}",
                data.len() - expected
            ),
        });
    }

    let mut rest = data;
    let mut fields = Vec::with_capacity(layout.len());
    for field in layout {
        let (head, tail) = rest.split_at(field.ty.width());
        fields.push((field.name, decode_field(field, head)?));
        rest = tail;
    }
    Ok(DecodedPayload { fields })
}

fn decode_field(field: &Field, bytes: &[u8]) -> Result<FieldValue, Error> {
    let value = match field.ty {
        FieldType::U8 => FieldValue::U8(read_uint_le(bytes) as u8),
        FieldType::U16 => FieldValue::U16(read_uint_le(bytes) as u16),
        FieldType::U32 => FieldValue::U32(read_uint_le(bytes) as u32),
        FieldType::U64 => FieldValue::U64(read_uint_le(bytes) as u64),
        FieldType::U128 => FieldValue::U128(read_uint_le(bytes)),
        FieldType::Side => {
            let tag = read_uint_le(bytes) as u8;
            let side = Side::from_byte(tag).ok_or(Error::InvalidEnumValue {
                field: field.name,
                value: tag,
            })?;
            FieldValue::Side(side)
        }
        FieldType::Pubkey => {
            let mut buf = [0u8; 32];
            buf.copy_from_slice(bytes);
            FieldValue::Pubkey(Pubkey::new_from_array(buf))
        }
    };
    Ok(value)
}

/// Zero-extended little-endian read of up to 16 bytes.
pub(crate) fn read_uint_le(bytes: &[u8]) -> u128 {
    let mut buf = [0u8; 16];
    buf[..bytes.len()].copy_from_slice(bytes);
    u128::from_le_bytes(buf)
}
