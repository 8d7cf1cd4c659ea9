// Length-Prefixed Field Codec
// Layout per field: [u32 big-endian length L][L bytes big-endian unsigned value]

use num_bigint::BigUint;

use super::error::{DecodeError, Result};

/// Size of the length header preceding every field
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// A single decoded field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub value: BigUint,
    /// Header plus payload bytes (`4 + L`)
    pub consumed: usize,
}

/// Decode one length-prefixed big-endian integer starting at `offset`
///
/// # Errors
/// - `DecodeError::TruncatedLength` if fewer than 4 bytes remain for the header
/// - `DecodeError::TruncatedValue` if the header declares more bytes than remain
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use sprime_core::domain::field::decode_field;
///
/// let field = decode_field(&[0, 0, 0, 1, 0x0f], 0).unwrap();
/// assert_eq!(field.value, BigUint::from(15u32));
/// assert_eq!(field.consumed, 5);
/// ```
pub fn decode_field(buf: &[u8], offset: usize) -> Result<DecodedField> {
    let available = buf.len().saturating_sub(offset);

    let header_end = offset
        .checked_add(LENGTH_PREFIX_SIZE)
        .filter(|end| *end <= buf.len())
        .ok_or(DecodeError::TruncatedLength { offset, available })?;

    let mut header = [0u8; LENGTH_PREFIX_SIZE];
    header.copy_from_slice(&buf[offset..header_end]);
    let declared = u32::from_be_bytes(header) as usize;

    let value_end = header_end
        .checked_add(declared)
        .filter(|end| *end <= buf.len())
        .ok_or(DecodeError::TruncatedValue {
            offset,
            declared,
            available: buf.len() - header_end,
        })?;

    Ok(DecodedField {
        value: BigUint::from_bytes_be(&buf[header_end..value_end]),
        consumed: LENGTH_PREFIX_SIZE + declared,
    })
}

/// Encode `value` zero-padded to exactly `size` payload bytes
///
/// The header always declares `size`; values wider than `size` are rejected.
pub fn encode_field(value: &BigUint, size: u32) -> Result<Vec<u8>> {
    let digits = minimal_bytes(value);
    let width = size as usize;
    if digits.len() > width {
        return Err(DecodeError::ValueTooWide {
            required: digits.len(),
            size: width,
        });
    }

    let mut out = Vec::with_capacity(LENGTH_PREFIX_SIZE + width);
    out.extend_from_slice(&size.to_be_bytes());
    out.resize(LENGTH_PREFIX_SIZE + width - digits.len(), 0);
    out.extend_from_slice(&digits);
    Ok(out)
}

/// Encode `value` with the shortest payload that holds it (zero encodes as `L = 0`)
pub fn encode_minimal(value: &BigUint) -> Vec<u8> {
    let digits = minimal_bytes(value);
    let mut out = Vec::with_capacity(LENGTH_PREFIX_SIZE + digits.len());
    out.extend_from_slice(&(digits.len() as u32).to_be_bytes());
    out.extend_from_slice(&digits);
    out
}

// BigUint::to_bytes_be returns [0] for zero
fn minimal_bytes(value: &BigUint) -> Vec<u8> {
    if value.bits() == 0 {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

/// Sequential reader over a captured buffer
///
/// Each field starts where the previous one ended.
#[derive(Debug)]
pub struct FieldCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Decode the field at the current offset and advance past it
    pub fn next_field(&mut self) -> Result<BigUint> {
        let field = decode_field(self.buf, self.offset)?;
        self.offset += field.consumed;
        Ok(field.value)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }
}
