//! # Record Codec
//!
//! Pure functions between the 100-byte wire form and [`BarrelDefinition`].
//!
//! ## Design
//!
//! - Every field is read and written through [`BARREL_LAYOUT`]
//! - Words are little-endian regardless of host
//! - Floats travel as bit patterns, so NaN payloads and `-0.0` survive
//! - No value validation: the codec guarantees structure, not meaning

use bytemuck::Zeroable;

use crate::error::{BarrelError, BarrelResult};
use crate::layout::{FieldSpec, FieldValue, BARREL_LAYOUT, FIELD_WIDTH, RECORD_SIZE};
use crate::record::BarrelDefinition;

/// Decodes one barrel definition.
///
/// # Errors
///
/// [`BarrelError::SizeMismatch`] if `bytes` is not exactly
/// [`RECORD_SIZE`] long.
pub fn decode(bytes: &[u8]) -> BarrelResult<BarrelDefinition> {
    if bytes.len() != RECORD_SIZE {
        return Err(BarrelError::SizeMismatch {
            expected: RECORD_SIZE,
            actual: bytes.len(),
        });
    }

    let mut barrel = BarrelDefinition::zeroed();
    for spec in &BARREL_LAYOUT {
        let mut word = [0u8; FIELD_WIDTH];
        word.copy_from_slice(&bytes[spec.range()]);
        spec.write(&mut barrel, FieldValue::from_bits(spec.kind, u32::from_le_bytes(word)));
    }
    Ok(barrel)
}

/// Encodes one barrel definition. Total: every record has a wire form.
#[must_use]
pub fn encode(barrel: &BarrelDefinition) -> [u8; RECORD_SIZE] {
    let mut bytes = [0u8; RECORD_SIZE];
    for spec in &BARREL_LAYOUT {
        bytes[spec.range()].copy_from_slice(&spec.read(barrel).to_bits().to_le_bytes());
    }
    bytes
}

/// Decodes the hex rendering of one record. Whitespace is ignored.
///
/// # Errors
///
/// [`BarrelError::Malformed`] if the text is not valid hex,
/// [`BarrelError::SizeMismatch`] if it does not hold exactly one record.
pub fn decode_hex(text: &str) -> BarrelResult<BarrelDefinition> {
    decode(&hex_bytes(text)?)
}

/// Bytes of a hex text. Any Unicode whitespace between digits is ignored.
///
/// # Errors
///
/// [`BarrelError::Malformed`] if the remaining text is not valid hex.
pub fn hex_bytes(text: &str) -> BarrelResult<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits).map_err(|e| BarrelError::Malformed {
        reason: e.to_string(),
    })
}

/// Lowercase hex rendering of one record (200 digits).
#[must_use]
pub fn encode_hex(barrel: &BarrelDefinition) -> String {
    hex::encode(encode(barrel))
}

/// A field whose word differs between two records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDiff {
    /// Field name.
    pub name: &'static str,
    /// Byte offset of the field.
    pub offset: usize,
    /// Value in the left record.
    pub left: FieldValue,
    /// Value in the right record.
    pub right: FieldValue,
}

/// Lists every field whose bits differ, in offset order.
#[must_use]
pub fn diff(left: &BarrelDefinition, right: &BarrelDefinition) -> Vec<FieldDiff> {
    BARREL_LAYOUT
        .iter()
        .filter_map(|spec| {
            let (l, r) = (spec.read(left), spec.read(right));
            (l != r).then_some(FieldDiff {
                name: spec.name,
                offset: spec.offset,
                left: l,
                right: r,
            })
        })
        .collect()
}

/// Every field of a record with its layout entry, in offset order.
pub fn field_values(
    barrel: &BarrelDefinition,
) -> impl Iterator<Item = (&'static FieldSpec, FieldValue)> + '_ {
    BARREL_LAYOUT.iter().map(move |spec| (spec, spec.read(barrel)))
}

impl BarrelDefinition {
    /// Decodes a record. See [`decode`].
    ///
    /// # Errors
    ///
    /// [`BarrelError::SizeMismatch`] on a buffer of the wrong length.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> BarrelResult<Self> {
        decode(bytes)
    }

    /// Encodes this record. See [`encode`].
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        encode(self)
    }

    /// Decodes a hex rendering. See [`decode_hex`].
    ///
    /// # Errors
    ///
    /// As [`decode_hex`].
    #[inline]
    pub fn from_hex(text: &str) -> BarrelResult<Self> {
        decode_hex(text)
    }

    /// Hex rendering of this record. See [`encode_hex`].
    #[inline]
    #[must_use]
    pub fn to_hex(&self) -> String {
        encode_hex(self)
    }
}
