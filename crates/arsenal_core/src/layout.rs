//! # Barrel Field Layout
//!
//! Static, ordered description of every field in a barrel definition.
//! The codec walks this table; nothing else in the crate knows an offset.
//!
//! All fields are 32 bits wide and little-endian (the client is an
//! Emscripten build, so pointers and ints are 32 bit).
//!
//! ## Layout
//!
//! ```text
//! 0x00: angle               f32   radians
//! 0x04: delay               f32
//! 0x08: size                f32   the longer side of the barrel
//! 0x0C: offset              f32   displacement off the body
//! 0x10: is_trapezoid        i32   bit 0 = trapezoid, other bits opaque
//! 0x14: recoil              f32
//! 0x18: width               f32   the shorter side, drives bullet size
//! 0x1C: bullet_type         i32
//! 0x20: _unknown0           i32
//! 0x24: bullet_speed        f32
//! 0x28: max_drones          i32
//! 0x2C: bullet_damage       f32   (?)
//! 0x30: bullet_base_health  f32
//! 0x34: _unknown1           i32
//! 0x38: _unknown2           i32
//! 0x3C: trapezoidal_dir     f32   radians
//! 0x40: base_reload         f32
//! 0x44: bullet_friction     f32   (?)
//! 0x48: bullet_durability   f32   (?)
//! 0x4C: reserved[0..5]      i32 x5
//! 0x60: addon               i32   function table index
//! 0x64: end
//! ```

use std::fmt;
use std::ops::Range;

use crate::addon::AddonIndex;
use crate::record::BarrelDefinition;
use crate::views::TrapezoidFlags;

/// Size of one encoded barrel definition in bytes.
pub const RECORD_SIZE: usize = 100;

/// Width of every field in bytes.
pub const FIELD_WIDTH: usize = 4;

/// Number of fields in the layout.
pub const FIELD_COUNT: usize = RECORD_SIZE / FIELD_WIDTH;

/// Number of opaque words in the reserved block at `0x4C`.
pub const RESERVED_WORDS: usize = 5;

/// How a field's 32 bits are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// IEEE 754 single precision float.
    F32,
    /// Two's complement signed integer.
    I32,
}

/// How well a field's meaning is understood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Confidence {
    /// Meaning confirmed against several tanks.
    Known,
    /// Meaning guessed from observed values; may be wrong.
    Tentative,
    /// No known meaning. Carried verbatim.
    Opaque,
}

impl Confidence {
    /// Short marker used in reports.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Known => "",
            Self::Tentative => "(?)",
            Self::Opaque => "(opaque)",
        }
    }
}

/// A decoded field word.
///
/// Equality is bitwise: two `F32` values holding the same NaN payload are
/// equal, `0.0` and `-0.0` are not.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue {
    /// Float field.
    F32(f32),
    /// Integer field.
    I32(i32),
}

impl FieldValue {
    /// Interprets a raw word according to `kind`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_bits(kind: FieldKind, bits: u32) -> Self {
        match kind {
            FieldKind::F32 => Self::F32(f32::from_bits(bits)),
            FieldKind::I32 => Self::I32(bits as i32),
        }
    }

    /// The raw 32-bit word.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn to_bits(self) -> u32 {
        match self {
            Self::F32(v) => v.to_bits(),
            Self::I32(v) => v as u32,
        }
    }

    /// Kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::F32(_) => FieldKind::F32,
            Self::I32(_) => FieldKind::I32,
        }
    }

    /// Reinterprets the word as a float.
    #[inline]
    #[must_use]
    pub fn as_f32(self) -> f32 {
        f32::from_bits(self.to_bits())
    }

    /// Reinterprets the word as an integer.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn as_i32(self) -> i32 {
        self.to_bits() as i32
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.to_bits() == other.to_bits()
    }
}

impl Eq for FieldValue {}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F32(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
        }
    }
}

/// One entry of the layout table.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    /// Field name as it appears in the record.
    pub name: &'static str,
    /// Byte offset from the start of the record.
    pub offset: usize,
    /// Interpretation of the word.
    pub kind: FieldKind,
    /// How well the meaning is understood.
    pub confidence: Confidence,
    get: fn(&BarrelDefinition) -> FieldValue,
    set: fn(&mut BarrelDefinition, FieldValue),
}

impl FieldSpec {
    /// Byte range covered by this field.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + FIELD_WIDTH
    }

    /// Reads this field out of a record.
    #[inline]
    #[must_use]
    pub fn read(&self, barrel: &BarrelDefinition) -> FieldValue {
        (self.get)(barrel)
    }

    /// Stores a word into this field. The bits are stored as-is, whatever
    /// the kind of `value`.
    #[inline]
    pub fn write(&self, barrel: &mut BarrelDefinition, value: FieldValue) {
        (self.set)(barrel, value);
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("offset", &self.offset)
            .field("kind", &self.kind)
            .field("confidence", &self.confidence)
            .finish_non_exhaustive()
    }
}

macro_rules! f32_field {
    ($name:ident, $offset:literal, $confidence:ident) => {
        FieldSpec {
            name: stringify!($name),
            offset: $offset,
            kind: FieldKind::F32,
            confidence: Confidence::$confidence,
            get: |b| FieldValue::F32(b.$name),
            set: |b, v| b.$name = v.as_f32(),
        }
    };
}

macro_rules! i32_field {
    ($name:ident, $offset:literal, $confidence:ident) => {
        FieldSpec {
            name: stringify!($name),
            offset: $offset,
            kind: FieldKind::I32,
            confidence: Confidence::$confidence,
            get: |b| FieldValue::I32(b.$name),
            set: |b, v| b.$name = v.as_i32(),
        }
    };
}

macro_rules! reserved_word {
    ($name:literal, $index:literal, $offset:literal) => {
        FieldSpec {
            name: $name,
            offset: $offset,
            kind: FieldKind::I32,
            confidence: Confidence::Opaque,
            get: |b| FieldValue::I32(b.reserved[$index]),
            set: |b, v| b.reserved[$index] = v.as_i32(),
        }
    };
}

const LAYOUT: [FieldSpec; FIELD_COUNT] = [
    f32_field!(angle, 0x00, Known),
    f32_field!(delay, 0x04, Known),
    f32_field!(size, 0x08, Known),
    f32_field!(offset, 0x0C, Known),
    FieldSpec {
        name: "is_trapezoid",
        offset: 0x10,
        kind: FieldKind::I32,
        confidence: Confidence::Known,
        get: |b| FieldValue::I32(b.is_trapezoid.bits()),
        set: |b, v| b.is_trapezoid = TrapezoidFlags::from_bits(v.as_i32()),
    },
    f32_field!(recoil, 0x14, Known),
    f32_field!(width, 0x18, Known),
    i32_field!(bullet_type, 0x1C, Known),
    i32_field!(_unknown0, 0x20, Opaque),
    f32_field!(bullet_speed, 0x24, Known),
    i32_field!(max_drones, 0x28, Known),
    f32_field!(bullet_damage, 0x2C, Tentative),
    f32_field!(bullet_base_health, 0x30, Known),
    i32_field!(_unknown1, 0x34, Opaque),
    i32_field!(_unknown2, 0x38, Opaque),
    f32_field!(trapezoidal_dir, 0x3C, Known),
    f32_field!(base_reload, 0x40, Known),
    f32_field!(bullet_friction, 0x44, Tentative),
    f32_field!(bullet_durability, 0x48, Tentative),
    reserved_word!("reserved[0]", 0, 0x4C),
    reserved_word!("reserved[1]", 1, 0x50),
    reserved_word!("reserved[2]", 2, 0x54),
    reserved_word!("reserved[3]", 3, 0x58),
    reserved_word!("reserved[4]", 4, 0x5C),
    FieldSpec {
        name: "addon",
        offset: 0x60,
        kind: FieldKind::I32,
        confidence: Confidence::Known,
        get: |b| FieldValue::I32(b.addon.raw()),
        set: |b, v| b.addon = AddonIndex::new(v.as_i32()),
    },
];

/// Fields are contiguous, ascending, and end exactly at `RECORD_SIZE`.
const fn layout_is_contiguous(fields: &[FieldSpec]) -> bool {
    let mut expected = 0;
    let mut i = 0;
    while i < fields.len() {
        if fields[i].offset != expected {
            return false;
        }
        expected += FIELD_WIDTH;
        i += 1;
    }
    expected == RECORD_SIZE
}

const _: () = assert!(layout_is_contiguous(&LAYOUT));
const _: () = assert!(std::mem::size_of::<BarrelDefinition>() == RECORD_SIZE);

/// The barrel definition layout, in offset order.
pub static BARREL_LAYOUT: [FieldSpec; FIELD_COUNT] = LAYOUT;

/// Looks up a field by name.
#[must_use]
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    BARREL_LAYOUT.iter().find(|spec| spec.name == name)
}
