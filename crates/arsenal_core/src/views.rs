//! # Flag & Enum Views
//!
//! Typed accessors over the raw integer fields of a barrel definition.
//! Views never reject a value: unidentified bits stay in place and
//! unidentified bullet types come back as [`BulletType::Unknown`].

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::record::BarrelDefinition;

/// The `is_trapezoid` bit field.
///
/// Only bit 0 has a known meaning. The other bits are set on some tanks
/// but unidentified; every operation here leaves them untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct TrapezoidFlags(i32);

impl TrapezoidFlags {
    /// Flag: barrel is drawn as a trapezoid.
    pub const TRAPEZOID: i32 = 1 << 0;

    /// Wraps a raw field value.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// The raw field value, all bits included.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Returns true if the trapezoid flag is set.
    #[inline]
    #[must_use]
    pub const fn is_trapezoid(self) -> bool {
        self.0 & Self::TRAPEZOID != 0
    }

    /// Returns a copy with bit 0 set or cleared.
    #[inline]
    #[must_use]
    pub const fn with_trapezoid(self, trapezoid: bool) -> Self {
        if trapezoid {
            Self(self.0 | Self::TRAPEZOID)
        } else {
            Self(self.0 & !Self::TRAPEZOID)
        }
    }

    /// Sets or clears bit 0 in place.
    #[inline]
    pub fn set_trapezoid(&mut self, trapezoid: bool) {
        *self = self.with_trapezoid(trapezoid);
    }

    /// The unidentified bits (everything but bit 0).
    #[inline]
    #[must_use]
    pub const fn other_bits(self) -> i32 {
        self.0 & !Self::TRAPEZOID
    }
}

/// What a barrel fires.
///
/// The mapping is advisory: values the client may use that are not listed
/// here come back as `Unknown` with the raw code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BulletType {
    /// Plain bullet (code 0).
    Bullet,
    /// Drone (code 1).
    Drone,
    /// Trap (code 2).
    Trap,
    /// Any other code.
    Unknown(i32),
}

impl BulletType {
    /// Code: bullet.
    pub const CODE_BULLET: i32 = 0;
    /// Code: drone.
    pub const CODE_DRONE: i32 = 1;
    /// Code: trap.
    pub const CODE_TRAP: i32 = 2;

    /// Maps a raw `bullet_type` value.
    #[inline]
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            Self::CODE_BULLET => Self::Bullet,
            Self::CODE_DRONE => Self::Drone,
            Self::CODE_TRAP => Self::Trap,
            other => Self::Unknown(other),
        }
    }

    /// The raw `bullet_type` value.
    #[inline]
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Bullet => Self::CODE_BULLET,
            Self::Drone => Self::CODE_DRONE,
            Self::Trap => Self::CODE_TRAP,
            Self::Unknown(code) => code,
        }
    }

    /// Returns true for the named variants.
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<i32> for BulletType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for BulletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullet => f.write_str("bullet"),
            Self::Drone => f.write_str("drone"),
            Self::Trap => f.write_str("trap"),
            Self::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}

impl BarrelDefinition {
    /// Returns true if bit 0 of `is_trapezoid` is set.
    #[inline]
    #[must_use]
    pub const fn is_trapezoid_flag(&self) -> bool {
        self.is_trapezoid.is_trapezoid()
    }

    /// Sets or clears bit 0 of `is_trapezoid`, leaving the other bits alone.
    #[inline]
    pub fn set_trapezoid_flag(&mut self, trapezoid: bool) {
        self.is_trapezoid.set_trapezoid(trapezoid);
    }

    /// Enumerated view of `bullet_type`.
    #[inline]
    #[must_use]
    pub const fn bullet_type_kind(&self) -> BulletType {
        BulletType::from_code(self.bullet_type)
    }
}
