//! # Barrel Definition Record
//!
//! The decoded, typed form of one 100-byte barrel definition.
//!
//! The struct mirrors the client's memory layout field for field, so it is
//! `#[repr(C)]`, `Pod`, and exactly [`RECORD_SIZE`] bytes. The codec does not
//! rely on that (it goes through the layout table and always writes
//! little-endian), but it keeps the record `Copy` and lets tests compare
//! records bit for bit.
//!
//! Fields whose meaning is not understood keep an underscore name and are
//! never defaulted or validated.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::addon::AddonIndex;
use crate::layout::{RECORD_SIZE, RESERVED_WORDS};
use crate::views::TrapezoidFlags;

/// One weapon barrel of a tank.
///
/// Size: 100 bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[repr(C)]
pub struct BarrelDefinition {
    /// Direction the barrel is facing, in radians.
    pub angle: f32,
    /// Delay before the barrel fires. Half the barrels on the octo tank
    /// have 0.5, for example.
    pub delay: f32,
    /// The longer side of the barrel (same as `size` sent to the client).
    pub size: f32,
    /// Displacement off the tank's body. Non-zero for twin barrels.
    pub offset: f32,
    /// Bit field. Bit 0 is the trapezoid flag (machine gun, stalker);
    /// the other bits are unidentified flags.
    pub is_trapezoid: TrapezoidFlags,
    /// Feeds the recoil calculation.
    pub recoil: f32,
    /// The shorter side of the barrel. Determines bullet size.
    pub width: f32,
    /// Index into `[bullet, drone, trap]`; see [`crate::BulletType`].
    pub bullet_type: i32,
    /// Unidentified. Usually 1, lower for stronger bullets.
    pub _unknown0: i32,
    /// Feeds the bullet speed formula.
    pub bullet_speed: f32,
    /// Max drones this barrel can keep alive. Only meaningful for drone
    /// tanks; non-negative in practice but not enforced.
    pub max_drones: i32,
    /// Bullet damage. Tentative.
    pub bullet_damage: f32,
    /// Bullet max health at level 0.
    pub bullet_base_health: f32,
    /// Unidentified. 1 on every tank observed.
    pub _unknown1: i32,
    /// Unidentified.
    pub _unknown2: i32,
    /// Direction a trapezoidal barrel faces, in radians (`shootingAngle`).
    pub trapezoidal_dir: f32,
    /// Base reload multiplier. Defaults to 1.
    pub base_reload: f32,
    /// Bullet friction. Tentative; lower means less friction.
    pub bullet_friction: f32,
    /// Bullet lifetime factor. Tentative; higher for trappers.
    pub bullet_durability: f32,
    /// Unidentified block at `0x4C..0x60`. The first word is all ones and
    /// the last all zeros on every tank observed.
    pub reserved: [i32; RESERVED_WORDS],
    /// Index into the client's function table for post-render add-ons
    /// (traps). Changes with every client build.
    pub addon: AddonIndex,
}

impl BarrelDefinition {
    /// Size of the encoded record in bytes.
    pub const SIZE: usize = RECORD_SIZE;

    /// Returns true if both records hold the same bits in every field.
    ///
    /// Unlike `==`, NaN fields compare equal to themselves and `0.0` differs
    /// from `-0.0`.
    #[inline]
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        bytemuck::bytes_of(self) == bytemuck::bytes_of(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_size() {
        assert_eq!(std::mem::size_of::<BarrelDefinition>(), BarrelDefinition::SIZE);
        assert_eq!(std::mem::align_of::<BarrelDefinition>(), 4);
    }

    #[test]
    fn test_zeroed_matches_default() {
        assert!(BarrelDefinition::zeroed().bit_eq(&BarrelDefinition::default()));
    }

    #[test]
    fn test_bit_eq_nan() {
        let barrel = BarrelDefinition {
            bullet_damage: f32::NAN,
            ..Default::default()
        };
        let copy = barrel;
        assert_ne!(barrel, copy);
        assert!(barrel.bit_eq(&copy));

        let negative_zero = BarrelDefinition {
            angle: -0.0,
            ..Default::default()
        };
        assert_eq!(negative_zero, BarrelDefinition::default());
        assert!(!negative_zero.bit_eq(&BarrelDefinition::default()));
    }
}
