//! # ARSENAL Core
//!
//! Codec for the 100-byte barrel definition record found in the game
//! client's memory: one weapon barrel of one tank.
//!
//! ## Architecture Rules
//!
//! 1. **The layout table is the source of truth** - `decode` and `encode` walk
//!    [`BARREL_LAYOUT`]; no other code hardcodes an offset.
//! 2. **Lossless** - `encode(decode(b)) == b` for every 100-byte buffer,
//!    including the unknown and reserved words.
//! 3. **Pure** - no I/O, no logging, no shared state. Safe to call from any
//!    thread.
//!
//! ## Example
//!
//! ```rust
//! use arsenal_core::{decode, encode, BulletType, RECORD_SIZE};
//!
//! let bytes = [0u8; RECORD_SIZE];
//! let barrel = decode(&bytes).unwrap();
//! assert!(!barrel.is_trapezoid_flag());
//! assert_eq!(barrel.bullet_type_kind(), BulletType::Bullet);
//! assert_eq!(encode(&barrel), bytes);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod addon;
pub mod codec;
pub mod error;
pub mod layout;
pub mod record;
pub mod views;

pub use addon::{AddonIndex, AddonResolver};
pub use codec::{
    decode, decode_hex, diff, encode, encode_hex, field_values, hex_bytes, FieldDiff,
};
pub use error::{BarrelError, BarrelResult};
pub use layout::{
    field, Confidence, FieldKind, FieldSpec, FieldValue, BARREL_LAYOUT, FIELD_COUNT, FIELD_WIDTH,
    RECORD_SIZE, RESERVED_WORDS,
};
pub use record::BarrelDefinition;
pub use views::{BulletType, TrapezoidFlags};
