//! # Addon Boundary
//!
//! The `addon` field is an index into the client's function table. Its
//! values move with every client build, so the codec treats it as an
//! opaque id and leaves resolution to whoever owns a table for that build.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::record::BarrelDefinition;

/// Opaque function table index.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable, Serialize,
    Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct AddonIndex(i32);

impl AddonIndex {
    /// Wraps a raw index.
    #[inline]
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw index.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AddonIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolves addon indices for one client build.
///
/// Implemented by consumers; this crate never holds a table.
pub trait AddonResolver {
    /// What an index resolves to.
    type Addon: ?Sized;

    /// Looks up an index. `None` if the table has no entry for it.
    fn resolve(&self, index: AddonIndex) -> Option<&Self::Addon>;
}

impl BarrelDefinition {
    /// Resolves this barrel's addon through an injected resolver.
    #[inline]
    pub fn resolve_addon<'r, R>(&self, resolver: &'r R) -> Option<&'r R::Addon>
    where
        R: AddonResolver + ?Sized,
    {
        resolver.resolve(self.addon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleEntry(AddonIndex, &'static str);

    impl AddonResolver for SingleEntry {
        type Addon = str;

        fn resolve(&self, index: AddonIndex) -> Option<&str> {
            (index == self.0).then_some(self.1)
        }
    }

    #[test]
    fn test_addon_is_opaque() {
        let index = AddonIndex::new(-7);
        assert_eq!(index.raw(), -7);
        assert_eq!(index.to_string(), "#-7");
    }

    #[test]
    fn test_resolve_through_injected_table() {
        let table = SingleEntry(AddonIndex::new(105), "trap_launcher");
        let mut barrel = BarrelDefinition {
            addon: AddonIndex::new(105),
            ..Default::default()
        };
        assert_eq!(barrel.resolve_addon(&table), Some("trap_launcher"));

        barrel.addon = AddonIndex::new(106);
        assert_eq!(barrel.resolve_addon(&table), None);
    }
}
