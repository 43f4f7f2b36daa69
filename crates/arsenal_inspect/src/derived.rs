//! # Derived Barrel Stats
//!
//! Values the simulation and renderer compute from a decoded barrel. They
//! are not part of the record, so the codec never produces them.

use arsenal_core::BarrelDefinition;

/// `width * 42` is the width sent to the client at level 0.
pub const RENDER_WIDTH_SCALE: f32 = 42.0;

/// Reload stat points cap.
pub const MAX_RELOAD_POINTS: u8 = 15;

/// Render width at level 0.
#[inline]
#[must_use]
pub fn render_width(barrel: &BarrelDefinition) -> f32 {
    barrel.width * RENDER_WIDTH_SCALE
}

/// Ticks between shots: `ceil((15 - reload_points) * base_reload)`.
///
/// `reload_points` above the cap are treated as the cap.
#[inline]
#[must_use]
pub fn reload_ticks(barrel: &BarrelDefinition, reload_points: u8) -> f32 {
    let remaining = MAX_RELOAD_POINTS - reload_points.min(MAX_RELOAD_POINTS);
    (f32::from(remaining) * barrel.base_reload).ceil()
}

/// Derived stats for one barrel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedStats {
    /// See [`render_width`].
    pub render_width: f32,
    /// See [`reload_ticks`].
    pub reload_ticks: f32,
}

impl DerivedStats {
    /// Computes every derived stat.
    #[must_use]
    pub fn compute(barrel: &BarrelDefinition, reload_points: u8) -> Self {
        Self {
            render_width: render_width(barrel),
            reload_ticks: reload_ticks(barrel, reload_points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barrel(width: f32, base_reload: f32) -> BarrelDefinition {
        BarrelDefinition {
            width,
            base_reload,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_width() {
        assert_eq!(render_width(&barrel(1.0, 1.0)), 42.0);
        assert_eq!(render_width(&barrel(0.5, 1.0)), 21.0);
    }

    #[test]
    fn test_reload_ticks_basic() {
        assert_eq!(reload_ticks(&barrel(1.0, 1.0), 0), 15.0);
        assert_eq!(reload_ticks(&barrel(1.0, 1.0), 15), 0.0);
        // 8 * 1.5 = 12
        assert_eq!(reload_ticks(&barrel(1.0, 1.5), 7), 12.0);
        // 15 * 0.3 = 4.5 -> 5
        assert_eq!(reload_ticks(&barrel(1.0, 0.3), 0), 5.0);
    }

    #[test]
    fn test_reload_points_capped() {
        assert_eq!(reload_ticks(&barrel(1.0, 2.0), 255), 0.0);
    }

    #[test]
    fn test_compute() {
        let stats = DerivedStats::compute(&barrel(0.5, 2.0), 5);
        assert_eq!(stats.render_width, 21.0);
        assert_eq!(stats.reload_ticks, 20.0);
    }
}
