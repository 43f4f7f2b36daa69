//! # Barrel Reports
//!
//! Plain-text rendering of decoded barrels and field diffs.

use std::fmt::Write;

use arsenal_core::{field_values, AddonResolver, BarrelDefinition, Confidence, FieldDiff};

use crate::config::ReportConfig;
use crate::derived::DerivedStats;

/// Renders one barrel: every field in layout order, then the views and
/// derived stats.
#[must_use]
pub fn render_barrel<R>(
    index: usize,
    barrel: &BarrelDefinition,
    config: &ReportConfig,
    addons: &R,
) -> String
where
    R: AddonResolver<Addon = str> + ?Sized,
{
    let mut out = String::new();
    let _ = writeln!(out, "┌─ BARREL {index} ─────────────────────────────────────────");

    for (spec, value) in field_values(barrel) {
        if spec.confidence == Confidence::Opaque && !config.show_reserved {
            continue;
        }
        let _ = writeln!(
            out,
            "│ 0x{:02X} {:<20} {:>14} {}",
            spec.offset,
            spec.name,
            value.to_string(),
            spec.confidence.marker()
        );
    }

    let flags = barrel.is_trapezoid;
    let stats = DerivedStats::compute(barrel, config.reload_points);
    let addon = barrel.resolve_addon(addons).unwrap_or("unresolved");

    let _ = writeln!(out, "├─ views");
    let _ = writeln!(
        out,
        "│ trapezoid:     {} (other bits 0x{:08X})",
        flags.is_trapezoid(),
        flags.other_bits()
    );
    let _ = writeln!(out, "│ bullet type:   {}", barrel.bullet_type_kind());
    let _ = writeln!(out, "│ addon:         {} ({addon})", barrel.addon);
    let _ = writeln!(out, "├─ derived");
    let _ = writeln!(out, "│ render width:  {}", stats.render_width);
    let _ = writeln!(
        out,
        "│ reload ticks:  {} @ {} points",
        stats.reload_ticks, config.reload_points
    );
    let _ = writeln!(out, "└──────────────────────────────────────────────────────");
    out
}

/// Renders a field diff, one line per changed field.
#[must_use]
pub fn render_diff(diffs: &[FieldDiff]) -> String {
    if diffs.is_empty() {
        return "records are identical\n".to_string();
    }
    let mut out = String::new();
    for d in diffs {
        let _ = writeln!(
            out,
            "0x{:02X} {:<20} {:>14} -> {}",
            d.offset,
            d.name,
            d.left.to_string(),
            d.right
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addons::FunctionTable;
    use arsenal_core::{diff, AddonIndex, TrapezoidFlags};

    fn sample() -> BarrelDefinition {
        BarrelDefinition {
            width: 0.5,
            base_reload: 1.0,
            bullet_type: 2,
            is_trapezoid: TrapezoidFlags::from_bits(0x11),
            _unknown1: 1,
            addon: AddonIndex::new(105),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_barrel_contents() {
        let mut table = FunctionTable::new();
        table.insert(AddonIndex::new(105), "trap_launcher");

        let text = render_barrel(0, &sample(), &ReportConfig::default(), &table);
        assert!(text.contains("BARREL 0"));
        assert!(text.contains("0x18 width"));
        assert!(text.contains("_unknown1"));
        assert!(text.contains("reserved[4]"));
        assert!(text.contains("trapezoid:     true (other bits 0x00000010)"));
        assert!(text.contains("bullet type:   trap"));
        assert!(text.contains("#105 (trap_launcher)"));
        assert!(text.contains("render width:  21"));
        assert!(text.contains("reload ticks:  15 @ 0 points"));
    }

    #[test]
    fn test_render_hides_opaque_words() {
        let config = ReportConfig {
            show_reserved: false,
            reload_points: 0,
        };
        let text = render_barrel(3, &sample(), &config, &FunctionTable::new());
        assert!(!text.contains("_unknown1"));
        assert!(!text.contains("reserved["));
        assert!(text.contains("bullet_damage"));
        assert!(text.contains("(unresolved)"));
    }

    #[test]
    fn test_render_diff() {
        let left = sample();
        assert_eq!(render_diff(&diff(&left, &left)), "records are identical\n");

        let right = BarrelDefinition {
            width: 0.75,
            ..left
        };
        let text = render_diff(&diff(&left, &right));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("width"));
        assert!(text.contains("-> 0.75"));
    }
}
