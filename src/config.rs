use serde::{Deserialize, Serialize};

/// Geometry constants for the editing surface, in canvas units.
///
/// Every field is optional in JSON; missing ones take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Placed and dropped atoms snap to multiples of this.
    pub grid_spacing: f64,
    /// Pointer travel before a press on an atom becomes a drag.
    pub drag_threshold: f64,
    /// Added to the atom radius when hit-testing.
    pub atom_hit_slack: f64,
    /// Radius used for symbols missing from the element table.
    pub fallback_radius: f64,
    /// Max distance from a bond segment that still counts as a hit.
    pub bond_hit_tolerance: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 30.0,
            drag_threshold: 5.0,
            atom_hit_slack: 4.0,
            fallback_radius: 18.0,
            bond_hit_tolerance: 8.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Nearest grid point. Halfway values round up (toward +inf), so
    /// `-15` snaps to `0` on a 30-unit grid, not `-30`.
    pub fn snap(&self, x: f64, y: f64) -> (f64, f64) {
        let g = self.grid_spacing;
        if g <= 0.0 {
            return (x, y);
        }
        let round = |v: f64| (v / g + 0.5).floor() * g;
        (round(x), round(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EditorConfig::from_json(r#"{"grid_spacing": 20}"#).unwrap();
        assert_eq!(cfg.grid_spacing, 20.0);
        assert_eq!(cfg.bond_hit_tolerance, 8.0);
        assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn snapping() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.snap(44.0, 46.0), (30.0, 60.0));
        assert_eq!(cfg.snap(-14.0, 16.0), (0.0, 30.0));
    }

    #[test]
    fn halfway_points_round_up() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.snap(-15.0, -45.0), (0.0, -30.0));
        assert_eq!(cfg.snap(15.0, 45.0), (30.0, 60.0));
    }
}
