//! Layout for the Bohr-model drawing of a single element.

use std::f64::consts::PI;

use serde::Serialize;

use crate::element::Element;

const NUCLEUS_RADIUS: f64 = 20.0;
const SHELL_GAP: f64 = 22.0;
const MARGIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shell {
    pub radius: f64,
    /// Electron centres, clockwise from the top of the ring.
    pub electrons: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BohrModel {
    pub element: Element,
    pub protons: u8,
    pub neutrons: u8,
    /// Side of the square canvas; the nucleus sits at its centre.
    pub size: f64,
    pub shells: Vec<Shell>,
}

impl BohrModel {
    pub fn center(&self) -> [f64; 2] {
        [self.size / 2.0, self.size / 2.0]
    }

    pub fn electron_count(&self) -> usize {
        self.shells.iter().map(|s| s.electrons.len()).sum()
    }
}

pub fn bohr_model(element: Element) -> BohrModel {
    let occupancy = element.electron_shells();
    let size = 2.0 * (NUCLEUS_RADIUS + occupancy.len() as f64 * SHELL_GAP) + MARGIN;
    let c = size / 2.0;

    let shells = occupancy
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let radius = NUCLEUS_RADIUS + (i + 1) as f64 * SHELL_GAP;
            let electrons = (0..n)
                .map(|j| {
                    let angle = 2.0 * PI * f64::from(j) / f64::from(n) - PI / 2.0;
                    [c + radius * angle.cos(), c + radius * angle.sin()]
                })
                .collect();
            Shell { radius, electrons }
        })
        .collect();

    BohrModel {
        element,
        protons: element.atomic_num(),
        neutrons: element.neutron_count(),
        size,
        shells,
    }
}

/// [`bohr_model`] by symbol; `None` for symbols outside the table.
pub fn bohr_model_for(symbol: &str) -> Option<BohrModel> {
    Element::from_symbol(symbol).map(bohr_model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn carbon_layout() {
        let m = bohr_model(Element::C);
        assert_eq!(m.protons, 6);
        assert_eq!(m.neutrons, 6);
        assert_eq!(m.size, 2.0 * (20.0 + 2.0 * 22.0) + 20.0);
        assert_eq!(m.shells.len(), 2);
        assert_eq!(m.shells[0].radius, 42.0);
        assert_eq!(m.shells[1].radius, 64.0);
        assert_eq!(m.electron_count(), 6);
    }

    #[test]
    fn first_electron_at_top() {
        let m = bohr_model(Element::O);
        let [cx, cy] = m.center();
        let [x, y] = m.shells[1].electrons[0];
        assert!(close(x, cx));
        assert!(close(y, cy - 64.0));
    }

    #[test]
    fn electrons_sit_on_their_ring() {
        let m = bohr_model(Element::Br);
        let [cx, cy] = m.center();
        for shell in &m.shells {
            for [x, y] in &shell.electrons {
                assert!(close(((x - cx).powi(2) + (y - cy).powi(2)).sqrt(), shell.radius));
            }
        }
        assert_eq!(m.electron_count(), 35);
    }

    #[test]
    fn unknown_symbol() {
        assert!(bohr_model_for("Xx").is_none());
        assert_eq!(bohr_model_for("H").unwrap().shells[0].electrons.len(), 1);
    }
}
