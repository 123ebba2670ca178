//! Static element table for the molecule builder palette.
//!
//! Only the ten elements a student can place are known. Anything else is an
//! unrecognized symbol, which the rest of the crate treats as an atom with no
//! bonding capacity.

use serde::Serialize;

/// An element from the builder palette.
///
/// Discriminants are atomic numbers. Serializes as the symbol. Defaults to
/// carbon, the first palette entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Element {
    H = 1,
    #[default]
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    P = 15,
    S = 16,
    Cl = 17,
    Br = 35,
    I = 53,
}

/// Palette order, as shown to the student.
pub const PALETTE: [Element; 10] = [
    Element::C,
    Element::H,
    Element::O,
    Element::N,
    Element::S,
    Element::P,
    Element::F,
    Element::Cl,
    Element::Br,
    Element::I,
];

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        PALETTE.iter().copied().find(|e| e.atomic_num() == n)
    }

    /// Case-sensitive symbol lookup (`"Cl"`, never `"CL"`).
    pub fn from_symbol(s: &str) -> Option<Element> {
        PALETTE.iter().copied().find(|e| e.symbol() == s)
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::I => "I",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::H => "Hidrógeno",
            Element::C => "Carbono",
            Element::N => "Nitrógeno",
            Element::O => "Oxígeno",
            Element::F => "Flúor",
            Element::P => "Fósforo",
            Element::S => "Azufre",
            Element::Cl => "Cloro",
            Element::Br => "Bromo",
            Element::I => "Yodo",
        }
    }

    /// Maximum total bond order an atom of this element can take part in.
    pub fn max_bonds(self) -> u8 {
        match self {
            Element::C => 4,
            Element::N | Element::P => 3,
            Element::O | Element::S => 2,
            Element::H | Element::F | Element::Cl | Element::Br | Element::I => 1,
        }
    }

    /// CPK fill color as `#rrggbb`.
    pub fn color(self) -> &'static str {
        match self {
            Element::H => "#ffffff",
            Element::C => "#333333",
            Element::N => "#3050f8",
            Element::O => "#ff0d0d",
            Element::F => "#90e050",
            Element::P => "#ff8000",
            Element::S => "#ffff30",
            Element::Cl => "#1ff01f",
            Element::Br => "#a62929",
            Element::I => "#940094",
        }
    }

    /// Label color that stays legible on top of [`color`](Self::color).
    pub fn text_color(self) -> &'static str {
        match self {
            Element::H | Element::S | Element::F | Element::Cl => "#333333",
            _ => "#ffffff",
        }
    }

    /// Drawing radius in canvas units.
    pub fn radius(self) -> f64 {
        match self {
            Element::H => 14.0,
            Element::F => 16.0,
            Element::N | Element::O | Element::Cl => 18.0,
            Element::S | Element::P | Element::Br | Element::I => 20.0,
            Element::C => 22.0,
        }
    }

    /// Neutron count of the most abundant isotope.
    pub fn neutron_count(self) -> u8 {
        match self {
            Element::H => 0,
            Element::C => 6,
            Element::N => 7,
            Element::O => 8,
            Element::F => 10,
            Element::P => 16,
            Element::S => 16,
            Element::Cl => 18,
            Element::Br => 45,
            Element::I => 74,
        }
    }

    /// Electrons per shell of the neutral atom, innermost first.
    pub fn electron_shells(self) -> &'static [u8] {
        match self {
            Element::H => &[1],
            Element::C => &[2, 4],
            Element::N => &[2, 5],
            Element::O => &[2, 6],
            Element::F => &[2, 7],
            Element::P => &[2, 8, 5],
            Element::S => &[2, 8, 6],
            Element::Cl => &[2, 8, 7],
            Element::Br => &[2, 8, 18, 7],
            Element::I => &[2, 8, 18, 18, 7],
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Maximum bond capacity for a symbol; `0` when the symbol is not in the table.
pub fn max_bonds_for(symbol: &str) -> u8 {
    Element::from_symbol(symbol).map_or(0, Element::max_bonds)
}
