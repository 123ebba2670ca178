use serde::{Deserialize, Serialize};

use crate::ids::AtomId;

/// A placed atom.
///
/// `element` is the symbol as given. It is not validated against the element
/// table: an unknown symbol is kept so it still shows up in the formula, and
/// it simply has no bonding capacity.
///
/// # Examples
///
/// ```
/// use molsketch::{Atom, AtomId, Element, HasSymbol};
///
/// let carbon = Atom::new(AtomId(1), "C", 30.0, 60.0);
/// assert_eq!(carbon.element(), Some(Element::C));
/// assert_eq!(carbon.position(), [30.0, 60.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub id: AtomId,
    pub element: String,
    pub x: f64,
    pub y: f64,
}

impl Atom {
    pub fn new(id: AtomId, element: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id,
            element: element.into(),
            x,
            y,
        }
    }

    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn is(&self, symbol: &str) -> bool {
        self.element == symbol
    }
}

impl crate::traits::HasSymbol for Atom {
    fn symbol(&self) -> &str {
        &self.element
    }
}
