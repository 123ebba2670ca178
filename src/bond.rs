use serde::{Deserialize, Serialize};

use crate::ids::{AtomId, BondId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
}

impl BondOrder {
    pub fn from_u8(n: u8) -> Option<BondOrder> {
        match n {
            1 => Some(BondOrder::Single),
            2 => Some(BondOrder::Double),
            3 => Some(BondOrder::Triple),
            _ => None,
        }
    }

    /// Valence units this bond consumes on each endpoint.
    pub fn as_u8(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    /// The next order up, or `None` for a triple bond.
    pub fn increased(self) -> Option<BondOrder> {
        match self {
            BondOrder::Single => Some(BondOrder::Double),
            BondOrder::Double => Some(BondOrder::Triple),
            BondOrder::Triple => None,
        }
    }

    /// Separator used in connectivity signatures: `-`, `=` or `≡`.
    pub fn symbol(self) -> char {
        match self {
            BondOrder::Single => '-',
            BondOrder::Double => '=',
            BondOrder::Triple => '≡',
        }
    }

    /// Spanish label used in tutor prompts.
    pub fn label(self) -> &'static str {
        match self {
            BondOrder::Single => "simple",
            BondOrder::Double => "doble",
            BondOrder::Triple => "triple",
        }
    }
}

impl From<BondOrder> for u8 {
    fn from(order: BondOrder) -> u8 {
        order.as_u8()
    }
}

impl TryFrom<u8> for BondOrder {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        BondOrder::from_u8(n).ok_or_else(|| format!("bond order {n} is not 1, 2 or 3"))
    }
}

/// An undirected bond. `a`/`b` keep the order the bond was drawn in, which
/// only matters for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub id: BondId,
    pub a: AtomId,
    pub b: AtomId,
    pub order: BondOrder,
}

impl Bond {
    /// Whether this bond joins `x` and `y`, in either direction.
    pub fn connects(&self, x: AtomId, y: AtomId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoint opposite `atom`, if `atom` is an endpoint.
    pub fn other(&self, atom: AtomId) -> Option<AtomId> {
        if self.a == atom {
            Some(self.b)
        } else if self.b == atom {
            Some(self.a)
        } else {
            None
        }
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_cycle() {
        assert_eq!(BondOrder::Single.increased(), Some(BondOrder::Double));
        assert_eq!(BondOrder::Double.increased(), Some(BondOrder::Triple));
        assert_eq!(BondOrder::Triple.increased(), None);
    }

    #[test]
    fn order_from_u8() {
        assert_eq!(BondOrder::from_u8(0), None);
        assert_eq!(BondOrder::from_u8(2), Some(BondOrder::Double));
        assert_eq!(BondOrder::from_u8(4), None);
        assert_eq!(BondOrder::Triple.as_u8(), 3);
    }

    #[test]
    fn bond_endpoints_are_undirected() {
        let bond = Bond {
            id: BondId(10),
            a: AtomId(1),
            b: AtomId(2),
            order: BondOrder::Single,
        };
        assert!(bond.connects(AtomId(1), AtomId(2)));
        assert!(bond.connects(AtomId(2), AtomId(1)));
        assert!(!bond.connects(AtomId(1), AtomId(3)));
        assert_eq!(bond.other(AtomId(2)), Some(AtomId(1)));
        assert_eq!(bond.other(AtomId(3)), None);
    }

    #[test]
    fn order_serde_as_integer() {
        let json = serde_json::to_string(&BondOrder::Double).unwrap();
        assert_eq!(json, "2");
        let back: BondOrder = serde_json::from_str("3").unwrap();
        assert_eq!(back, BondOrder::Triple);
        assert!(serde_json::from_str::<BondOrder>("4").is_err());
    }
}
