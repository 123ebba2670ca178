use crate::bond::BondOrder;
use crate::element::Element;

/// Anything that names an element by its symbol.
///
/// The symbol may be unrecognized; callers that need valence data go through
/// [`element`](HasSymbol::element).
pub trait HasSymbol {
    fn symbol(&self) -> &str;

    fn element(&self) -> Option<Element> {
        Element::from_symbol(self.symbol())
    }
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

impl HasSymbol for Element {
    fn symbol(&self) -> &str {
        Element::symbol(*self)
    }

    fn element(&self) -> Option<Element> {
        Some(*self)
    }
}

impl HasSymbol for str {
    fn symbol(&self) -> &str {
        self
    }
}

impl HasSymbol for String {
    fn symbol(&self) -> &str {
        self.as_str()
    }
}

impl<T: HasSymbol + ?Sized> HasSymbol for &T {
    fn symbol(&self) -> &str {
        (**self).symbol()
    }
}
