//! Bond accounting: how much of an atom's valence is used, and whether a bond
//! may be drawn or strengthened.
//!
//! None of these functions fail. An unknown atom id or an unrecognized element
//! symbol counts as zero capacity, which quietly prevents any bonding.

use crate::atom::Atom;
use crate::bond::Bond;
use crate::element::max_bonds_for;
use crate::ids::AtomId;
use crate::mol::Mol;
use crate::traits::HasBondOrder;

/// Sum of bond orders over all bonds touching `atom`.
pub fn used_bond_capacity(mol: &Mol, atom: AtomId) -> u8 {
    mol.bonds_of(atom).map(|b| b.bond_order().as_u8()).sum()
}

/// `max_bonds - used`, or `0` for an unknown atom or element.
pub fn remaining_capacity(mol: &Mol, atom: AtomId) -> u8 {
    let Some(a) = mol.atom(atom) else {
        return 0;
    };
    max_bonds_for(&a.element).saturating_sub(used_bond_capacity(mol, atom))
}

/// Whether a new single bond may join `a` and `b`.
pub fn can_form_bond(mol: &Mol, a: AtomId, b: AtomId) -> bool {
    if a == b || mol.bond_between(a, b).is_some() {
        return false;
    }
    remaining_capacity(mol, a) >= 1 && remaining_capacity(mol, b) >= 1
}

/// Whether `bond` has room for one more unit of order.
///
/// The bond's own current order already counts against both endpoints, so
/// this asks whether each endpoint is strictly below its capacity.
pub fn can_increase_bond_order(mol: &Mol, bond: &Bond) -> bool {
    if bond.order.increased().is_none() {
        return false;
    }
    let (Some(a), Some(b)) = (mol.atom(bond.a), mol.atom(bond.b)) else {
        return false;
    };
    has_headroom(mol, a) && has_headroom(mol, b)
}

fn has_headroom(mol: &Mol, atom: &Atom) -> bool {
    used_bond_capacity(mol, atom.id) < max_bonds_for(&atom.element)
}

/// Atoms that can still take more bonds, with how many units each is missing.
pub fn unsatisfied_atoms(mol: &Mol) -> Vec<(&Atom, u8)> {
    mol.atoms()
        .filter_map(|a| {
            let rem = remaining_capacity(mol, a.id);
            (rem > 0).then_some((a, rem))
        })
        .collect()
}

/// A non-empty molecule with at least one bond where every atom is saturated.
pub fn is_complete(mol: &Mol) -> bool {
    !mol.is_empty() && mol.bond_count() > 0 && unsatisfied_atoms(mol).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondOrder;
    use crate::ids::BondId;

    #[test]
    fn isolated_atom_uses_nothing() {
        let mut mol = Mol::new();
        let c = mol.add_atom("C", 0.0, 0.0);
        assert_eq!(used_bond_capacity(&mol, c), 0);
        assert_eq!(remaining_capacity(&mol, c), 4);
    }

    #[test]
    fn counts_bond_orders() {
        let mut mol = Mol::new();
        let c = mol.add_atom("C", 0.0, 0.0);
        let o = mol.add_atom("O", 30.0, 0.0);
        let h = mol.add_atom("H", -30.0, 0.0);
        mol.add_bond(c, o, BondOrder::Double).unwrap();
        mol.add_bond(h, c, BondOrder::Single).unwrap();
        assert_eq!(used_bond_capacity(&mol, c), 3);
        assert_eq!(remaining_capacity(&mol, c), 1);
        assert_eq!(remaining_capacity(&mol, o), 0);
        assert_eq!(remaining_capacity(&mol, h), 0);
    }

    #[test]
    fn saturated_carbon_has_no_room() {
        let mut mol = Mol::new();
        let c = mol.add_atom("C", 0.0, 0.0);
        for i in 0..4 {
            let h = mol.add_atom("H", i as f64 * 30.0, 30.0);
            mol.add_bond(c, h, BondOrder::Single).unwrap();
        }
        assert_eq!(remaining_capacity(&mol, c), 0);
    }

    #[test]
    fn unknown_element_and_atom_have_zero_capacity() {
        let mut mol = Mol::new();
        let x = mol.add_atom("Xx", 0.0, 0.0);
        assert_eq!(remaining_capacity(&mol, x), 0);
        assert_eq!(remaining_capacity(&mol, AtomId(999)), 0);
        assert_eq!(used_bond_capacity(&mol, AtomId(999)), 0);
    }

    #[test]
    fn can_form_bond_rules() {
        let mut mol = Mol::new();
        let h = mol.add_atom("H", 0.0, 0.0);
        let c = mol.add_atom("C", 30.0, 0.0);
        let h2 = mol.add_atom("H", 60.0, 0.0);
        assert!(!can_form_bond(&mol, c, c));
        assert!(can_form_bond(&mol, h, c));
        mol.add_bond(h, c, BondOrder::Single).unwrap();
        assert!(!can_form_bond(&mol, h, c));
        assert!(!can_form_bond(&mol, c, h));
        assert!(!can_form_bond(&mol, h, h2));
        assert!(can_form_bond(&mol, c, h2));
    }

    #[test]
    fn triple_bond_cannot_increase() {
        let mut mol = Mol::new();
        let a = mol.add_atom("C", 0.0, 0.0);
        let b = mol.add_atom("C", 30.0, 0.0);
        let id = mol.add_bond(a, b, BondOrder::Triple).unwrap();
        assert!(!can_increase_bond_order(&mol, mol.bond(id).unwrap()));
    }

    #[test]
    fn single_and_double_carbon_bonds_can_increase() {
        let mut mol = Mol::new();
        let a = mol.add_atom("C", 0.0, 0.0);
        let b = mol.add_atom("C", 30.0, 0.0);
        let id = mol.add_bond(a, b, BondOrder::Single).unwrap();
        assert!(can_increase_bond_order(&mol, mol.bond(id).unwrap()));
        mol.increase_bond_order(id).unwrap();
        assert!(can_increase_bond_order(&mol, mol.bond(id).unwrap()));
    }

    #[test]
    fn full_endpoint_blocks_increase() {
        let mut mol = Mol::new();
        let a = mol.add_atom("C", 0.0, 0.0);
        let b = mol.add_atom("C", 30.0, 0.0);
        let id = mol.add_bond(a, b, BondOrder::Single).unwrap();
        for i in 0..3 {
            let h = mol.add_atom("H", i as f64 * 30.0, 30.0);
            mol.add_bond(a, h, BondOrder::Single).unwrap();
        }
        assert!(!can_increase_bond_order(&mol, mol.bond(id).unwrap()));
    }

    #[test]
    fn detached_bond_cannot_increase() {
        let mol = Mol::new();
        let bond = Bond {
            id: BondId(100),
            a: AtomId(1),
            b: AtomId(2),
            order: BondOrder::Single,
        };
        assert!(!can_increase_bond_order(&mol, &bond));
    }

    #[test]
    fn unsatisfied_and_complete() {
        let mut mol = Mol::new();
        let o = mol.add_atom("O", 0.0, 0.0);
        let h1 = mol.add_atom("H", 30.0, 0.0);
        mol.add_bond(o, h1, BondOrder::Single).unwrap();
        let open: Vec<(AtomId, u8)> = unsatisfied_atoms(&mol).iter().map(|(a, n)| (a.id, *n)).collect();
        assert_eq!(open, [(o, 1)]);
        assert!(!is_complete(&mol));

        let h2 = mol.add_atom("H", -30.0, 0.0);
        mol.add_bond(o, h2, BondOrder::Single).unwrap();
        assert!(is_complete(&mol));
    }

    #[test]
    fn unbonded_molecule_is_not_complete() {
        let mut mol = Mol::new();
        mol.add_atom("Xx", 0.0, 0.0);
        assert!(unsatisfied_atoms(&mol).is_empty());
        assert!(!is_complete(&mol));
    }
}
