//! Functional group detection.
//!
//! Every atom's immediate neighborhood (element and bond order of each
//! neighbor) is tested against a fixed set of templates. Raw matches overlap,
//! so they are reduced afterwards: a match whose atoms are covered by an
//! equal-or-larger accepted match is dropped, and an accepted match strictly
//! contained in a newcomer is evicted.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::atom::Atom;
use crate::bond::BondOrder;
use crate::ids::AtomId;
use crate::mol::Mol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FunctionalGroup {
    Hydroxyl,
    Carboxyl,
    Aldehyde,
    Ketone,
    /// C=O that fits none of the more specific carbonyl patterns.
    Carbonyl,
    Amino,
    Ether,
    Ester,
    Amide,
}

impl FunctionalGroup {
    /// Display name shown to students.
    pub fn name(self) -> &'static str {
        match self {
            FunctionalGroup::Hydroxyl => "Hidroxilo (-OH)",
            FunctionalGroup::Carboxyl => "Carboxilo (-COOH)",
            FunctionalGroup::Aldehyde => "Aldehído (-CHO)",
            FunctionalGroup::Ketone => "Cetona (C=O)",
            FunctionalGroup::Carbonyl => "Carbonilo (C=O)",
            FunctionalGroup::Amino => "Amino (-NH₂)",
            FunctionalGroup::Ether => "Éter (C-O-C)",
            FunctionalGroup::Ester => "Éster (-COO-)",
            FunctionalGroup::Amide => "Amida (-CONH-)",
        }
    }
}

impl std::fmt::Display for FunctionalGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One detected group: which atoms form it and the atom it was found from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMatch {
    pub group: FunctionalGroup,
    pub atoms: BTreeSet<AtomId>,
    pub center: AtomId,
}

impl GroupMatch {
    fn new(group: FunctionalGroup, center: AtomId, atoms: impl IntoIterator<Item = AtomId>) -> Self {
        let mut set: BTreeSet<AtomId> = atoms.into_iter().collect();
        set.insert(center);
        Self {
            group,
            atoms: set,
            center,
        }
    }

    pub fn name(&self) -> &'static str {
        self.group.name()
    }
}

/// Neighbors of one atom in id order, each with the bond order reaching it.
struct Neighborhood<'a> {
    entries: Vec<(&'a Atom, BondOrder)>,
}

impl<'a> Neighborhood<'a> {
    fn of(mol: &'a Mol, atom: AtomId) -> Self {
        let mut entries: Vec<(&Atom, BondOrder)> =
            mol.neighbors(atom).map(|(a, b)| (a, b.order)).collect();
        entries.sort_by_key(|(a, _)| a.id);
        Self { entries }
    }

    fn bonded(&self, symbol: &'a str, order: BondOrder) -> impl Iterator<Item = &'a Atom> + '_ {
        self.entries
            .iter()
            .filter(move |(a, o)| a.is(symbol) && *o == order)
            .map(|(a, _)| *a)
    }

    fn count(&self, symbol: &str, order: BondOrder) -> usize {
        self.entries
            .iter()
            .filter(|(a, o)| a.is(symbol) && *o == order)
            .count()
    }

    fn has(&self, symbol: &str) -> bool {
        self.entries.iter().any(|(a, _)| a.is(symbol))
    }

    fn first(&self, symbol: &'a str) -> Option<&'a Atom> {
        self.entries.iter().map(|(a, _)| *a).find(|a| a.is(symbol))
    }
}

/// Detects every functional group in the molecule, subsumed matches removed.
pub fn detect_functional_groups(mol: &Mol) -> Vec<GroupMatch> {
    let mut raw = Vec::new();
    for atom in mol.atoms() {
        let around = Neighborhood::of(mol, atom.id);
        match atom.element.as_str() {
            "O" => {
                raw.extend(hydroxyl(mol, atom, &around));
                raw.extend(ether(atom, &around));
            }
            "C" => {
                raw.extend(carbonyl_family(mol, atom, &around));
                raw.extend(ester(mol, atom, &around));
                raw.extend(amide(atom, &around));
            }
            "N" => raw.extend(amino(atom, &around)),
            _ => {}
        }
    }
    let groups = remove_subsumed(raw);
    log::trace!("detected {} functional group(s)", groups.len());
    groups
}

/// Every atom that belongs to at least one detected group.
pub fn grouped_atoms(groups: &[GroupMatch]) -> BTreeSet<AtomId> {
    groups.iter().flat_map(|g| g.atoms.iter().copied()).collect()
}

fn remove_subsumed(candidates: Vec<GroupMatch>) -> Vec<GroupMatch> {
    let mut kept: Vec<GroupMatch> = Vec::new();
    for g in candidates {
        let covered = kept
            .iter()
            .any(|u| g.atoms.is_subset(&u.atoms) && u.atoms.len() >= g.atoms.len());
        if covered {
            continue;
        }
        kept.retain(|u| !(u.atoms.is_subset(&g.atoms) && u.atoms.len() < g.atoms.len()));
        kept.push(g);
    }
    kept
}

fn hydroxyl(mol: &Mol, oxygen: &Atom, around: &Neighborhood) -> Option<GroupMatch> {
    let hs: Vec<&Atom> = around.bonded("H", BondOrder::Single).collect();
    let cs: Vec<&Atom> = around.bonded("C", BondOrder::Single).collect();
    if hs.len() != 1 || cs.len() != 1 {
        return None;
    }
    // An OH on a carbon that also carries =O belongs to a carboxyl.
    if Neighborhood::of(mol, cs[0].id).count("O", BondOrder::Double) > 0 {
        return None;
    }
    Some(GroupMatch::new(FunctionalGroup::Hydroxyl, oxygen.id, [hs[0].id]))
}

fn carbonyl_family(mol: &Mol, carbon: &Atom, around: &Neighborhood) -> Option<GroupMatch> {
    let double_o: Vec<&Atom> = around.bonded("O", BondOrder::Double).collect();
    if double_o.len() != 1 {
        return None;
    }
    let oxo = double_o[0].id;

    let hydroxy_o: Vec<&Atom> = around
        .bonded("O", BondOrder::Single)
        .filter(|o| Neighborhood::of(mol, o.id).has("H"))
        .collect();
    let c_count = around.count("C", BondOrder::Single);
    let first_h = around.bonded("H", BondOrder::Single).next();

    if hydroxy_o.len() == 1 {
        let oh = hydroxy_o[0].id;
        let h_of_oh = Neighborhood::of(mol, oh).first("H").map(|h| h.id);
        let atoms = [oxo, oh].into_iter().chain(h_of_oh);
        return Some(GroupMatch::new(FunctionalGroup::Carboxyl, carbon.id, atoms));
    }
    if let (Some(h), 0) = (first_h, c_count) {
        return Some(GroupMatch::new(FunctionalGroup::Aldehyde, carbon.id, [oxo, h.id]));
    }
    let group = if c_count == 2 {
        FunctionalGroup::Ketone
    } else {
        FunctionalGroup::Carbonyl
    };
    Some(GroupMatch::new(group, carbon.id, [oxo]))
}

fn amino(nitrogen: &Atom, around: &Neighborhood) -> Option<GroupMatch> {
    let hs: Vec<AtomId> = around.bonded("H", BondOrder::Single).map(|a| a.id).collect();
    if hs.len() != 2 || around.count("C", BondOrder::Single) != 1 {
        return None;
    }
    Some(GroupMatch::new(FunctionalGroup::Amino, nitrogen.id, hs))
}

fn ether(oxygen: &Atom, around: &Neighborhood) -> Option<GroupMatch> {
    let cs: Vec<AtomId> = around.bonded("C", BondOrder::Single).map(|a| a.id).collect();
    (cs.len() == 2).then(|| GroupMatch::new(FunctionalGroup::Ether, oxygen.id, cs))
}

fn ester(mol: &Mol, carbon: &Atom, around: &Neighborhood) -> Option<GroupMatch> {
    let double_o: Vec<&Atom> = around.bonded("O", BondOrder::Double).collect();
    let bridge_o: Vec<&Atom> = around
        .bonded("O", BondOrder::Single)
        .filter(|o| {
            Neighborhood::of(mol, o.id)
                .entries
                .iter()
                .any(|(n, _)| n.is("C") && n.id != carbon.id)
        })
        .collect();
    if double_o.len() != 1 || bridge_o.len() != 1 {
        return None;
    }
    if Neighborhood::of(mol, bridge_o[0].id).has("H") {
        return None;
    }
    Some(GroupMatch::new(
        FunctionalGroup::Ester,
        carbon.id,
        [double_o[0].id, bridge_o[0].id],
    ))
}

fn amide(carbon: &Atom, around: &Neighborhood) -> Option<GroupMatch> {
    let double_o: Vec<&Atom> = around.bonded("O", BondOrder::Double).collect();
    let ns: Vec<&Atom> = around.bonded("N", BondOrder::Single).collect();
    if double_o.len() != 1 || ns.len() != 1 {
        return None;
    }
    Some(GroupMatch::new(FunctionalGroup::Amide, carbon.id, [double_o[0].id, ns[0].id]))
}
