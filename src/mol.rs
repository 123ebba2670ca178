use std::collections::BTreeMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;
use thiserror::Error;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::ids::{AtomId, BondId, IdAllocator};

/// Why a bond could not be created or strengthened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BondError {
    #[error("cannot bond atom {0} to itself")]
    SameAtom(AtomId),
    #[error("atom {0} is not in the molecule")]
    UnknownAtom(AtomId),
    #[error("bond {0} is not in the molecule")]
    UnknownBond(BondId),
    #[error("atoms {0} and {1} are already bonded")]
    AlreadyBonded(AtomId, AtomId),
    #[error("atom {atom} has no room for {needed} more bond unit(s)")]
    NoCapacity { atom: AtomId, needed: u8 },
    #[error("bond {0} is already triple")]
    MaxOrder(BondId),
}

/// The working molecule: atoms, bonds, and the allocator that names them.
///
/// Backed by an undirected `StableGraph`, so removing an atom drops its bonds
/// with it. Public identity is the [`AtomId`]/[`BondId`] issued here, never a
/// graph index. Iteration is always in id order.
#[derive(Debug, Clone, Default)]
pub struct Mol {
    graph: StableUnGraph<Atom, Bond>,
    atom_index: BTreeMap<AtomId, NodeIndex>,
    bond_index: BTreeMap<BondId, EdgeIndex>,
    ids: IdAllocator,
}

impl Mol {
    pub fn new() -> Self {
        Self::with_ids(IdAllocator::new())
    }

    /// An empty molecule that issues ids from `ids`.
    pub fn with_ids(ids: IdAllocator) -> Self {
        Self {
            graph: StableUnGraph::default(),
            atom_index: BTreeMap::new(),
            bond_index: BTreeMap::new(),
            ids,
        }
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    pub fn atom_count(&self) -> usize {
        self.atom_index.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bond_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atom_index.is_empty()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atom_index.get(&id).map(|&n| &self.graph[n])
    }

    pub fn bond(&self, id: BondId) -> Option<&Bond> {
        self.bond_index.get(&id).map(|&e| &self.graph[e])
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.atom_index.values().map(|&n| &self.graph[n])
    }

    pub fn bonds(&self) -> impl Iterator<Item = &Bond> + '_ {
        self.bond_index.values().map(|&e| &self.graph[e])
    }

    /// Bonds touching `atom`. Empty for an unknown atom.
    pub fn bonds_of(&self, atom: AtomId) -> impl Iterator<Item = &Bond> + '_ {
        self.atom_index
            .get(&atom)
            .into_iter()
            .flat_map(move |&n| self.graph.edges(n).map(|e| e.weight()))
    }

    /// Each neighbor of `atom` together with the bond that reaches it.
    pub fn neighbors(&self, atom: AtomId) -> impl Iterator<Item = (&Atom, &Bond)> + '_ {
        self.bonds_of(atom).filter_map(move |bond| {
            let other = bond.other(atom)?;
            Some((self.atom(other)?, bond))
        })
    }

    pub fn bond_between(&self, a: AtomId, b: AtomId) -> Option<&Bond> {
        let na = *self.atom_index.get(&a)?;
        let nb = *self.atom_index.get(&b)?;
        self.graph.find_edge(na, nb).map(|e| &self.graph[e])
    }

    pub fn add_atom(&mut self, element: impl Into<String>, x: f64, y: f64) -> AtomId {
        let id = self.ids.next_atom();
        let node = self.graph.add_node(Atom::new(id, element, x, y));
        self.atom_index.insert(id, node);
        id
    }

    /// Adds a bond of the given order, keeping every invariant of the graph:
    /// distinct endpoints, one bond per pair, and neither endpoint pushed past
    /// its element's capacity.
    pub fn add_bond(&mut self, a: AtomId, b: AtomId, order: BondOrder) -> Result<BondId, BondError> {
        if a == b {
            return Err(BondError::SameAtom(a));
        }
        let na = *self.atom_index.get(&a).ok_or(BondError::UnknownAtom(a))?;
        let nb = *self.atom_index.get(&b).ok_or(BondError::UnknownAtom(b))?;
        if self.graph.find_edge(na, nb).is_some() {
            return Err(BondError::AlreadyBonded(a, b));
        }
        let needed = order.as_u8();
        for atom in [a, b] {
            if crate::valence::remaining_capacity(self, atom) < needed {
                return Err(BondError::NoCapacity { atom, needed });
            }
        }
        let id = self.ids.next_bond();
        let edge = self.graph.add_edge(na, nb, Bond { id, a, b, order });
        self.bond_index.insert(id, edge);
        Ok(id)
    }

    /// Raises a bond by one order and returns the new order.
    pub fn increase_bond_order(&mut self, id: BondId) -> Result<BondOrder, BondError> {
        let bond = self.bond(id).ok_or(BondError::UnknownBond(id))?;
        let next = bond.order.increased().ok_or(BondError::MaxOrder(id))?;
        for atom in [bond.a, bond.b] {
            if crate::valence::remaining_capacity(self, atom) < 1 {
                return Err(BondError::NoCapacity { atom, needed: 1 });
            }
        }
        let edge = self.bond_index[&id];
        self.graph[edge].order = next;
        Ok(next)
    }

    pub fn remove_bond(&mut self, id: BondId) -> Option<Bond> {
        let edge = self.bond_index.remove(&id)?;
        self.graph.remove_edge(edge)
    }

    /// Removes an atom and every bond touching it.
    pub fn remove_atom(&mut self, id: AtomId) -> Option<Atom> {
        let node = self.atom_index.remove(&id)?;
        let incident: Vec<BondId> = self.graph.edges(node).map(|e| e.weight().id).collect();
        for bond in incident {
            self.bond_index.remove(&bond);
        }
        self.graph.remove_node(node)
    }

    pub fn move_atom(&mut self, id: AtomId, x: f64, y: f64) -> bool {
        match self.atom_index.get(&id) {
            Some(&n) => {
                let atom = &mut self.graph[n];
                atom.x = x;
                atom.y = y;
                true
            }
            None => false,
        }
    }

    /// Drops every atom and bond. The id allocator keeps counting.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.atom_index.clear();
        self.bond_index.clear();
    }
}
