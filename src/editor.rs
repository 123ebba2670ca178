//! Headless editing surface for the molecule builder.
//!
//! [`Editor`] owns the molecule and the little bit of interaction state the
//! canvas needs: the active tool, the element to place, the first atom of a
//! pending bond, and an in-progress drag. Pointer events arrive in canvas
//! coordinates. Every derived view ([`Analysis`], the tutor prompt) is
//! recomputed from the graph on request.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::bond::BondOrder;
use crate::config::EditorConfig;
use crate::description::{LoadReport, MoleculeDescription};
use crate::element::Element;
use crate::formula::mol_formula;
use crate::groups::{detect_functional_groups, grouped_atoms, GroupMatch};
use crate::identify::{identify, Identification};
use crate::ids::{AtomId, BondId, IdAllocator};
use crate::mol::Mol;
use crate::prompt::molecule_to_prompt;
use crate::traits::HasSymbol;
use crate::valence::{can_form_bond, can_increase_bond_order, is_complete, unsatisfied_atoms};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Tool {
    #[default]
    Place,
    Erase,
}

/// What a pointer release did to the molecule or the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Nothing,
    Placed(AtomId),
    Moved(AtomId),
    BondStarted(AtomId),
    BondCancelled,
    Bonded(BondId),
    /// The bond was raised to the given order, or removed when `None`.
    Cycled(BondId, Option<BondOrder>),
    DeletedAtom(AtomId),
    DeletedBond(BondId),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    atom: AtomId,
    start: (f64, f64),
    dragging: bool,
}

/// An atom that can still take more bonds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenValence {
    pub atom: AtomId,
    pub element: String,
    pub missing: u8,
}

/// Everything the builder shows next to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub formula: String,
    pub identification: Option<Identification>,
    pub groups: Vec<GroupMatch>,
    pub unsatisfied: Vec<OpenValence>,
    pub complete: bool,
}

impl Analysis {
    pub fn of(mol: &Mol) -> Self {
        let unsatisfied = unsatisfied_atoms(mol)
            .into_iter()
            .map(|(a, missing)| OpenValence {
                atom: a.id,
                element: a.element.clone(),
                missing,
            })
            .collect();
        Self {
            formula: mol_formula(mol),
            identification: identify(mol),
            groups: detect_functional_groups(mol),
            unsatisfied,
            complete: is_complete(mol),
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.identification.map(|i| i.molecule.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    mol: Mol,
    config: EditorConfig,
    tool: Tool,
    selected: Element,
    viewed: Element,
    bond_start: Option<AtomId>,
    drag: Option<Drag>,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// An editor whose molecule issues ids from `ids`.
    pub fn with_ids(config: EditorConfig, ids: IdAllocator) -> Self {
        Self {
            mol: Mol::with_ids(ids),
            ..Self::new(config)
        }
    }

    pub fn mol(&self) -> &Mol {
        &self.mol
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switching tools drops any pending bond and drag.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.bond_start = None;
        self.drag = None;
    }

    pub fn selected_element(&self) -> Element {
        self.selected
    }

    /// Element shown in the Bohr-model panel: the last one picked from the
    /// palette, clicked on the canvas, or passed to [`Editor::view_element`].
    pub fn viewed_element(&self) -> Element {
        self.viewed
    }

    pub fn bond_start(&self) -> Option<AtomId> {
        self.bond_start
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|d| d.dragging)
    }

    /// Picks the element to place. Returns `false` for an unknown symbol.
    pub fn select_element(&mut self, symbol: &str) -> bool {
        let Some(el) = Element::from_symbol(symbol) else {
            log::debug!("ignoring unknown element {symbol:?}");
            return false;
        };
        self.selected = el;
        self.viewed = el;
        self.bond_start = None;
        self.tool = Tool::Place;
        true
    }

    /// Shows an element in the Bohr-model panel without touching the
    /// selection or the tool. Returns `false` for an unknown symbol.
    pub fn view_element(&mut self, symbol: &str) -> bool {
        let Some(el) = Element::from_symbol(symbol) else {
            log::debug!("no Bohr model for {symbol:?}");
            return false;
        };
        self.viewed = el;
        true
    }

    /// First atom, in id order, whose disc (plus slack) contains the point.
    pub fn atom_at(&self, x: f64, y: f64) -> Option<AtomId> {
        self.mol
            .atoms()
            .find(|a| {
                let r = a
                    .element()
                    .map_or(self.config.fallback_radius, Element::radius)
                    + self.config.atom_hit_slack;
                let (dx, dy) = (a.x - x, a.y - y);
                dx * dx + dy * dy <= r * r
            })
            .map(|a| a.id)
    }

    /// First bond, in id order, whose segment passes within tolerance.
    pub fn bond_at(&self, x: f64, y: f64) -> Option<BondId> {
        self.mol
            .bonds()
            .find(|b| {
                let (Some(p), Some(q)) = (self.mol.atom(b.a), self.mol.atom(b.b)) else {
                    return false;
                };
                let (dx, dy) = (q.x - p.x, q.y - p.y);
                let len_sq = dx * dx + dy * dy;
                if len_sq == 0.0 {
                    return false;
                }
                let t = (((x - p.x) * dx + (y - p.y) * dy) / len_sq).clamp(0.0, 1.0);
                let (px, py) = (p.x + t * dx, p.y + t * dy);
                ((x - px).powi(2) + (y - py).powi(2)).sqrt() < self.config.bond_hit_tolerance
            })
            .map(|b| b.id)
    }

    /// Places the selected element at the nearest grid point, unless an atom
    /// is already there.
    pub fn place_atom(&mut self, x: f64, y: f64) -> Option<AtomId> {
        let (sx, sy) = self.config.snap(x, y);
        if let Some(existing) = self.atom_at(sx, sy) {
            log::debug!("grid point ({sx}, {sy}) already holds {existing}");
            return None;
        }
        Some(self.mol.add_atom(self.selected.symbol(), sx, sy))
    }

    pub fn create_bond(&mut self, a: AtomId, b: AtomId) -> Option<BondId> {
        if !can_form_bond(&self.mol, a, b) {
            log::debug!("cannot bond {a} and {b}");
            return None;
        }
        match self.mol.add_bond(a, b, BondOrder::Single) {
            Ok(id) => Some(id),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        }
    }

    /// Single, double, triple, then gone. A bond that cannot be raised
    /// because an endpoint is full is removed straight away.
    pub fn cycle_bond(&mut self, id: BondId) -> Option<BondOrder> {
        let Some(bond) = self.mol.bond(id) else {
            log::debug!("no bond {id} to cycle");
            return None;
        };
        if can_increase_bond_order(&self.mol, bond) {
            match self.mol.increase_bond_order(id) {
                Ok(order) => return Some(order),
                Err(e) => log::debug!("{e}"),
            }
        }
        self.mol.remove_bond(id);
        None
    }

    pub fn delete_atom(&mut self, id: AtomId) -> bool {
        if self.bond_start == Some(id) {
            self.bond_start = None;
        }
        if self.drag.is_some_and(|d| d.atom == id) {
            self.drag = None;
        }
        self.mol.remove_atom(id).is_some()
    }

    pub fn delete_bond(&mut self, id: BondId) -> bool {
        self.mol.remove_bond(id).is_some()
    }

    pub fn clear(&mut self) {
        self.mol.clear();
        self.bond_start = None;
        self.drag = None;
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.tool == Tool::Erase {
            return;
        }
        self.drag = self.atom_at(x, y).map(|atom| Drag {
            atom,
            start: (x, y),
            dragging: false,
        });
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if !drag.dragging {
            let (dx, dy) = (x - drag.start.0, y - drag.start.1);
            drag.dragging = (dx * dx + dy * dy).sqrt() > self.config.drag_threshold;
        }
        if drag.dragging {
            let atom = drag.atom;
            self.mol.move_atom(atom, x, y);
        }
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> Edit {
        if self.tool == Tool::Erase {
            return self.erase_at(x, y);
        }

        if let Some(drag) = self.drag.take() {
            if drag.dragging {
                let (sx, sy) = self.config.snap(x, y);
                self.mol.move_atom(drag.atom, sx, sy);
                return Edit::Moved(drag.atom);
            }
            return self.click_atom(drag.atom);
        }

        if let Some(bond) = self.bond_at(x, y) {
            self.bond_start = None;
            return Edit::Cycled(bond, self.cycle_bond(bond));
        }

        self.bond_start = None;
        self.place_atom(x, y).map_or(Edit::Nothing, Edit::Placed)
    }

    /// Secondary click: removes the atom under the pointer, whatever the tool.
    pub fn context_click(&mut self, x: f64, y: f64) -> Option<AtomId> {
        let atom = self.atom_at(x, y)?;
        self.delete_atom(atom).then_some(atom)
    }

    fn erase_at(&mut self, x: f64, y: f64) -> Edit {
        if let Some(atom) = self.atom_at(x, y) {
            self.delete_atom(atom);
            return Edit::DeletedAtom(atom);
        }
        if let Some(bond) = self.bond_at(x, y) {
            self.delete_bond(bond);
            return Edit::DeletedBond(bond);
        }
        Edit::Nothing
    }

    fn click_atom(&mut self, atom: AtomId) -> Edit {
        if let Some(el) = self.mol.atom(atom).and_then(|a| a.element()) {
            self.viewed = el;
        }
        match self.bond_start.take() {
            None => {
                self.bond_start = Some(atom);
                Edit::BondStarted(atom)
            }
            Some(start) if start == atom => Edit::BondCancelled,
            Some(start) => self.create_bond(start, atom).map_or(Edit::Nothing, Edit::Bonded),
        }
    }

    /// Replaces the molecule with a description from the chat assistant.
    pub fn load(&mut self, desc: &MoleculeDescription) -> LoadReport {
        self.bond_start = None;
        self.drag = None;
        self.mol.load(desc)
    }

    pub fn analysis(&self) -> Analysis {
        Analysis::of(&self.mol)
    }

    /// Atoms that belong to some detected functional group.
    pub fn highlighted_atoms(&self) -> BTreeSet<AtomId> {
        grouped_atoms(&detect_functional_groups(&self.mol))
    }

    /// The tutor prompt, or `None` while the canvas is empty.
    pub fn explain_prompt(&self) -> Option<String> {
        (!self.mol.is_empty()).then(|| molecule_to_prompt(&self.mol))
    }

    pub fn is_complete(&self) -> bool {
        is_complete(&self.mol)
    }
}
