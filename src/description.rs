//! Molecule descriptions arriving as JSON from the chat assistant.
//!
//! Bonds refer to atoms by zero-based position in the `atoms` list. Loading is
//! forgiving about bonds: anything that would break the graph is dropped with a
//! warning and the rest still loads. A description that does not parse at all
//! leaves the molecule untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bond::BondOrder;
use crate::ids::AtomId;
use crate::mol::Mol;

#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("malformed molecule description: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeDescription {
    pub atoms: Vec<AtomSpec>,
    #[serde(default)]
    pub bonds: Option<Vec<BondSpec>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomSpec {
    pub element: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondSpec {
    pub from: i64,
    pub to: i64,
    #[serde(default)]
    pub order: Option<i64>,
}

impl BondSpec {
    /// Missing or zero order means single; anything outside 1..=3 is `None`.
    fn bond_order(&self) -> Option<BondOrder> {
        match self.order.unwrap_or(0) {
            0 => Some(BondOrder::Single),
            n => u8::try_from(n).ok().and_then(BondOrder::from_u8),
        }
    }
}

/// What a load actually put into the molecule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub atoms: usize,
    pub bonds: usize,
    pub dropped_bonds: usize,
}

pub fn parse_description(json: &str) -> Result<MoleculeDescription, DescriptionError> {
    Ok(serde_json::from_str(json)?)
}

impl Mol {
    /// Replaces the whole molecule with `desc`.
    ///
    /// New atoms and bonds get fresh ids from this molecule's allocator, so ids
    /// from before the load are never reissued.
    pub fn load(&mut self, desc: &MoleculeDescription) -> LoadReport {
        self.clear();

        let ids: Vec<AtomId> = desc
            .atoms
            .iter()
            .map(|a| self.add_atom(a.element.clone(), a.x, a.y))
            .collect();

        let mut report = LoadReport {
            atoms: ids.len(),
            ..LoadReport::default()
        };

        for (i, spec) in desc.bonds.iter().flatten().enumerate() {
            let endpoint = |idx: i64| usize::try_from(idx).ok().and_then(|i| ids.get(i)).copied();
            let (Some(a), Some(b)) = (endpoint(spec.from), endpoint(spec.to)) else {
                log::warn!(
                    "dropping bond #{i}: endpoint {}-{} out of range for {} atoms",
                    spec.from,
                    spec.to,
                    ids.len()
                );
                report.dropped_bonds += 1;
                continue;
            };
            let Some(order) = spec.bond_order() else {
                log::warn!("dropping bond #{i}: unsupported order {:?}", spec.order);
                report.dropped_bonds += 1;
                continue;
            };
            match self.add_bond(a, b, order) {
                Ok(_) => report.bonds += 1,
                Err(e) => {
                    log::warn!("dropping bond #{i}: {e}");
                    report.dropped_bonds += 1;
                }
            }
        }

        log::trace!(
            "loaded {} atoms, {} bonds ({} dropped)",
            report.atoms,
            report.bonds,
            report.dropped_bonds
        );
        report
    }

    /// Parses and loads in one step. On a parse error nothing changes.
    pub fn load_json(&mut self, json: &str) -> Result<LoadReport, DescriptionError> {
        let desc = parse_description(json)?;
        Ok(self.load(&desc))
    }
}
