//! Naming a drawn molecule against a small catalog of known compounds.
//!
//! Matching is by formula first. When several catalog entries share a formula
//! (ethanol and dimethyl ether are both C2H6O), the connectivity signature
//! decides.

use serde::Serialize;

use crate::formula::mol_formula;
use crate::mol::Mol;

/// A compound the tutor can name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownMolecule {
    pub name: &'static str,
    /// Hill-order formula, as produced by [`mol_formula`].
    pub formula: &'static str,
    pub atoms: &'static [(&'static str, u32)],
    /// Canonical signature of the fully saturated structure, see
    /// [`connectivity_signature`].
    pub connectivity: &'static str,
}

/// How an identification was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchKind {
    /// The formula is unique in the catalog.
    Formula,
    /// Several entries share the formula; the signature picked one.
    Connectivity,
    /// Several entries share the formula and none has this signature. The
    /// first candidate is reported, which may be the wrong compound.
    Ambiguous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identification {
    pub molecule: &'static KnownMolecule,
    pub kind: MatchKind,
}

pub static KNOWN_MOLECULES: &[KnownMolecule] = &[
    KnownMolecule {
        name: "Agua",
        formula: "H2O",
        atoms: &[("H", 2), ("O", 1)],
        connectivity: "H-O,H-O",
    },
    KnownMolecule {
        name: "Metano",
        formula: "CH4",
        atoms: &[("C", 1), ("H", 4)],
        connectivity: "C-H,C-H,C-H,C-H",
    },
    KnownMolecule {
        name: "Metanol",
        formula: "CH4O",
        atoms: &[("C", 1), ("H", 4), ("O", 1)],
        connectivity: "C-H,C-H,C-H,C-O,H-O",
    },
    KnownMolecule {
        name: "Etanol",
        formula: "C2H6O",
        atoms: &[("C", 2), ("H", 6), ("O", 1)],
        connectivity: "C-C,C-H,C-H,C-H,C-H,C-H,C-O,H-O",
    },
    KnownMolecule {
        name: "Ácido fórmico",
        formula: "CH2O2",
        atoms: &[("C", 1), ("H", 2), ("O", 2)],
        connectivity: "C-H,C-O,C=O,H-O",
    },
    KnownMolecule {
        name: "Ácido acético",
        formula: "C2H4O2",
        atoms: &[("C", 2), ("H", 4), ("O", 2)],
        connectivity: "C-C,C-H,C-H,C-H,C-O,C=O,H-O",
    },
    KnownMolecule {
        name: "Formaldehído",
        formula: "CH2O",
        atoms: &[("C", 1), ("H", 2), ("O", 1)],
        connectivity: "C-H,C-H,C=O",
    },
    KnownMolecule {
        name: "Acetona",
        formula: "C3H6O",
        atoms: &[("C", 3), ("H", 6), ("O", 1)],
        connectivity: "C-C,C-C,C-H,C-H,C-H,C-H,C-H,C-H,C=O",
    },
    KnownMolecule {
        name: "Etilamina",
        formula: "C2H7N",
        atoms: &[("C", 2), ("H", 7), ("N", 1)],
        connectivity: "C-C,C-H,C-H,C-H,C-H,C-H,C-N,H-N,H-N",
    },
    KnownMolecule {
        name: "Dimetiléter",
        formula: "C2H6O",
        atoms: &[("C", 2), ("H", 6), ("O", 1)],
        connectivity: "C-H,C-H,C-H,C-H,C-H,C-H,C-O,C-O",
    },
    KnownMolecule {
        name: "Eteno (Etileno)",
        formula: "C2H4",
        atoms: &[("C", 2), ("H", 4)],
        connectivity: "C-H,C-H,C-H,C-H,C=C",
    },
    KnownMolecule {
        name: "Etino (Acetileno)",
        formula: "C2H2",
        atoms: &[("C", 2), ("H", 2)],
        connectivity: "C-H,C-H,C≡C",
    },
    KnownMolecule {
        name: "Amoníaco",
        formula: "H3N",
        atoms: &[("H", 3), ("N", 1)],
        connectivity: "H-N,H-N,H-N",
    },
    KnownMolecule {
        name: "Ácido cianhídrico",
        formula: "CHN",
        atoms: &[("C", 1), ("H", 1), ("N", 1)],
        connectivity: "C-H,C≡N",
    },
    KnownMolecule {
        name: "Peróxido de hidrógeno",
        formula: "H2O2",
        atoms: &[("H", 2), ("O", 2)],
        connectivity: "H-O,H-O,O-O",
    },
    KnownMolecule {
        name: "Metilamina",
        formula: "CH5N",
        atoms: &[("C", 1), ("H", 5), ("N", 1)],
        connectivity: "C-H,C-H,C-H,C-N,H-N,H-N",
    },
    KnownMolecule {
        name: "Etano",
        formula: "C2H6",
        atoms: &[("C", 2), ("H", 6)],
        connectivity: "C-C,C-H,C-H,C-H,C-H,C-H,C-H",
    },
    KnownMolecule {
        name: "Propano",
        formula: "C3H8",
        atoms: &[("C", 3), ("H", 8)],
        connectivity: "C-C,C-C,C-H,C-H,C-H,C-H,C-H,C-H,C-H,C-H",
    },
    KnownMolecule {
        name: "Glicina",
        formula: "C2H5NO2",
        atoms: &[("C", 2), ("H", 5), ("N", 1), ("O", 2)],
        connectivity: "C-C,C-H,C-H,C-N,C-O,C=O,H-N,H-N,H-O",
    },
];

/// Canonical string for the bond list.
///
/// Each bond becomes `<A><sep><B>` with the two symbols sorted and `sep` one
/// of `-`, `=`, `≡`; the entries are sorted and joined with commas.
pub fn connectivity_signature(mol: &Mol) -> String {
    let mut parts: Vec<String> = mol
        .bonds()
        .filter_map(|b| {
            let mut ends = [mol.atom(b.a)?.element.as_str(), mol.atom(b.b)?.element.as_str()];
            ends.sort_unstable();
            Some(format!("{}{}{}", ends[0], b.order.symbol(), ends[1]))
        })
        .collect();
    parts.sort();
    parts.join(",")
}

/// Looks the molecule up in [`KNOWN_MOLECULES`].
pub fn identify(mol: &Mol) -> Option<Identification> {
    if mol.is_empty() {
        return None;
    }
    let formula = mol_formula(mol);
    let candidates: Vec<&'static KnownMolecule> =
        KNOWN_MOLECULES.iter().filter(|m| m.formula == formula).collect();

    match candidates.as_slice() {
        [] => None,
        [only] => Some(Identification {
            molecule: only,
            kind: MatchKind::Formula,
        }),
        [first, ..] => {
            let signature = connectivity_signature(mol);
            if let Some(exact) = candidates.iter().find(|m| m.connectivity == signature) {
                return Some(Identification {
                    molecule: exact,
                    kind: MatchKind::Connectivity,
                });
            }
            log::warn!(
                "{formula}: no catalog entry has connectivity {signature:?}; falling back to {}",
                first.name
            );
            Some(Identification {
                molecule: first,
                kind: MatchKind::Ambiguous,
            })
        }
    }
}

/// The catalog entry for this molecule, if any.
///
/// Ambiguous formula collisions fall back to the first candidate; use
/// [`identify`] to tell that case apart.
pub fn identify_molecule(mol: &Mol) -> Option<&'static KnownMolecule> {
    identify(mol).map(|i| i.molecule)
}
