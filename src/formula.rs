//! Molecular formula in Hill order.
//!
//! [`mol_formula`] lists C first, then H, then every other symbol
//! alphabetically, with counts of one left out. Without carbon the hydrogen
//! still comes first, which for the palette elements matches plain
//! alphabetical order anyway (`H2O`, `H3N`).

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::mol::Mol;
use crate::traits::HasSymbol;

/// Count of each element symbol, keyed alphabetically.
pub fn element_counts<I>(atoms: I) -> BTreeMap<String, u32>
where
    I: IntoIterator,
    I::Item: HasSymbol,
{
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for a in atoms {
        *counts.entry(a.symbol().to_owned()).or_default() += 1;
    }
    counts
}

/// Hill-order formula for any collection of symbol-bearing items.
///
/// ```
/// use molsketch::formula::formula_of;
///
/// assert_eq!(formula_of(["C", "H", "H", "H", "H"]), "CH4");
/// assert_eq!(formula_of(["H", "O", "H"]), "H2O");
/// assert_eq!(formula_of(Vec::<&str>::new()), "");
/// ```
pub fn formula_of<I>(atoms: I) -> String
where
    I: IntoIterator,
    I::Item: HasSymbol,
{
    formula_from_counts(&element_counts(atoms))
}

pub fn formula_from_counts(counts: &BTreeMap<String, u32>) -> String {
    let mut result = String::new();

    for lead in ["C", "H"] {
        if let Some(&n) = counts.get(lead) {
            append_element(&mut result, lead, n);
        }
    }

    for (sym, &count) in counts {
        if sym != "C" && sym != "H" {
            append_element(&mut result, sym, count);
        }
    }

    result
}

/// Formula of every atom in the molecule. Empty molecule gives `""`.
pub fn mol_formula(mol: &Mol) -> String {
    formula_of(mol.atoms())
}

fn append_element(buf: &mut String, symbol: &str, count: u32) {
    buf.push_str(symbol);
    if count > 1 {
        let _ = write!(buf, "{count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_formula() {
        assert_eq!(formula_of(Vec::<&str>::new()), "");
        assert_eq!(mol_formula(&Mol::new()), "");
    }

    #[test]
    fn single_atom() {
        assert_eq!(formula_of(["C"]), "C");
    }

    #[test]
    fn methane() {
        assert_eq!(formula_of(["C", "H", "H", "H", "H"]), "CH4");
    }

    #[test]
    fn ethanol_hill_order() {
        let atoms = ["O", "C", "H", "H", "C", "H", "H", "H", "H"];
        assert_eq!(formula_of(atoms), "C2H6O");
    }

    #[test]
    fn omits_subscript_one() {
        assert_eq!(formula_of(["C", "H", "N"]), "CHN");
    }

    #[test]
    fn no_carbon() {
        assert_eq!(formula_of(["H", "H", "O"]), "H2O");
        assert_eq!(formula_of(["N", "H", "H", "H"]), "H3N");
    }

    #[test]
    fn several_heteroatoms() {
        assert_eq!(formula_of(["C", "H", "N", "O", "O"]), "CHNO2");
        assert_eq!(formula_of(["Cl", "C", "Br", "H"]), "CHBrCl");
    }

    #[test]
    fn unknown_symbols_still_counted() {
        assert_eq!(formula_of(["Xx", "C", "Xx"]), "CXx2");
    }

    #[test]
    fn molecule_formula() {
        let mut mol = Mol::new();
        mol.add_atom("O", 0.0, 0.0);
        mol.add_atom("H", 0.0, 0.0);
        mol.add_atom("H", 0.0, 0.0);
        assert_eq!(mol_formula(&mol), "H2O");
    }

    #[test]
    fn counts_are_alphabetical() {
        let counts = element_counts(["O", "C", "H", "C"]);
        let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(keys, ["C", "H", "O"]);
        assert_eq!(counts["C"], 2);
    }
}
