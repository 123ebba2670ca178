//! The tutor request handed to the chat assistant.

use std::fmt::Write;

use crate::formula::mol_formula;
use crate::groups::detect_functional_groups;
use crate::identify::identify_molecule;
use crate::mol::Mol;
use crate::valence::unsatisfied_atoms;

const CLOSING: &str = " Explica de forma didáctica: 1) ¿Es válida esta molécula? \
2) ¿Qué propiedades tiene? 3) ¿Qué grupos funcionales tiene y por qué son importantes? \
4) ¿Para qué se usa en la vida real?";

/// Describes the molecule in Spanish and asks for a step-by-step explanation.
///
/// The text covers the formula, the catalog name when one is found, every
/// bond in id order, the detected functional groups, and any atom still
/// missing bonds. Callers are expected to skip empty molecules.
pub fn molecule_to_prompt(mol: &Mol) -> String {
    let mut out = format!(
        "Soy estudiante aprendiendo química. He construido una molécula con fórmula {}",
        mol_formula(mol)
    );
    if let Some(known) = identify_molecule(mol) {
        let _ = write!(out, ", que corresponde a {}", known.name);
    }
    out.push('.');

    let bonds: Vec<String> = mol
        .bonds()
        .filter_map(|b| {
            let a = mol.atom(b.a)?;
            let z = mol.atom(b.b)?;
            Some(format!("{}-{} (enlace {})", a.element, z.element, b.order.label()))
        })
        .collect();
    if !bonds.is_empty() {
        let _ = write!(out, " Los enlaces son: {}.", bonds.join(", "));
    }

    let groups = detect_functional_groups(mol);
    if !groups.is_empty() {
        let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
        let _ = write!(out, " He formado estos grupos funcionales: {}.", names.join(", "));
    }

    let open = unsatisfied_atoms(mol);
    if open.is_empty() {
        out.push_str(" Todos los átomos tienen sus valencias completas.");
    } else {
        let details: Vec<String> = open
            .iter()
            .map(|(atom, rem)| {
                let plural = if *rem > 1 { "s" } else { "" };
                format!("{} (le faltan {rem} enlace{plural})", atom.element)
            })
            .collect();
        let _ = write!(
            out,
            " NOTA: hay átomos con enlaces sin completar: {}.",
            details.join(", ")
        );
        out.push_str(" Explícame si mi estructura es correcta, qué le falta, y cómo debería completarla.");
    }

    out.push_str(CLOSING);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondOrder;

    #[test]
    fn complete_water() {
        let mut mol = Mol::new();
        let o = mol.add_atom("O", 60.0, 60.0);
        let h1 = mol.add_atom("H", 30.0, 60.0);
        let h2 = mol.add_atom("H", 90.0, 60.0);
        mol.add_bond(o, h1, BondOrder::Single).unwrap();
        mol.add_bond(o, h2, BondOrder::Single).unwrap();

        let text = molecule_to_prompt(&mol);
        assert!(text.starts_with(
            "Soy estudiante aprendiendo química. He construido una molécula con fórmula H2O, que corresponde a Agua."
        ));
        assert!(text.contains(" Los enlaces son: O-H (enlace simple), O-H (enlace simple)."));
        assert!(text.contains(" Todos los átomos tienen sus valencias completas."));
        assert!(!text.contains("NOTA"));
        assert!(!text.contains("grupos funcionales:"));
        assert!(text.ends_with("4) ¿Para qué se usa en la vida real?"));
    }

    #[test]
    fn lone_carbon_reports_missing_bonds() {
        let mut mol = Mol::new();
        mol.add_atom("C", 0.0, 0.0);
        let text = molecule_to_prompt(&mol);
        assert!(text.contains("fórmula C."));
        assert!(!text.contains("Los enlaces son"));
        assert!(text.contains(
            " NOTA: hay átomos con enlaces sin completar: C (le faltan 4 enlaces)."
        ));
        assert!(text.contains(" Explícame si mi estructura es correcta"));
    }

    #[test]
    fn singular_missing_bond() {
        let mut mol = Mol::new();
        let o = mol.add_atom("O", 0.0, 0.0);
        let h = mol.add_atom("H", 30.0, 0.0);
        mol.add_bond(h, o, BondOrder::Single).unwrap();
        let text = molecule_to_prompt(&mol);
        assert!(text.contains("H-O (enlace simple)"));
        assert!(text.contains("O (le faltan 1 enlace)."));
    }

    #[test]
    fn lists_groups_and_bond_labels() {
        let mut mol = Mol::new();
        let c = mol.add_atom("C", 0.0, 0.0);
        let o = mol.add_atom("O", 30.0, 0.0);
        let h1 = mol.add_atom("H", 0.0, 30.0);
        let h2 = mol.add_atom("H", 0.0, -30.0);
        mol.add_bond(c, o, BondOrder::Double).unwrap();
        mol.add_bond(c, h1, BondOrder::Single).unwrap();
        mol.add_bond(c, h2, BondOrder::Single).unwrap();

        let text = molecule_to_prompt(&mol);
        assert!(text.contains("que corresponde a Formaldehído."));
        assert!(text.contains("C-O (enlace doble)"));
        assert!(text.contains(" He formado estos grupos funcionales: Aldehído (-CHO)."));
    }
}
