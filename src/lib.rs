pub mod atom;
pub mod bohr;
pub mod bond;
pub mod config;
pub mod description;
pub mod editor;
pub mod element;
pub mod formula;
pub mod groups;
pub mod identify;
pub mod ids;
pub mod mol;
pub mod prompt;
pub mod traits;
pub mod valence;

pub use atom::Atom;
pub use bohr::{bohr_model, bohr_model_for, BohrModel, Shell};
pub use bond::{Bond, BondOrder};
pub use config::EditorConfig;
pub use description::{parse_description, DescriptionError, LoadReport, MoleculeDescription};
pub use editor::{Analysis, Edit, Editor, OpenValence, Tool};
pub use element::{Element, PALETTE};
pub use formula::{formula_of, mol_formula};
pub use groups::{detect_functional_groups, FunctionalGroup, GroupMatch};
pub use identify::{
    connectivity_signature, identify, identify_molecule, Identification, KnownMolecule, MatchKind,
    KNOWN_MOLECULES,
};
pub use ids::{AtomId, BondId, IdAllocator};
pub use mol::{BondError, Mol};
pub use prompt::molecule_to_prompt;
pub use traits::{HasBondOrder, HasSymbol};
pub use valence::{
    can_form_bond, can_increase_bond_order, is_complete, remaining_capacity, unsatisfied_atoms,
    used_bond_capacity,
};
